/// ハードウェア制御モジュール
pub mod backlight;
pub mod mock;
pub mod sensor;

pub use backlight::{BacklightControl, BacklightError, PinBacklight};
pub use sensor::{AmbientSensor, ThermocoupleAdc};
