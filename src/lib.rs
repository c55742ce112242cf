/*!
 * # Thermocouple Logger Library
 *
 * K型熱電対データロガーのアプリケーション層ライブラリ
 *
 * ## モジュール構成
 * - `core`: 設定、測定データ、サンプリング処理
 * - `hardware`: バックライト制御、センサーポート、テスト用Mock
 *
 * 温度変換そのものは `thermocouple_core` クレートが担当します。
 */

pub mod core;
pub mod hardware;

pub use crate::core::{AppConfig, ConfigError, MeasuredData, ThermocoupleSampler};
pub use hardware::{AmbientSensor, BacklightControl, BacklightError, PinBacklight, ThermocoupleAdc};
pub use thermocouple_core::{RangePolicy, TemperatureUnit, ThermocoupleConverter};

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
