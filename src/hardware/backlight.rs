use embedded_hal::digital::OutputPin;
use log::{debug, info};

/// バックライト制御に関するエラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BacklightError {
    #[error("バックライトが初期化されていません（先に configure を呼び出してください）")]
    NotConfigured,

    #[error("バックライトピンの制御に失敗しました: {0}")]
    Pin(String),
}

/// LCDバックライトの制御インターフェース
///
/// 温度変換や表示処理はピンを直接操作せず、このトレイト経由で点灯/消灯します。
pub trait BacklightControl {
    /// ピンを既知の状態（消灯）に初期化する
    fn configure(&mut self) -> Result<(), BacklightError>;

    /// 点灯
    fn enable(&mut self) -> Result<(), BacklightError>;

    /// 消灯
    fn disable(&mut self) -> Result<(), BacklightError>;

    fn is_enabled(&self) -> bool;
}

/// embedded-hal の出力ピンで駆動するバックライト
pub struct PinBacklight<P> {
    pin: P,
    active_low: bool,
    configured: bool,
    enabled: bool,
}

impl<P: OutputPin> PinBacklight<P> {
    /// HIGH で点灯するバックライトを作成します
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
            configured: false,
            enabled: false,
        }
    }

    /// LOW で点灯する配線向け
    pub fn active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    /// ピンを返してバックライト制御を終了します
    pub fn release(self) -> P {
        self.pin
    }

    fn drive(&mut self, on: bool) -> Result<(), BacklightError> {
        let result = if on != self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|e| BacklightError::Pin(format!("{:?}", e)))?;

        debug!("バックライト: {}", if on { "ON" } else { "OFF" });
        self.enabled = on;
        Ok(())
    }
}

impl<P: OutputPin> BacklightControl for PinBacklight<P> {
    fn configure(&mut self) -> Result<(), BacklightError> {
        self.drive(false)?;
        self.configured = true;
        info!(
            "バックライトを初期化しました (active_low: {})",
            self.active_low
        );
        Ok(())
    }

    fn enable(&mut self) -> Result<(), BacklightError> {
        if !self.configured {
            return Err(BacklightError::NotConfigured);
        }
        self.drive(true)
    }

    fn disable(&mut self) -> Result<(), BacklightError> {
        if !self.configured {
            return Err(BacklightError::NotConfigured);
        }
        self.drive(false)
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::mock::MockOutputPin;
    use embedded_hal::digital::PinState;

    #[test]
    fn test_configure_drives_pin_off() {
        let pin = MockOutputPin::new();
        let mut backlight = PinBacklight::new(pin.clone());

        backlight.configure().unwrap();

        assert_eq!(pin.get_history(), vec![PinState::Low]);
        assert!(!backlight.is_enabled());
    }

    #[test]
    fn test_enable_disable_active_high() {
        let pin = MockOutputPin::new();
        let mut backlight = PinBacklight::new(pin.clone());

        backlight.configure().unwrap();
        backlight.enable().unwrap();
        assert!(backlight.is_enabled());
        backlight.disable().unwrap();
        assert!(!backlight.is_enabled());

        assert_eq!(
            pin.get_history(),
            vec![PinState::Low, PinState::High, PinState::Low]
        );
    }

    #[test]
    fn test_enable_active_low() {
        let pin = MockOutputPin::new();
        let mut backlight = PinBacklight::new(pin.clone()).active_low(true);

        backlight.configure().unwrap();
        backlight.enable().unwrap();

        assert_eq!(pin.get_history(), vec![PinState::High, PinState::Low]);
        assert_eq!(pin.current_state(), Some(PinState::Low));
    }

    #[test]
    fn test_enable_before_configure() {
        let pin = MockOutputPin::new();
        let mut backlight = PinBacklight::new(pin.clone());

        assert_eq!(backlight.enable(), Err(BacklightError::NotConfigured));
        assert_eq!(backlight.disable(), Err(BacklightError::NotConfigured));
        assert!(pin.get_history().is_empty());
    }

    #[test]
    fn test_pin_error_is_reported() {
        let pin = MockOutputPin::new();
        let mut backlight = PinBacklight::new(pin.clone());
        backlight.configure().unwrap();

        pin.set_error(true);
        let result = backlight.enable();

        assert!(matches!(result, Err(BacklightError::Pin(_))));
        assert!(!backlight.is_enabled());
    }

    #[test]
    fn test_release_returns_pin() {
        let pin = MockOutputPin::new();
        let mut backlight = PinBacklight::new(pin.clone());
        backlight.configure().unwrap();

        let released = backlight.release();
        assert_eq!(released.get_history(), vec![PinState::Low]);
    }
}
