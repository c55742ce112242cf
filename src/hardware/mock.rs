use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use embedded_hal::digital::{Error, ErrorKind, ErrorType, OutputPin, PinState};

use super::sensor::{AmbientSensor, ThermocoupleAdc};

/// Mockピンのエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// テスト用の出力ピンMock実装
///
/// 書き込まれたレベルを記録し、テストで検証できます。
/// clone したインスタンス同士は記録を共有します。
#[derive(Debug, Clone, Default)]
pub struct MockOutputPin {
    pub history: Arc<Mutex<Vec<PinState>>>,
    pub simulate_error: Arc<Mutex<bool>>,
}

impl MockOutputPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト用: 書き込まれたレベルの履歴を取得
    pub fn get_history(&self) -> Vec<PinState> {
        self.history.lock().unwrap().clone()
    }

    /// 最後に書き込まれたレベル
    pub fn current_state(&self) -> Option<PinState> {
        self.history.lock().unwrap().last().copied()
    }

    /// テスト用: ピンエラーをシミュレート
    pub fn set_error(&self, enable: bool) {
        *self.simulate_error.lock().unwrap() = enable;
    }

    fn write(&mut self, state: PinState) -> Result<(), MockPinError> {
        if *self.simulate_error.lock().unwrap() {
            return Err(MockPinError);
        }
        self.history.lock().unwrap().push(state);
        Ok(())
    }
}

impl ErrorType for MockOutputPin {
    type Error = MockPinError;
}

impl OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::High)
    }
}

/// テスト用のADC Mock実装
///
/// チャンネルごとに読み取り値を設定します。未設定のチャンネルは読み取りエラーになります。
#[derive(Debug, Clone, Default)]
pub struct MockThermocoupleAdc {
    readings: HashMap<u8, f32>,
    pub read_count: usize,
}

impl MockThermocoupleAdc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reading(mut self, channel: u8, micro_volts: f32) -> Self {
        self.readings.insert(channel, micro_volts);
        self
    }

    pub fn set_reading(&mut self, channel: u8, micro_volts: f32) {
        self.readings.insert(channel, micro_volts);
    }

    /// テスト用: 指定チャンネルを読み取りエラーにする
    pub fn disconnect(&mut self, channel: u8) {
        self.readings.remove(&channel);
    }
}

impl ThermocoupleAdc for MockThermocoupleAdc {
    fn read_micro_volts(&mut self, channel: u8) -> Result<f32> {
        self.read_count += 1;
        self.readings
            .get(&channel)
            .copied()
            .ok_or_else(|| anyhow!("チャンネル{}の熱電対が接続されていません", channel))
    }
}

/// テスト用の周囲温度センサーMock実装
#[derive(Debug, Clone, Default)]
pub struct MockAmbientSensor {
    celsius: Option<f32>,
}

impl MockAmbientSensor {
    pub fn new(celsius: f32) -> Self {
        Self {
            celsius: Some(celsius),
        }
    }

    /// 常に読み取りエラーを返すセンサー
    pub fn failing() -> Self {
        Self { celsius: None }
    }
}

impl AmbientSensor for MockAmbientSensor {
    fn read_celsius(&mut self) -> Result<f32> {
        self.celsius
            .ok_or_else(|| anyhow!("周囲温度センサーの読み取りに失敗しました"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_pin_records_levels() {
        let mut pin = MockOutputPin::new();
        pin.set_high().unwrap();
        pin.set_low().unwrap();

        assert_eq!(pin.get_history(), vec![PinState::High, PinState::Low]);
        assert_eq!(pin.current_state(), Some(PinState::Low));
    }

    #[test]
    fn test_mock_pin_set_state() {
        let mut pin = MockOutputPin::new();
        pin.set_state(PinState::High).unwrap();

        assert_eq!(pin.current_state(), Some(PinState::High));
    }

    #[test]
    fn test_mock_pin_error() {
        let mut pin = MockOutputPin::new();
        pin.set_error(true);

        assert_eq!(pin.set_high(), Err(MockPinError));
        assert!(pin.get_history().is_empty());
        assert_eq!(MockPinError.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_mock_adc() {
        let mut adc = MockThermocoupleAdc::new().with_reading(0, 4096.0);

        assert_eq!(adc.read_micro_volts(0).unwrap(), 4096.0);
        assert!(adc.read_micro_volts(1).is_err());
        assert_eq!(adc.read_count, 2);

        adc.disconnect(0);
        assert!(adc.read_micro_volts(0).is_err());
    }

    #[test]
    fn test_mock_ambient() {
        assert_eq!(MockAmbientSensor::new(25.0).read_celsius().unwrap(), 25.0);
        assert!(MockAmbientSensor::failing().read_celsius().is_err());
    }
}
