use log::{debug, info, warn};
use thermocouple_core::ThermocoupleConverter;

use crate::core::config::AppConfig;
use crate::core::measured_data::MeasuredData;
use crate::hardware::sensor::{AmbientSensor, ThermocoupleAdc};

/// 熱電対の全チャンネルを読み取り、温度に変換する
///
/// あるチャンネルの失敗は警告として記録し、残りのチャンネルの測定は続けます。
pub struct ThermocoupleSampler {
    converter: ThermocoupleConverter,
    channel_count: u8,
    compensate: bool,
}

impl ThermocoupleSampler {
    pub fn new(converter: ThermocoupleConverter, channel_count: u8) -> Self {
        Self {
            converter,
            channel_count,
            compensate: true,
        }
    }

    /// 設定から作成
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.converter(), config.channel_count)
            .with_compensation(config.cold_junction_compensation)
    }

    /// 冷接点補償の有無を設定
    pub fn with_compensation(mut self, compensate: bool) -> Self {
        self.compensate = compensate;
        self
    }

    pub fn converter(&self) -> &ThermocoupleConverter {
        &self.converter
    }

    pub fn channel_count(&self) -> u8 {
        self.channel_count
    }

    /// 1回分の測定を行う
    ///
    /// # 引数
    /// * `adc` - 熱電対の起電力を読み取るADC
    /// * `ambient` - 冷接点補償に使う周囲温度センサー（なければ補償なし）
    pub fn sample<A>(&self, adc: &mut A, ambient: Option<&mut dyn AmbientSensor>) -> MeasuredData
    where
        A: ThermocoupleAdc + ?Sized,
    {
        let mut data = MeasuredData::new(self.channel_count);

        let ambient_celsius = match ambient {
            Some(sensor) => match sensor.read_celsius() {
                // テーブル外や NaN の周囲温度は補償に使えないため読み取り失敗と同じ扱い
                Ok(celsius) => match self.converter.celsius_to_micro_volts(celsius) {
                    Ok(_) => Some(celsius),
                    Err(e) => {
                        warn!("周囲温度が無効です: {}", e);
                        data.add_warning(format!("周囲温度: {}", e));
                        None
                    }
                },
                Err(e) => {
                    warn!("周囲温度の読み取りに失敗: {:?}", e);
                    data.add_warning(format!("周囲温度: {}", e));
                    None
                }
            },
            None => None,
        };
        data = data.with_ambient(ambient_celsius);

        let cold_junction = if self.compensate { ambient_celsius } else { None };

        for channel in 0..self.channel_count {
            let micro_volts = match adc.read_micro_volts(channel) {
                Ok(micro_volts) => micro_volts,
                Err(e) => {
                    warn!("CH{} の読み取りに失敗: {:?}", channel + 1, e);
                    data.add_warning(format!("CH{}: {}", channel + 1, e));
                    continue;
                }
            };
            debug!("CH{}: {:.1} μV", channel + 1, micro_volts);

            let result = match cold_junction {
                Some(junction) => self.converter.convert_compensated(micro_volts, junction),
                None => self.converter.convert(micro_volts),
            };

            match result {
                Ok(celsius) => data.set_channel(channel, Some(celsius)),
                Err(e) => {
                    warn!("CH{} の温度変換に失敗: {}", channel + 1, e);
                    data.add_warning(format!("CH{}: {}", channel + 1, e));
                }
            }
        }

        info!(
            "🌡️ 測定完了: {}/{}ch 有効",
            data.valid_channel_count(),
            self.channel_count
        );

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::mock::{MockAmbientSensor, MockThermocoupleAdc};
    use thermocouple_core::{RangePolicy, TemperatureUnit};

    #[test]
    fn test_sample_without_ambient() {
        let sampler = ThermocoupleSampler::new(ThermocoupleConverter::k_type(), 2);
        let mut adc = MockThermocoupleAdc::new()
            .with_reading(0, 4096.0)
            .with_reading(1, 0.0);

        let data = sampler.sample(&mut adc, None);

        assert_eq!(data.channel_celsius, vec![Some(100.0), Some(0.0)]);
        assert_eq!(data.ambient_celsius, None);
        assert!(data.sensor_warnings.is_empty());
    }

    #[test]
    fn test_sample_reads_every_channel() {
        let sampler = ThermocoupleSampler::new(ThermocoupleConverter::k_type(), 4);
        let mut adc = MockThermocoupleAdc::new();

        let data = sampler.sample(&mut adc, None);

        assert_eq!(adc.read_count, 4);
        assert_eq!(data.valid_channel_count(), 0);
        assert_eq!(data.sensor_warnings.len(), 4);
    }

    #[test]
    fn test_failed_channel_does_not_stop_others() {
        let sampler = ThermocoupleSampler::new(ThermocoupleConverter::k_type(), 3);
        let mut adc = MockThermocoupleAdc::new()
            .with_reading(0, 4096.0)
            .with_reading(2, 20644.0);

        let data = sampler.sample(&mut adc, None);

        assert_eq!(data.channel(0), Some(100.0));
        assert_eq!(data.channel(1), None);
        assert_eq!(data.channel(2), Some(500.0));
        assert_eq!(data.sensor_warnings.len(), 1);
        assert!(data.sensor_warnings[0].starts_with("CH2"));
    }

    #[test]
    fn test_out_of_range_channel_is_warning() {
        let sampler = ThermocoupleSampler::new(ThermocoupleConverter::k_type(), 1);
        let mut adc = MockThermocoupleAdc::new().with_reading(0, 80000.0);

        let data = sampler.sample(&mut adc, None);

        assert_eq!(data.channel(0), None);
        assert_eq!(data.sensor_warnings.len(), 1);
    }

    #[test]
    fn test_clamp_policy_keeps_channel() {
        let converter = ThermocoupleConverter::k_type().with_policy(RangePolicy::Clamp);
        let sampler = ThermocoupleSampler::new(converter, 1);
        let mut adc = MockThermocoupleAdc::new().with_reading(0, 80000.0);

        let data = sampler.sample(&mut adc, None);

        assert_eq!(data.channel(0), Some(1370.0));
        assert!(data.sensor_warnings.is_empty());
    }

    #[test]
    fn test_compensation_with_ambient() {
        let sampler = ThermocoupleSampler::new(ThermocoupleConverter::k_type(), 1);
        let mut adc = MockThermocoupleAdc::new().with_reading(0, 0.0);
        let mut ambient = MockAmbientSensor::new(25.0);

        let data = sampler.sample(&mut adc, Some(&mut ambient));

        assert_eq!(data.ambient_celsius, Some(25.0));
        let celsius = data.channel(0).unwrap();
        assert!((celsius - 25.0).abs() < 0.05);
    }

    #[test]
    fn test_compensation_disabled() {
        let sampler =
            ThermocoupleSampler::new(ThermocoupleConverter::k_type(), 1).with_compensation(false);
        let mut adc = MockThermocoupleAdc::new().with_reading(0, 0.0);
        let mut ambient = MockAmbientSensor::new(25.0);

        let data = sampler.sample(&mut adc, Some(&mut ambient));

        assert_eq!(data.ambient_celsius, Some(25.0));
        assert_eq!(data.channel(0), Some(0.0));
    }

    #[test]
    fn test_ambient_failure_falls_back_to_uncompensated() {
        let sampler = ThermocoupleSampler::new(ThermocoupleConverter::k_type(), 1);
        let mut adc = MockThermocoupleAdc::new().with_reading(0, 4096.0);
        let mut ambient = MockAmbientSensor::failing();

        let data = sampler.sample(&mut adc, Some(&mut ambient));

        assert_eq!(data.ambient_celsius, None);
        assert_eq!(data.channel(0), Some(100.0));
        assert_eq!(data.sensor_warnings.len(), 1);
        assert!(data.sensor_warnings[0].starts_with("周囲温度"));
    }

    #[test]
    fn test_nan_ambient_falls_back_to_uncompensated() {
        let sampler = ThermocoupleSampler::new(ThermocoupleConverter::k_type(), 4);
        let mut adc = MockThermocoupleAdc::new();
        for channel in 0..4 {
            adc.set_reading(channel, 4096.0);
        }
        let mut ambient = MockAmbientSensor::new(f32::NAN);

        let data = sampler.sample(&mut adc, Some(&mut ambient));

        assert_eq!(data.ambient_celsius, None);
        assert_eq!(data.channel_celsius, vec![Some(100.0); 4]);
        assert_eq!(data.sensor_warnings.len(), 1);
        assert!(data.sensor_warnings[0].starts_with("周囲温度"));
        assert!(!data.get_summary(TemperatureUnit::Celsius).contains("NaN"));
    }

    #[test]
    fn test_ambient_outside_table_falls_back_to_uncompensated() {
        let sampler = ThermocoupleSampler::new(ThermocoupleConverter::k_type(), 2);
        let mut adc = MockThermocoupleAdc::new()
            .with_reading(0, 4096.0)
            .with_reading(1, 20644.0);
        let mut ambient = MockAmbientSensor::new(-250.0);

        let data = sampler.sample(&mut adc, Some(&mut ambient));

        assert_eq!(data.ambient_celsius, None);
        assert_eq!(data.channel(0), Some(100.0));
        assert_eq!(data.channel(1), Some(500.0));
        assert_eq!(data.sensor_warnings.len(), 1);
    }
}
