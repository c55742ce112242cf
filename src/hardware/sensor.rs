use anyhow::Result;

/// 熱電対アンプ/ADC の読み取りインターフェース
///
/// このトレイトを実装することで、実機用とテスト用(Mock)の
/// 実装を切り替えることができます。
pub trait ThermocoupleAdc {
    /// 指定チャンネルの熱電対起電力をμV単位で読み取る
    fn read_micro_volts(&mut self, channel: u8) -> Result<f32>;
}

/// 周囲温度（冷接点温度）センサーのインターフェース
pub trait AmbientSensor {
    /// 周囲温度を℃単位で読み取る
    fn read_celsius(&mut self) -> Result<f32>;
}
