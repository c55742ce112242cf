use thermocouple_core::TemperatureUnit;

/// 1回分の測定データ（ハードウェア非依存）
///
/// 温度はすべて℃で保持し、表示時に単位を変換します。
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredData {
    /// チャンネルごとの温度。読み取りや変換に失敗したチャンネルは None
    pub channel_celsius: Vec<Option<f32>>,
    /// 周囲温度（冷接点温度）
    pub ambient_celsius: Option<f32>,
    pub sensor_warnings: Vec<String>,
}

impl MeasuredData {
    /// 全チャンネル未測定の状態で作成
    pub fn new(channel_count: u8) -> Self {
        Self {
            channel_celsius: vec![None; channel_count as usize],
            ambient_celsius: None,
            sensor_warnings: Vec::new(),
        }
    }

    /// 周囲温度を追加
    pub fn with_ambient(mut self, ambient: Option<f32>) -> Self {
        self.ambient_celsius = ambient;
        self
    }

    /// チャンネルの温度を設定（範囲外のチャンネルは無視）
    pub fn set_channel(&mut self, channel: u8, celsius: Option<f32>) {
        if let Some(slot) = self.channel_celsius.get_mut(channel as usize) {
            *slot = celsius;
        }
    }

    pub fn channel(&self, channel: u8) -> Option<f32> {
        self.channel_celsius.get(channel as usize).copied().flatten()
    }

    /// 警告メッセージを追加
    pub fn add_warning(&mut self, warning: String) {
        self.sensor_warnings.push(warning);
    }

    /// 有効な値を持つチャンネル数
    pub fn valid_channel_count(&self) -> usize {
        self.channel_celsius.iter().filter(|c| c.is_some()).count()
    }

    /// 有効なチャンネルの最高温度
    pub fn max_celsius(&self) -> Option<f32> {
        self.channel_celsius
            .iter()
            .flatten()
            .copied()
            .reduce(f32::max)
    }

    /// 測定データのサマリを取得
    pub fn get_summary(&self, unit: TemperatureUnit) -> String {
        let mut parts: Vec<String> = self
            .channel_celsius
            .iter()
            .enumerate()
            .map(|(index, celsius)| match celsius {
                Some(celsius) => format!("CH{}:{}", index + 1, unit.format(*celsius)),
                None => format!("CH{}:---", index + 1),
            })
            .collect();

        if let Some(ambient) = self.ambient_celsius {
            parts.push(format!("周囲:{}", unit.format(ambient)));
        }

        if !self.sensor_warnings.is_empty() {
            parts.push(format!("警告:{}件", self.sensor_warnings.len()));
        }

        parts.join(", ")
    }
}
