use crate::error::ConversionError;
use crate::table::{CalibrationTable, Lookup};

/// テーブル範囲外の入力に対する扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// 範囲外は `ConversionError::OutOfRange`
    #[default]
    Strict,
    /// 範囲外は端点の値に丸める
    Clamp,
}

/// 熱電対の起電力（μV）を温度（℃）に変換する
///
/// 校正テーブルは構築後に変更されないため、複数の呼び出し元から
/// ロックなしで共有できる。
#[derive(Debug, Clone, PartialEq)]
pub struct ThermocoupleConverter {
    table: CalibrationTable,
    policy: RangePolicy,
}

impl ThermocoupleConverter {
    pub fn new(table: CalibrationTable, policy: RangePolicy) -> Self {
        Self { table, policy }
    }

    /// NIST K型テーブルと Strict ポリシーで作成
    pub fn k_type() -> Self {
        Self::new(CalibrationTable::k_type(), RangePolicy::Strict)
    }

    pub fn with_policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn table(&self) -> &CalibrationTable {
        &self.table
    }

    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    /// 変換可能な電圧範囲 (最小μV, 最大μV)
    pub fn domain(&self) -> (f32, f32) {
        self.table.voltage_range()
    }

    /// 起電力（μV）を温度（℃）に変換
    ///
    /// # Examples
    /// ```
    /// use thermocouple_core::ThermocoupleConverter;
    ///
    /// let converter = ThermocoupleConverter::k_type();
    /// assert_eq!(converter.convert(4096.0), Ok(100.0));
    /// ```
    pub fn convert(&self, micro_volts: f32) -> Result<f32, ConversionError> {
        let (min, max) = self.table.voltage_range();
        let (low, high) = self.table.temperature_range();
        self.resolve(self.table.interpolate(micro_volts)?, micro_volts, (min, max), (low, high))
    }

    /// 温度（℃）から起電力（μV）を求める
    pub fn celsius_to_micro_volts(&self, celsius: f32) -> Result<f32, ConversionError> {
        let (min, max) = self.table.temperature_range();
        let (low, high) = self.table.voltage_range();
        self.resolve(self.table.inverse(celsius)?, celsius, (min, max), (low, high))
    }

    /// 冷接点補償付きの変換
    ///
    /// 冷接点温度に相当する起電力を測定値に加えてから変換する。
    pub fn convert_compensated(
        &self,
        micro_volts: f32,
        cold_junction_celsius: f32,
    ) -> Result<f32, ConversionError> {
        if !micro_volts.is_finite() {
            return Err(ConversionError::InvalidInput(micro_volts));
        }
        let junction_micro_volts = self.celsius_to_micro_volts(cold_junction_celsius)?;
        let total = micro_volts + junction_micro_volts;
        if !total.is_finite() {
            // 有限値同士の加算によるオーバーフローは範囲外として扱う
            let lookup = if total > 0.0 { Lookup::Above } else { Lookup::Below };
            return self.resolve(
                lookup,
                micro_volts,
                self.table.voltage_range(),
                self.table.temperature_range(),
            );
        }
        self.convert(total)
    }

    fn resolve(
        &self,
        lookup: Lookup,
        input: f32,
        (min, max): (f32, f32),
        (low, high): (f32, f32),
    ) -> Result<f32, ConversionError> {
        match (lookup, self.policy) {
            (Lookup::Within(value), _) => Ok(value),
            (Lookup::Below, RangePolicy::Clamp) => Ok(low),
            (Lookup::Above, RangePolicy::Clamp) => Ok(high),
            (_, RangePolicy::Strict) => Err(ConversionError::OutOfRange {
                value: input,
                min,
                max,
            }),
        }
    }
}
