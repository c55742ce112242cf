use std::str::FromStr;

use crate::error::{ConversionError, TableError};
use crate::k_type::K_TYPE_BREAKPOINTS;

/// 校正点（電圧と温度の組）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// 熱電対起電力（μV）
    pub micro_volts: f32,
    /// 対応する温度（℃）
    pub celsius: f32,
}

impl Breakpoint {
    pub const fn new(micro_volts: f32, celsius: f32) -> Self {
        Self {
            micro_volts,
            celsius,
        }
    }
}

impl From<(f32, f32)> for Breakpoint {
    fn from((micro_volts, celsius): (f32, f32)) -> Self {
        Self::new(micro_volts, celsius)
    }
}

/// テーブル探索の結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    /// 最初の校正点より小さい
    Below,
    /// 最後の校正点より大きい
    Above,
    /// テーブル範囲内（補間済みの値）
    Within(f32),
}

/// 校正テーブル
///
/// 電圧・温度ともに狭義単調増加する校正点の列。構築後は変更できない。
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationTable {
    points: Vec<Breakpoint>,
}

impl CalibrationTable {
    /// 校正点の列からテーブルを作成
    ///
    /// # エラー
    /// - 校正点が2点未満: `TooFewBreakpoints`
    /// - NaN/無限大を含む: `NonFinite`
    /// - 電圧または温度が単調増加でない: `NotIncreasing`
    pub fn new(points: Vec<Breakpoint>) -> Result<Self, TableError> {
        if points.len() < 2 {
            return Err(TableError::TooFewBreakpoints(points.len()));
        }

        for (index, point) in points.iter().enumerate() {
            if !point.micro_volts.is_finite() || !point.celsius.is_finite() {
                return Err(TableError::NonFinite { index });
            }
            if index > 0 {
                let prev = &points[index - 1];
                if point.micro_volts <= prev.micro_volts || point.celsius <= prev.celsius {
                    return Err(TableError::NotIncreasing { index });
                }
            }
        }

        Ok(Self { points })
    }

    /// NIST K型熱電対の組み込みテーブル（-200℃〜1370℃）
    pub fn k_type() -> Self {
        Self {
            points: K_TYPE_BREAKPOINTS.iter().map(|&pair| pair.into()).collect(),
        }
    }

    /// テキスト形式からテーブルを読み込む
    ///
    /// 1行に `micro_volts,celsius` を1組。空行と `#` で始まる行は無視する。
    ///
    /// # Examples
    /// ```
    /// use thermocouple_core::CalibrationTable;
    ///
    /// let table = CalibrationTable::parse("# uV, C\n0, 0\n4096, 100\n").unwrap();
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let mut points = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }

            let mut fields = content.split(',').map(str::trim);
            let (Some(micro_volts), Some(celsius), None) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(TableError::Parse {
                    line,
                    reason: format!("expected 'micro_volts,celsius', got '{}'", content),
                });
            };

            points.push(Breakpoint::new(
                parse_field(micro_volts, line)?,
                parse_field(celsius, line)?,
            ));
        }

        Self::new(points)
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 構築時に2点以上が保証されるため常に false
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Breakpoint {
        self.points[0]
    }

    pub fn last(&self) -> Breakpoint {
        self.points[self.points.len() - 1]
    }

    /// 電圧の定義域 (最小μV, 最大μV)
    pub fn voltage_range(&self) -> (f32, f32) {
        (self.first().micro_volts, self.last().micro_volts)
    }

    /// 温度の値域 (最小℃, 最大℃)
    pub fn temperature_range(&self) -> (f32, f32) {
        (self.first().celsius, self.last().celsius)
    }

    /// 電圧から温度を線形補間で求める
    pub fn interpolate(&self, micro_volts: f32) -> Result<Lookup, ConversionError> {
        search(
            &self.points,
            micro_volts,
            |point| point.micro_volts,
            |point| point.celsius,
        )
    }

    /// 温度から電圧を線形補間で求める（冷接点補償用の逆引き）
    pub fn inverse(&self, celsius: f32) -> Result<Lookup, ConversionError> {
        search(
            &self.points,
            celsius,
            |point| point.celsius,
            |point| point.micro_volts,
        )
    }
}

impl FromStr for CalibrationTable {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_field(field: &str, line: usize) -> Result<f32, TableError> {
    field.parse::<f32>().map_err(|e| TableError::Parse {
        line,
        reason: format!("invalid number '{}': {}", field, e),
    })
}

/// 二分探索で `x` を挟む校正点を見つけ、線形補間する
fn search<K, V>(points: &[Breakpoint], x: f32, key: K, value: V) -> Result<Lookup, ConversionError>
where
    K: Fn(&Breakpoint) -> f32,
    V: Fn(&Breakpoint) -> f32,
{
    if !x.is_finite() {
        return Err(ConversionError::InvalidInput(x));
    }

    let first = &points[0];
    let last = &points[points.len() - 1];
    if x < key(first) {
        return Ok(Lookup::Below);
    }
    if x > key(last) {
        return Ok(Lookup::Above);
    }

    match points.binary_search_by(|point| key(point).total_cmp(&x)) {
        Ok(index) => Ok(Lookup::Within(value(&points[index]))),
        Err(index) => {
            // first < x < last なので 1 <= index < len
            let lower = &points[index - 1];
            let upper = &points[index];
            let ratio = (x - key(lower)) / (key(upper) - key(lower));
            Ok(Lookup::Within(
                value(lower) + (value(upper) - value(lower)) * ratio,
            ))
        }
    }
}
