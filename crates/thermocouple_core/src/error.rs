use std::fmt;

/// 変換処理のエラー
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// NaN や無限大などの数値として扱えない入力
    InvalidInput(f32),
    /// 校正テーブルの範囲外（Strict ポリシー時のみ）
    OutOfRange { value: f32, min: f32, max: f32 },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidInput(value) => {
                write!(f, "Invalid input value: {}", value)
            }
            ConversionError::OutOfRange { value, min, max } => write!(
                f,
                "Value {} is outside the calibration range [{}, {}]",
                value, min, max
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 校正テーブル構築時のエラー
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// ブレークポイントが2点未満
    TooFewBreakpoints(usize),
    /// 有限でない値を含む
    NonFinite { index: usize },
    /// 電圧または温度が直前のブレークポイント以下
    NotIncreasing { index: usize },
    /// テキスト形式の解析エラー（行番号は1始まり）
    Parse { line: usize, reason: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooFewBreakpoints(count) => write!(
                f,
                "Calibration table needs at least 2 breakpoints, got {}",
                count
            ),
            TableError::NonFinite { index } => {
                write!(f, "Breakpoint {} contains a non-finite value", index)
            }
            TableError::NotIncreasing { index } => write!(
                f,
                "Breakpoint {} is not strictly increasing in voltage and temperature",
                index
            ),
            TableError::Parse { line, reason } => {
                write!(f, "Calibration table line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// 温度単位の解析エラー
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    UnknownUnit(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::UnknownUnit(unit) => write!(f, "Unknown temperature unit: {}", unit),
        }
    }
}

impl std::error::Error for UnitError {}
