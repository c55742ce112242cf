use thermocouple_core::{RangePolicy, TemperatureUnit};

/// 接続できる熱電対チャンネルの最大数
pub const MAX_CHANNELS: u8 = 4;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("channel_count の値が無効です (1-{max}): {value}")]
    InvalidChannelCount { value: u8, max: u8 },
    #[error("range_policy の値が無効です (strict/clamp): {0}")]
    InvalidRangePolicy(String),
    #[error("display_unit の値が無効です (C/F/K): {0}")]
    InvalidDisplayUnit(String),
    #[error("backlight_gpio の値が無効です: {0}")]
    InvalidBacklightGpio(i32),
}

pub fn parse_channel_count(value: u8) -> Result<u8, ValidationError> {
    if (1..=MAX_CHANNELS).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidChannelCount {
            value,
            max: MAX_CHANNELS,
        })
    }
}

pub fn parse_range_policy(value: &str) -> Result<RangePolicy, ValidationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(RangePolicy::Strict),
        "clamp" => Ok(RangePolicy::Clamp),
        _ => Err(ValidationError::InvalidRangePolicy(value.to_string())),
    }
}

pub fn parse_display_unit(value: &str) -> Result<TemperatureUnit, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::InvalidDisplayUnit(value.to_string()))
}

pub fn validate_backlight_gpio(value: i32) -> Result<i32, ValidationError> {
    if value < 0 {
        Err(ValidationError::InvalidBacklightGpio(value))
    } else {
        Ok(value)
    }
}
