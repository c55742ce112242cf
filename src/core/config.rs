use log::info;
use thermocouple_core::{
    CalibrationTable, RangePolicy, TableError, TemperatureUnit, ThermocoupleConverter,
};

use crate::core::config_validation::{
    parse_channel_count, parse_display_unit, parse_range_policy, validate_backlight_gpio,
    ValidationError,
};

/// アプリケーション設定
///
/// この構造体はビルド時に`cfg.toml`ファイルから読み込まれた設定を保持します。
/// ファイルがない場合は既定値が使われます。
#[toml_cfg::toml_config]
pub struct Config {
    #[default(4)]
    channel_count: u8,

    #[default("strict")]
    range_policy: &'static str,

    #[default("C")]
    display_unit: &'static str,

    #[default(true)]
    cold_junction_compensation: bool,

    #[default(5)]
    backlight_gpio: i32,

    #[default(false)] // 配線によってはLOWで点灯
    backlight_active_low: bool,

    #[default("")] // 空文字列の場合は組み込みの K型テーブル
    calibration_table: &'static str,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("校正テーブルの読み込みに失敗しました: {0}")]
    CalibrationTable(#[from] TableError),
}

/// 検証済みのアプリケーション設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 熱電対チャンネル数
    pub channel_count: u8,

    /// テーブル範囲外の扱い
    pub range_policy: RangePolicy,

    /// 表示単位
    pub display_unit: TemperatureUnit,

    /// 周囲温度による冷接点補償を行うか
    pub cold_junction_compensation: bool,

    /// バックライトのGPIO番号
    pub backlight_gpio: i32,

    pub backlight_active_low: bool,

    /// 起動時に一度だけ読み込む校正テーブル
    pub calibration_table: CalibrationTable,
}

impl AppConfig {
    /// 設定ファイルから設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        let config = CONFIG;

        let channel_count = parse_channel_count(config.channel_count)?;
        let range_policy = parse_range_policy(config.range_policy)?;
        let display_unit = parse_display_unit(config.display_unit)?;
        let backlight_gpio = validate_backlight_gpio(config.backlight_gpio)?;
        let calibration_table = load_calibration_table(config.calibration_table)?;

        info!(
            "設定を読み込みました: {}ch, ポリシー: {:?}, 表示単位: {}, 校正点: {}",
            channel_count,
            range_policy,
            display_unit,
            calibration_table.len()
        );

        Ok(AppConfig {
            channel_count,
            range_policy,
            display_unit,
            cold_junction_compensation: config.cold_junction_compensation,
            backlight_gpio,
            backlight_active_low: config.backlight_active_low,
            calibration_table,
        })
    }

    /// 設定に従って変換器を作成
    pub fn converter(&self) -> ThermocoupleConverter {
        ThermocoupleConverter::new(self.calibration_table.clone(), self.range_policy)
    }
}

/// 校正テーブルを読み込む（空文字列なら組み込みの K型テーブル）
pub fn load_calibration_table(text: &str) -> Result<CalibrationTable, TableError> {
    if text.trim().is_empty() {
        Ok(CalibrationTable::k_type())
    } else {
        CalibrationTable::parse(text)
    }
}
