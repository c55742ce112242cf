/// コアシステムモジュール
pub mod config;
pub mod config_validation;
pub mod measured_data;
pub mod sampler;

pub use config::{AppConfig, ConfigError};
pub use measured_data::MeasuredData;
pub use sampler::ThermocoupleSampler;
