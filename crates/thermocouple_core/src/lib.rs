/*!
 * # Thermocouple Core
 *
 * K型熱電対の起電力（μV）を温度（℃）に変換するハードウェア非依存ライブラリ
 *
 * ## モジュール構成
 * - `table`: 校正テーブル（二分探索と線形補間）
 * - `k_type`: NIST K型基準テーブル
 * - `converter`: 範囲外ポリシーと冷接点補償を含む変換器
 * - `units`: 表示用の温度単位
 * - `error`: エラー型
 */

pub mod converter;
pub mod error;
pub mod k_type;
pub mod table;
pub mod units;

pub use converter::{RangePolicy, ThermocoupleConverter};
pub use error::{ConversionError, TableError, UnitError};
pub use table::{Breakpoint, CalibrationTable, Lookup};
pub use units::TemperatureUnit;
