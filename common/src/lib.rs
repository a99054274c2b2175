//! Wine Site Common Library
//!
//! カタログ読み込み・ページ生成で共有される型と純粋ロジック

pub mod types;
pub mod columns;
pub mod catalogue;
pub mod plural;
pub mod error;

pub use types::{fields, CellValue, WineEntry};
pub use columns::ColumnMapping;
pub use catalogue::Catalogue;
pub use plural::{age_label, AgeLabel, PluralForms, YearForm};
pub use error::{Error, Result};
