//! カタログの型定義
//!
//! - CellValue: スプレッドシートの1セル
//! - WineEntry: スプレッドシートの1行（ワイン1本分）

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// 正規化後のフィールド名
pub mod fields {
    pub const NAME: &str = "name";
    pub const GRAPE_VARIETY: &str = "grape_variety";
    pub const COST: &str = "cost";
    pub const CATEGORY: &str = "category";
    pub const IMAGE: &str = "image";
    pub const SPECIAL_OFFER: &str = "special_offer";
}

/// セルの値
///
/// 空セルは常に空文字列として扱う（null や NaN にはしない）。
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// 数値セルから生成（整数値の浮動小数は Int に寄せる）
    ///
    /// xlsx は数値をすべて浮動小数で保存するため、`350` が `350.0` と
    /// 表示されないようにする。
    pub fn from_number(value: f64) -> Self {
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            CellValue::Int(value as i64)
        } else {
            CellValue::Float(value)
        }
    }

    /// テンプレートの条件分岐と同じ真偽判定
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Int(n) => *n != 0,
            // NaN/inf は空文字列として出力されるので偽
            CellValue::Float(f) => f.is_finite() && *f != 0.0,
            CellValue::Bool(b) => *b,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(f) => Some(*f),
            CellValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_str(""),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Int(n) => serializer.serialize_i64(*n),
            // NaN/inf は JSON で null になるため文字列で出す
            CellValue::Float(v) if !v.is_finite() => serializer.serialize_str(""),
            CellValue::Float(v) => serializer.serialize_f64(*v),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// ワイン1本分のレコード
///
/// 列名 → 値。列の並びはスプレッドシートのヘッダー順を保つ。
/// テンプレートからは列名でアクセスできるよう、フラットなマップとして
/// シリアライズする。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WineEntry {
    cells: Vec<(String, CellValue)>,
}

impl WineEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// ヘッダーと1行分のセルから生成（足りないセルは空）
    pub fn from_row<H, C>(headers: &[H], cells: C) -> Self
    where
        H: AsRef<str>,
        C: IntoIterator<Item = CellValue>,
    {
        let mut cells = cells.into_iter();
        let cells = headers
            .iter()
            .map(|h| (h.as_ref().to_string(), cells.next().unwrap_or_default()))
            .collect();
        Self { cells }
    }

    /// 列を追加（同名の列があれば上書き）
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(c, _)| *c == column) {
            Some((_, v)) => *v = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.set(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }

    /// 列の値を文字列で取得（列がなければ空文字列）
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(|v| v.to_string()).unwrap_or_default()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    pub fn name(&self) -> String {
        self.text(fields::NAME)
    }

    pub fn grape_variety(&self) -> String {
        self.text(fields::GRAPE_VARIETY)
    }

    pub fn cost(&self) -> Option<f64> {
        self.get(fields::COST).and_then(CellValue::as_f64)
    }

    pub fn category(&self) -> String {
        self.text(fields::CATEGORY)
    }

    pub fn image(&self) -> String {
        self.text(fields::IMAGE)
    }

    pub fn is_special_offer(&self) -> bool {
        self.get(fields::SPECIAL_OFFER)
            .map(CellValue::is_truthy)
            .unwrap_or(false)
    }
}

impl Serialize for WineEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
