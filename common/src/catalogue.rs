//! カテゴリ別カタログ
//!
//! 行をカテゴリ列の値でグループ化する。カテゴリは文字列の昇順、
//! カテゴリ内の並びは元の行順のまま。

use crate::error::{Error, Result};
use crate::types::WineEntry;
use serde::Serialize;
use std::collections::BTreeMap;

/// カテゴリ → ワイン一覧
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalogue {
    groups: BTreeMap<String, Vec<WineEntry>>,
}

impl Catalogue {
    /// 行をカテゴリ列でグループ化
    ///
    /// カテゴリ列を持たない行があればエラー。
    pub fn group_by<I>(entries: I, category_column: &str) -> Result<Self>
    where
        I: IntoIterator<Item = WineEntry>,
    {
        let mut groups: BTreeMap<String, Vec<WineEntry>> = BTreeMap::new();
        for entry in entries {
            let category = entry
                .get(category_column)
                .ok_or_else(|| Error::MissingColumn(category_column.to_string()))?
                .to_string();
            groups.entry(category).or_default().push(entry);
        }
        Ok(Self { groups })
    }

    /// カテゴリ名一覧（昇順）
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(|k| k.as_str())
    }

    pub fn get(&self, category: &str) -> Option<&[WineEntry]> {
        self.groups.get(category).map(|v| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[WineEntry])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// 全カテゴリの合計件数
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.groups.len()
    }
}
