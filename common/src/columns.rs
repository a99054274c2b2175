//! 列名マッピング
//!
//! スプレッドシートのヘッダー（ロシア語の表示名など）を正規化フィールド名へ
//! 付け替える。`Identity` はヘッダーをそのまま使う。

use crate::error::{Error, Result};
use crate::types::fields;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// ロシア語ヘッダー → 正規化フィールド名
pub const RUSSIAN_HEADERS: &[(&str, &str)] = &[
    ("Название", fields::NAME),
    ("Сорт", fields::GRAPE_VARIETY),
    ("Цена", fields::COST),
    ("Категория", fields::CATEGORY),
    ("Картинка", fields::IMAGE),
    ("Акция", fields::SPECIAL_OFFER),
];

/// Identity 時のカテゴリ列（元ヘッダー）
pub const NATIVE_CATEGORY_COLUMN: &str = "Категория";

/// 列名マッピング
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnMapping {
    /// ヘッダーをそのまま使う
    Identity,
    /// ロシア語ヘッダーを正規化名へ
    #[default]
    Russian,
    /// 任意の付け替え表（元ヘッダー → 新しい列名）
    Renamed(BTreeMap<String, String>),
}

impl ColumnMapping {
    /// ヘッダー名の付け替え先（対象外なら None）
    pub fn rename(&self, header: &str) -> Option<String> {
        match self {
            ColumnMapping::Identity => None,
            ColumnMapping::Russian => RUSSIAN_HEADERS
                .iter()
                .find(|(from, _)| *from == header)
                .map(|(_, to)| to.to_string()),
            ColumnMapping::Renamed(table) => table.get(header).cloned(),
        }
    }

    /// ヘッダー列を付け替え後の名前に変換
    pub fn apply(&self, headers: &[String]) -> Vec<String> {
        headers
            .iter()
            .map(|h| self.rename(h).unwrap_or_else(|| h.clone()))
            .collect()
    }

    /// 付け替え後のヘッダー列（重複は `X.1`, `X.2` と連番を付ける）
    pub fn apply_unique(&self, headers: &[String]) -> Vec<String> {
        dedupe_headers(self.apply(headers))
    }

    /// マッピング後にカテゴリとして使う列名
    pub fn default_category_column(&self) -> &str {
        match self {
            ColumnMapping::Identity => NATIVE_CATEGORY_COLUMN,
            _ => fields::CATEGORY,
        }
    }

    /// 付け替え先の重複チェック
    pub fn validate(&self) -> Result<()> {
        if let ColumnMapping::Renamed(table) = self {
            let mut seen = HashSet::new();
            for target in table.values() {
                if target.trim().is_empty() {
                    return Err(Error::Config("空の列名へのマッピングがあります".into()));
                }
                if !seen.insert(target.as_str()) {
                    return Err(Error::Config(format!("列名 '{}' へのマッピングが重複しています", target)));
                }
            }
        }
        Ok(())
    }
}

/// 重複したヘッダーに連番を付ける（最初の列は元の名前のまま）
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut unique = Vec::with_capacity(headers.len());

    for header in headers {
        if seen.insert(header.clone()) {
            unique.push(header);
            continue;
        }

        let counter = counters.entry(header.clone()).or_insert(0);
        let renamed = loop {
            *counter += 1;
            let candidate = format!("{}.{}", header, counter);
            if !seen.contains(&candidate) {
                break candidate;
            }
        };
        seen.insert(renamed.clone());
        unique.push(renamed);
    }

    unique
}
