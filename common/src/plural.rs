//! 年数ラベル（「104 года」など）
//!
//! 単位語は年数の末尾の数字だけで決める:
//! 1 → one / 2〜4 → few / それ以外 → many。
//! 11〜14 の例外は扱わない（現在の年数は100超なので当面問題にならない）。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 単位語の形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearForm {
    One,
    Few,
    Many,
}

impl YearForm {
    pub fn for_age(age: i64) -> Self {
        match age.unsigned_abs() % 10 {
            1 => YearForm::One,
            2..=4 => YearForm::Few,
            _ => YearForm::Many,
        }
    }
}

/// 単位語の3つの形
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralForms {
    pub one: String,
    pub few: String,
    pub many: String,
}

impl Default for PluralForms {
    fn default() -> Self {
        Self {
            one: "год".into(),
            few: "года".into(),
            many: "лет".into(),
        }
    }
}

impl PluralForms {
    pub fn word(&self, form: YearForm) -> &str {
        match form {
            YearForm::One => &self.one,
            YearForm::Few => &self.few,
            YearForm::Many => &self.many,
        }
    }
}

/// 年数と単位語の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeLabel {
    pub age: i64,
    pub unit: String,
}

impl AgeLabel {
    pub fn new(age: i64, forms: &PluralForms) -> Self {
        Self {
            age,
            unit: forms.word(YearForm::for_age(age)).to_string(),
        }
    }
}

impl fmt::Display for AgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.age, self.unit)
    }
}

/// 創業年から見た年数ラベル
pub fn age_label(current_year: i32, founding_year: i32, forms: &PluralForms) -> AgeLabel {
    AgeLabel::new(i64::from(current_year) - i64::from(founding_year), forms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(age: i64) -> String {
        AgeLabel::new(age, &PluralForms::default()).to_string()
    }

    #[test]
    fn test_last_digit_one() {
        assert_eq!(label(101), "101 год");
        assert_eq!(label(1), "1 год");
    }

    #[test]
    fn test_last_digit_few() {
        assert_eq!(label(102), "102 года");
        assert_eq!(label(103), "103 года");
        assert_eq!(label(104), "104 года");
    }

    #[test]
    fn test_last_digit_many() {
        assert_eq!(label(100), "100 лет");
        assert_eq!(label(105), "105 лет");
        assert_eq!(label(110), "110 лет");
        assert_eq!(label(0), "0 лет");
    }

    #[test]
    fn test_teens_not_special_cased() {
        // 末尾の数字だけで判定する
        assert_eq!(label(11), "11 год");
        assert_eq!(label(12), "12 года");
    }

    #[test]
    fn test_negative_age_uses_last_digit() {
        assert_eq!(YearForm::for_age(-1), YearForm::One);
        assert_eq!(YearForm::for_age(-3), YearForm::Few);
    }

    #[test]
    fn test_age_label_from_years() {
        let label = age_label(2024, 1920, &PluralForms::default());
        assert_eq!(label.age, 104);
        assert_eq!(label.to_string(), "104 года");
    }

    #[test]
    fn test_custom_forms() {
        let forms = PluralForms {
            one: "year".into(),
            few: "years".into(),
            many: "years".into(),
        };
        assert_eq!(age_label(2021, 2020, &forms).to_string(), "1 year");
    }
}
