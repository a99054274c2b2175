//! ランディングページ生成モジュール
//!
//! Handlebars テンプレートに年数ラベルとカタログを埋め込み、1つの HTML を書き出す。
//! `{{ }}` は自動で HTML エスケープされる。

use crate::config::SiteConfig;
use crate::error::{Result, WineSiteError};
use crate::loader;
use chrono::Datelike;
use handlebars::Handlebars;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use wine_site_common::{age_label, AgeLabel, Catalogue};

const TEMPLATE_NAME: &str = "landing";

/// テンプレートに渡す値
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    /// 「104 года」などの年数ラベル
    pub age_years: String,
    /// カテゴリ → ワイン一覧
    pub wine_cards: &'a Catalogue,
}

impl<'a> PageContext<'a> {
    pub fn new(age: &AgeLabel, catalogue: &'a Catalogue) -> Self {
        Self {
            age_years: age.to_string(),
            wine_cards: catalogue,
        }
    }
}

/// テンプレートを読み込んで描画（ファイルには書かない）
///
/// strict モードのため、テンプレート側の変数名が合わなければエラー。
pub fn render_page(template: &Path, context: &PageContext<'_>) -> Result<String> {
    if !template.exists() {
        return Err(WineSiteError::FileNotFound(template.display().to_string()));
    }

    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_template_file(TEMPLATE_NAME, template)?;

    Ok(registry.render(TEMPLATE_NAME, context)?)
}

/// 描画済み HTML を書き出す（既存ファイルは上書き）
pub fn write_page(output: &Path, html: &str) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(html.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// カタログ読み込みから書き出しまで（年は現在の年）
pub fn generate(config: &SiteConfig) -> Result<PathBuf> {
    let current_year = chrono::Local::now().year();
    generate_for_year(config, current_year)
}

/// カタログ読み込みから書き出しまで
///
/// 描画が完了してから出力ファイルを開くので、途中で失敗しても出力は作られない。
pub fn generate_for_year(config: &SiteConfig, current_year: i32) -> Result<PathBuf> {
    let catalogue = loader::load_catalogue(config)?;
    let age = age_label(current_year, config.founding_year, &config.plural_forms);
    tracing::debug!("年数ラベル: {}", age);

    let html = render_page(&config.template, &PageContext::new(&age, &catalogue))?;
    write_page(&config.output, &html)?;

    tracing::info!("ページ出力: {} ({} bytes)", config.output.display(), html.len());
    Ok(config.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wine_site_common::{fields, PluralForms, WineEntry};

    fn catalogue() -> Catalogue {
        let entries = vec![
            WineEntry::new()
                .with(fields::NAME, "Кот & Пёс")
                .with(fields::CATEGORY, "Белые вина"),
            WineEntry::new()
                .with(fields::NAME, "Хванчкара")
                .with(fields::CATEGORY, "Красные вина"),
        ];
        Catalogue::group_by(entries, fields::CATEGORY).unwrap()
    }

    #[test]
    fn test_context_serialization() {
        let catalogue = catalogue();
        let age = AgeLabel::new(104, &PluralForms::default());
        let json = serde_json::to_value(PageContext::new(&age, &catalogue)).unwrap();

        assert_eq!(json["age_years"], "104 года");
        assert_eq!(json["wine_cards"]["Красные вина"][0]["name"], "Хванчкара");
    }

    #[test]
    fn test_render_escapes_values() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.html");
        std::fs::write(
            &template,
            "{{age_years}}|{{#each wine_cards}}[{{@key}}:{{#each this}}{{name}};{{/each}}]{{/each}}",
        )
        .unwrap();

        let catalogue = catalogue();
        let age = AgeLabel::new(101, &PluralForms::default());
        let html = render_page(&template, &PageContext::new(&age, &catalogue)).unwrap();

        assert_eq!(html, "101 год|[Белые вина:Кот &amp; Пёс;][Красные вина:Хванчкара;]");
    }

    #[test]
    fn test_unknown_placeholder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.html");
        std::fs::write(&template, "{{age_years_ru}}").unwrap();

        let catalogue = catalogue();
        let age = AgeLabel::new(104, &PluralForms::default());
        let result = render_page(&template, &PageContext::new(&age, &catalogue));
        assert!(matches!(result, Err(WineSiteError::Render(_))));
    }

    #[test]
    fn test_missing_template() {
        let catalogue = catalogue();
        let age = AgeLabel::new(104, &PluralForms::default());
        let result = render_page(Path::new("/nonexistent/template.html"), &PageContext::new(&age, &catalogue));
        assert!(matches!(result, Err(WineSiteError::FileNotFound(_))));
    }

    #[test]
    fn test_write_page_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("index.html");
        std::fs::write(&output, "old content that is longer").unwrap();

        write_page(&output, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "new");
    }
}
