use crate::error::{Result, WineSiteError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use wine_site_common::{ColumnMapping, PluralForms};

/// カレントディレクトリの設定ファイル名
pub const LOCAL_CONFIG_FILE: &str = "wine-site.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// ワインカタログのスプレッドシート
    pub spreadsheet: PathBuf,
    /// シート名（省略時は先頭シート）
    pub sheet: Option<String>,
    /// 列名マッピング
    pub columns: ColumnMapping,
    /// カテゴリ列（省略時はマッピングから決まる）
    pub category_column: Option<String>,
    /// HTMLテンプレート
    pub template: PathBuf,
    /// 出力HTML
    pub output: PathBuf,
    /// 創業年
    pub founding_year: i32,
    /// 年数の単位語
    pub plural_forms: PluralForms,
    pub bind: IpAddr,
    pub port: u16,
    /// 配信するディレクトリ
    pub serve_root: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            spreadsheet: PathBuf::from("wine3.xlsx"),
            sheet: None,
            columns: ColumnMapping::Russian,
            category_column: None,
            template: PathBuf::from("template.html"),
            output: PathBuf::from("index.html"),
            founding_year: 1920,
            plural_forms: PluralForms::default(),
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            serve_root: PathBuf::from("."),
        }
    }
}

impl SiteConfig {
    /// 設定を読み込む
    ///
    /// 明示パス → ./wine-site.json → ~/.config/wine-site/config.json の順。
    /// どれもなければデフォルト。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(WineSiteError::FileNotFound(path.display().to_string()));
            }
            return Self::from_file(path);
        }

        for candidate in Self::search_paths() {
            if candidate.exists() {
                tracing::debug!("設定ファイル: {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(user) = Self::user_config_path() {
            paths.push(user);
        }
        paths
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("wine-site").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        self.columns.validate()?;

        if self.category_column.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(WineSiteError::Config("category_column が空です".into()));
        }

        Ok(())
    }

    /// グループ化に使う列名
    pub fn category_column(&self) -> &str {
        self.category_column
            .as_deref()
            .unwrap_or_else(|| self.columns.default_category_column())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
