use crate::config::SiteConfig;
use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;
use wine_site_common::ColumnMapping;

#[derive(Parser)]
#[command(name = "wine-site")]
#[command(about = "ワインカタログのランディングページ生成・配信ツール", long_about = None)]
pub struct Cli {
    /// サブコマンド（省略時は run）
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 設定ファイル（JSON）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ページを生成してから配信
    Run {
        #[command(flatten)]
        render: RenderArgs,

        #[command(flatten)]
        serve: ServeArgs,
    },

    /// ページを生成のみ
    Render {
        #[command(flatten)]
        render: RenderArgs,
    },

    /// 配信のみ
    Serve {
        #[command(flatten)]
        serve: ServeArgs,
    },

    /// 設定を表示/初期化
    Config {
        /// 有効な設定を表示
        #[arg(long)]
        show: bool,

        /// デフォルト設定を ./wine-site.json に書き出す
        #[arg(long)]
        init: bool,
    },

    /// デモ用のスプレッドシートを生成
    Sample {
        /// 出力先
        #[arg(short, long, default_value = "wine3.xlsx")]
        output: PathBuf,
    },
}

/// ページ生成の上書きオプション
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// スプレッドシート
    #[arg(short, long)]
    pub spreadsheet: Option<PathBuf>,

    /// シート名
    #[arg(long)]
    pub sheet: Option<String>,

    /// HTMLテンプレート
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// 出力HTML
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 創業年
    #[arg(long)]
    pub founding_year: Option<i32>,

    /// ヘッダーを付け替えずにそのまま使う
    #[arg(long)]
    pub native_headers: bool,

    /// カテゴリ列
    #[arg(long)]
    pub category_column: Option<String>,
}

impl RenderArgs {
    pub fn apply(&self, config: &mut SiteConfig) {
        if let Some(path) = &self.spreadsheet {
            config.spreadsheet = path.clone();
        }
        if let Some(sheet) = &self.sheet {
            config.sheet = Some(sheet.clone());
        }
        if let Some(path) = &self.template {
            config.template = path.clone();
        }
        if let Some(path) = &self.output {
            config.output = path.clone();
        }
        if let Some(year) = self.founding_year {
            config.founding_year = year;
        }
        if self.native_headers {
            config.columns = ColumnMapping::Identity;
        }
        if let Some(column) = &self.category_column {
            config.category_column = Some(column.clone());
        }
    }
}

/// 配信の上書きオプション
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// ポート番号
    #[arg(short, long)]
    pub port: Option<u16>,

    /// バインドするアドレス
    #[arg(long)]
    pub bind: Option<IpAddr>,

    /// 配信するディレクトリ
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl ServeArgs {
    pub fn apply(&self, config: &mut SiteConfig) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(root) = &self.root {
            config.serve_root = root.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["wine-site"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_render_overrides() {
        let cli = Cli::try_parse_from([
            "wine-site",
            "render",
            "--spreadsheet",
            "wine2.xlsx",
            "--founding-year",
            "1935",
            "--native-headers",
        ])
        .unwrap();

        let mut config = SiteConfig::default();
        match cli.command {
            Some(Commands::Render { render }) => render.apply(&mut config),
            _ => panic!("render が解析されていない"),
        }

        assert_eq!(config.spreadsheet, PathBuf::from("wine2.xlsx"));
        assert_eq!(config.founding_year, 1935);
        assert_eq!(config.columns, ColumnMapping::Identity);
        assert_eq!(config.output, PathBuf::from("index.html"));
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from(["wine-site", "serve", "--port", "9000", "--bind", "127.0.0.1"]).unwrap();

        let mut config = SiteConfig::default();
        match cli.command {
            Some(Commands::Serve { serve }) => serve.apply(&mut config),
            _ => panic!("serve が解析されていない"),
        }

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
    }
}
