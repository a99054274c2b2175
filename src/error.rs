use thiserror::Error;

#[derive(Error, Debug)]
pub enum WineSiteError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("スプレッドシート読み込みエラー: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("シートにヘッダー行がありません: {0}")]
    EmptySheet(String),

    #[error("テンプレート読み込みエラー: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("テンプレート描画エラー: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("サンプル生成エラー: {0}")]
    SampleWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Common(#[from] wine_site_common::Error),

    #[error("サーバエラー: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, WineSiteError>;
