use clap::Parser;
use wine_site::{cli, config, error, render, sample, server};
use cli::{Cli, Commands};
use config::SiteConfig;
use error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "wine_site=debug,tower_http=debug,warn"
    } else {
        "wine_site=info,tower_http=info,warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = SiteConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Run {
        render: Default::default(),
        serve: Default::default(),
    }) {
        Commands::Run { render, serve } => {
            println!("🍷 wine-site - 生成と配信\n");
            render.apply(&mut config);
            serve.apply(&mut config);

            println!("[1/2] ページを生成中...");
            let output = render::generate(&config)?;
            println!("✔ ページ出力: {}\n", output.display());

            println!("[2/2] 配信中: http://{} (Ctrl+C で終了)", config.socket_addr());
            server::serve(&config).await?;
        }

        Commands::Render { render } => {
            println!("🍷 wine-site - ページ生成\n");
            render.apply(&mut config);

            let output = render::generate(&config)?;
            println!("✔ ページ出力: {}", output.display());
        }

        Commands::Serve { serve } => {
            serve.apply(&mut config);
            println!("🌐 配信中: http://{} (Ctrl+C で終了)", config.socket_addr());
            server::serve(&config).await?;
        }

        Commands::Config { show, init } => {
            if init {
                let path = std::path::Path::new(config::LOCAL_CONFIG_FILE);
                if path.exists() {
                    println!("設定ファイルが既に存在します: {}", path.display());
                } else {
                    SiteConfig::default().save(path)?;
                    println!("✔ 設定ファイルを作成しました: {}", path.display());
                }
            }

            if show || !init {
                println!("設定:");
                println!("  スプレッドシート: {}", config.spreadsheet.display());
                println!("  シート: {}", config.sheet.as_deref().unwrap_or("(先頭)"));
                println!("  列マッピング: {:?}", config.columns);
                println!("  カテゴリ列: {}", config.category_column());
                println!("  テンプレート: {}", config.template.display());
                println!("  出力: {}", config.output.display());
                println!("  創業年: {}", config.founding_year);
                println!("  配信: http://{} ({})", config.socket_addr(), config.serve_root.display());
            }
        }

        Commands::Sample { output } => {
            let count = sample::write_sample(&output)?;
            println!("✔ サンプルを作成しました: {} ({}件)", output.display(), count);
        }
    }

    Ok(())
}
