use aoc_fetch::utils::{logger, validation::Validate};
use aoc_fetch::{
    repo_root, AocClient, AppConfig, Cli, Command, DownloadArgs, InputFetcher, LocalStorage,
    Session,
};
use clap::Parser;
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() {
    // 日數在 clap 解析時就已驗證，0 或 26 不會走到下面
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    let result = match &cli.command {
        Command::Download(args) => download(args, cli.config.as_deref()).await,
    };

    match result {
        Ok(path) => {
            println!("Downloaded input to: {}", path.display());
        }
        Err(e) => {
            tracing::error!(
                "❌ Download failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn download(args: &DownloadArgs, config_path: Option<&Path>) -> aoc_fetch::Result<PathBuf> {
    let session = Session::from_env()?;

    let root = repo_root()?;
    let config = AppConfig::load(config_path, &root)?.with_year(args.year);
    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);

    let client = AocClient::new(&config, session)?;
    let storage = LocalStorage::new(config.data_root(&root));
    let fetcher = InputFetcher::new(client, storage);

    let path = fetcher.get_input(args.day).await?;
    Ok(std::fs::canonicalize(&path)?)
}
