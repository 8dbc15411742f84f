//! Discovery Service Entry Point

use clap::Parser;
use discovery::cli::{serve::ServeArgs, Cli, Commands};
use discovery::config::{self, AuthConfig, ServerConfig};
use discovery::shutdown::ShutdownController;
use discovery::{logging, server, AppState};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let args = match cli.command {
        Some(Commands::Serve(args)) => args,
        None => ServeArgs::default(),
    };

    // .env は設定・ロギングより先に読み込む
    let env_file = match &args.env_file {
        Some(path) => path.clone(),
        None => match std::env::current_dir() {
            Ok(cwd) => config::default_env_file(&cwd),
            Err(e) => {
                eprintln!("Error: failed to resolve working directory: {}", e);
                std::process::exit(1);
            }
        },
    };
    let env_result = config::load_env_file(&env_file);

    let _log_guard = match logging::init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };

    info!("Discovery Service v{}", env!("CARGO_PKG_VERSION"));
    match env_result {
        Ok(()) => info!(path = %env_file.display(), "Loaded environment file"),
        // 環境変数が直接与えられている場合もあるので続行する
        Err(e) => warn!(path = %env_file.display(), "Failed to load environment file: {}", e),
    }

    let auth = match AuthConfig::from_env() {
        Ok(auth) => auth,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let server_config = args.apply(ServerConfig::from_env());
    let state = AppState::new(auth);

    if let Err(e) = server::run(
        state,
        &server_config.bind_addr(),
        ShutdownController::default(),
    )
    .await
    {
        error!(bind_addr = %server_config.bind_addr(), "Server error: {}", e);
        std::process::exit(1);
    }
}
