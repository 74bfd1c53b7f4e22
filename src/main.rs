use clap::Parser;
use edam_quickstart::config::toml_config::TomlConfig;
use edam_quickstart::utils::logger;
use edam_quickstart::{
    AppConfig, CliConfig, HttpNoteStoreConnector, QuickstartError, QuickstartSession,
    UserStoreClient,
};

fn exit_with(error: &QuickstartError) -> ! {
    tracing::error!(
        "❌ Quickstart failed: {} (Category: {:?})",
        error,
        error.category()
    );
    tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());

    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(error.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting edam-quickstart");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入配置；缺少 token 時在任何網路請求前結束
    let file = match TomlConfig::from_optional_file(&cli.config) {
        Ok(file) => file,
        Err(e) => exit_with(&e),
    };
    let config = match AppConfig::resolve(cli.overrides(), file) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let user_store = match UserStoreClient::connect(&config.user_store_url) {
        Ok(client) => client,
        Err(e) => exit_with(&e),
    };
    let session = QuickstartSession::new(&config, user_store, HttpNoteStoreConnector);

    let mut stdout = std::io::stdout();
    match session.run(&mut stdout).await {
        Ok(report) => {
            tracing::info!(
                "✅ Quickstart completed with {} notebooks listed",
                report.notebooks.len()
            );
        }
        Err(e) => exit_with(&e),
    }
}
