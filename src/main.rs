use clap::Parser;
use portfolio_contact::core::relay;
use portfolio_contact::domain::ports::ConfigProvider;
use portfolio_contact::utils::logger;
use portfolio_contact::{CliConfig, ConsoleForm, ConsoleNotifier, ContactSubmission, FormResult};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI flags: config={:?}, dry_run={}", cli.config, cli.dry_run);

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let client = match relay::init(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Relay client initialization failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let flow = ContactSubmission::new(client, ConsoleNotifier::new(), config.recipient_name());
    let form = ConsoleForm::new(flow, !cli.non_interactive);

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    if let Err(e) = form.collect(cli.prefilled_form(), &mut stdin, &mut stdout).await {
        tracing::error!("❌ Contact form incomplete: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be sent");
        println!("Endpoint: {}", client.endpoint());
        println!("{}", serde_json::to_string_pretty(&form.preview())?);
        return Ok(());
    }

    match form.run(&mut stdin, &mut stdout).await? {
        FormResult::Sent => Ok(()),
        FormResult::Failed => std::process::exit(2),
        FormResult::Ignored => {
            tracing::warn!("A submission was already in flight");
            Ok(())
        }
    }
}
