use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use regbot::cli::{Cli, Commands};
use regbot::core::{init_logger, install_panic_hook, log_configuration, Config};
use regbot::registration::RegistrationFlow;
use regbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps, TelegramGateway};

/// Main entry point for the registration bot
///
/// Parses CLI arguments, loads and validates configuration, then dispatches
/// to the requested subcommand.
///
/// # Errors
/// Returns an error if configuration is missing or malformed, or if the bot
/// cannot reach the Bot API at startup.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    let config = Config::from_env()?;

    init_logger(config.log_level, config.log_file_path.as_deref())?;
    install_panic_hook();

    match cli.command {
        Some(Commands::CheckConfig) => {
            log_configuration(&config);
            log::info!("✅ Configuration is valid");
            Ok(())
        }
        Some(Commands::Run) | None => run_bot(config).await,
    }
}

/// Starts long polling and runs until Ctrl+C
async fn run_bot(config: Config) -> Result<()> {
    let bot_init_start = std::time::Instant::now();
    log::info!("Starting bot...");
    log_configuration(&config);

    let bot = create_bot(&config)?;

    let me = bot
        .get_me()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to Bot API: {}", e))?;
    log::info!("Bot username: {:?}, Bot ID: {}", me.username, me.id);

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let flow = Arc::new(RegistrationFlow::from_config(&config));
    let gateway = Arc::new(TelegramGateway::new(bot.clone()));
    let handler = schema(HandlerDeps::new(flow, gateway));

    log::info!("================================================");
    log::info!(
        "🎉 Bot initialization complete in {:.2}s",
        bot_init_start.elapsed().as_secs_f64()
    );
    log::info!("📡 Ready to receive updates!");
    log::info!("================================================");

    let listener = Polling::builder(bot.clone()).build();

    Dispatcher::builder(bot, handler)
        // Group chatter and the destination group's own traffic are skipped on purpose
        .default_handler(|upd| async move {
            log::trace!("Ignored update {}", upd.id.0);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("An error from a registration handler"))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
