//! AskRelay Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use tracing::{info, warn, error, debug};

use AskRelay::{
    config::Settings,
    utils::logging,
    database::{DatabaseService, connection::{create_pool, run_migrations, DatabaseConfig}},
    services::ServiceFactory,
    handlers::MessageRouter,
    models::IncomingMessage,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", AskRelay::info());

    // Initialize database connection
    info!("Opening question store...");
    let db_pool = create_pool(&DatabaseConfig::from(&settings.database)).await?;

    info!("Running database migrations...");
    run_migrations(&db_pool).await?;

    let database_service = DatabaseService::new(db_pool);
    database_service.health_check().await?;

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    let me = bot.get_me().await.map_err(|e| {
        error!(error = %e, "Failed to reach the Telegram API");
        e
    })?;
    info!(username = ?me.username, "Authorized on Telegram");

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(bot.clone(), &settings, database_service.question_store())?;
    let router = MessageRouter::new(&services)?;

    if let Err(e) = bot.set_my_commands(router.dispatcher().bot_commands()).await {
        warn!(error = %e, "Failed to publish the command menu");
    }

    let router_arc = Arc::new(router);

    // Updates are handled one at a time, in arrival order
    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![router_arc])
        .distribution_function(|_| Some(()))
        .default_handler(|upd| async move {
            debug!("Unhandled update: {:?}", upd.kind);
        })
        .enable_ctrlc_handler()
        .build();

    info!("AskRelay bot is ready, starting polling...");

    dispatcher.dispatch().await;

    info!("AskRelay bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry().branch(Update::filter_message().endpoint(handle_messages))
}

/// Hand every message to the router. Errors are reported inside the router,
/// so nothing propagates back to the dispatcher.
async fn handle_messages(msg: Message, router: Arc<MessageRouter>) -> HandlerResult {
    match IncomingMessage::from_telegram(&msg) {
        Some(incoming) => {
            router.route(&incoming).await;
        }
        None => {
            debug!(chat_id = msg.chat.id.0, "Ignoring message without a sender");
        }
    }

    Ok(())
}
