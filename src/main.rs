//! EcoChef Telegram Bot
//!
//! Main application entry point: loads configuration, wires the gateway and
//! dispatcher, and serves the webhook.

use std::sync::Arc;

use tracing::{info, warn};

use ecochef::{
    config::Settings,
    gateway::TelegramGateway,
    menu::ThreadRngSource,
    server::{self, AppState},
    utils::logging,
    UpdateDispatcher,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the server
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", ecochef::info());

    let dispatcher = if settings.bot.token.is_empty() {
        warn!("Bot token is not configured; webhook will answer with a diagnostic");
        None
    } else {
        let gateway = Arc::new(TelegramGateway::with_api_base(
            &settings.bot.api_base,
            &settings.bot.token,
        ));
        Some(Arc::new(UpdateDispatcher::new(
            gateway,
            Arc::new(ThreadRngSource),
        )))
    };

    let app = server::webhook_app(AppState { dispatcher });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Webhook server listening");

    axum::serve(listener, app).await?;

    info!("EcoChef bot has been shut down.");
    Ok(())
}
