//! TeeMates Site Service
//!
//! Serves the built landing-page assets and the contact/support
//! endpoint against the configured Supabase project.

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teemates_core::SupabaseBackend;
use teemates_site::{routes, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teemates_site=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        port = config.port,
        supabase_url = %config.supabase_url,
        static_dir = %config.static_dir,
        "Loaded configuration"
    );

    // Create the backend client
    let backend = SupabaseBackend::new(&config.supabase_url, &config.supabase_service_key)?;

    // Create app state
    let state = Arc::new(AppState::new(backend));

    // Create router
    let app = routes::create_router_with_static_path(state, &config.static_dir);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Site listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
