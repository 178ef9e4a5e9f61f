use anyhow::{Context, Result};
use rmcp::ServiceExt;
use std::sync::Arc;
use tracing_subscriber::{self, EnvFilter};

use payoff_mcp::config::ServerConfig;
use payoff_mcp::server::{http_app, PayoffServer};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the process environment still applies
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Arc::new(ServerConfig::from_env()?);

    if let Some(addr) = config.listen_addr() {
        // HTTP mode, used when deployed behind a platform that sets PORT
        let app = http_app(config.clone());

        tracing::info!("Starting payoff-mcp HTTP server on {addr}");

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await?;
    } else {
        // stdio mode, used by local MCP clients
        tracing::info!("Starting payoff-mcp MCP server (stdio)");

        let server = PayoffServer::new(config);
        let service = server.serve(rmcp::transport::stdio()).await?;
        service.waiting().await?;
    }

    Ok(())
}
