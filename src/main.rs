use std::sync::Arc;

use vellum::config::Config;
use vellum::render::JinjaResolver;
use vellum::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let resolver = Arc::new(JinjaResolver::new(&cfg.template_root));

    tokio::select! {
        res = server::listener::run(&cfg, resolver) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
