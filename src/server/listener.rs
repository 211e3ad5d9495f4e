use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::render::TemplateResolver;

/// Accepts connections and spawns one handler task per connection.
///
/// No bound is placed on the number of concurrent connections. Handlers
/// share nothing but the read-only resolver.
pub async fn run<R>(cfg: &Config, resolver: Arc<R>) -> anyhow::Result<()>
where
    R: TemplateResolver + 'static,
{
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    let read_buffer_size = cfg.read_buffer_size;

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let resolver = resolver.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, resolver, read_buffer_size);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
