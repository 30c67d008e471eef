pub mod routes;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::path::Path;
    use tokio::net::TcpListener;

    shared::logging::init_tracing(&Path::new("target").join("logs"))?;

    let config = shared::config::load_config()?;
    let static_dir = shared::config::get_static_dir(&config);

    if static_dir.join("index.html").exists() {
        tracing::info!("Serving frontend from {}", static_dir.display());
    } else {
        tracing::warn!(
            "index.html not found in {}; run `trunk build` first",
            static_dir.display()
        );
    }

    let app = routes::configure_routes(&static_dir);
    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
