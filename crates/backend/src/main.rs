pub mod handlers;
pub mod routes;
pub mod shared;
pub mod usecases;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    let log_dir = std::path::Path::new("target").join("logs");
    shared::logger::init_tracing(&log_dir)?;

    let config = shared::config::init_config(shared::config::load_config()?)?;
    let addr = config.server.socket_addr()?;

    let app = routes::configure_routes(&config.server.static_dir);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
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
