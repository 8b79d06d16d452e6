mod config;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match config::SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "darkmode demo listening");
    axum::serve(listener, app).await.expect("server failed");
}
