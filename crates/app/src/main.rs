mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "fairsplit={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = engine::Engine::builder()
        .payment_link(settings.payment_link.into())
        .seed_demo(settings.server.demo)
        .build()?;
    if settings.server.demo {
        tracing::info!("Demo mode enabled");
    }

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    server::run_with_listener(engine, settings.server.demo, listener).await?;
    Ok(())
}
