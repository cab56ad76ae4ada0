mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "happyshare={level},server={level},engine={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    let engine = engine::Engine::builder()
        .strict_custom_splits(settings.ledger.strict_custom_splits)
        .build();
    if settings.ledger.strict_custom_splits {
        tracing::info!("custom splits must add up to the expense amount");
    }

    let listener = tokio::net::TcpListener::bind(settings.address()).await?;
    server::run_with_listener(engine, listener).await?;

    Ok(())
}
