use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use redis::Client;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::Mutex;
use userhub_adapters::{
    AppState, JwtIssuer, PostgresUserRepository, RedisBannedTokenStore, RedisEventPublisher,
    Settings,
};
use userhub_service::{UserService, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    telemetry::init_tracing()?;

    let settings = Settings::load()?;

    // Setup database connection pool and schema
    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(settings.database.url.expose_secret())
        .await?;
    sqlx::migrate!().run(&pg_pool).await?;

    // Redis carries both the banned-token keyspace and the event channels
    let redis_client = Client::open(format!("redis://{}/", settings.redis.host_name))?;
    let banned_token_conn = Arc::new(Mutex::new(redis_client.get_connection()?));
    let event_conn = Arc::new(Mutex::new(redis_client.get_connection()?));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let event_publisher = Arc::new(RedisEventPublisher::new(
        event_conn,
        settings.events.channel_prefix.clone(),
    ));
    let banned_token_store = Arc::new(RedisBannedTokenStore::new(
        banned_token_conn,
        settings.jwt.ttl_seconds,
    ));
    let jwt = JwtIssuer::new(
        &settings.jwt.secret,
        settings.jwt.issuer.clone(),
        Duration::from_secs(settings.jwt.ttl_seconds),
    );

    let state = AppState::new(user_repository, event_publisher, banned_token_store, jwt);

    let address = format!("{}:{}", settings.app.host, settings.app.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Starting user service on {address}");

    UserService::new(state)
        .run(listener, &settings.app.allowed_origins)
        .await?;

    Ok(())
}
