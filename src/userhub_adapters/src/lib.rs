pub mod auth;
pub mod config;
pub mod http;
pub mod messaging;
pub mod payment;
pub mod persistence;

pub use auth::jwt::{Claims, JwtIssuer, TOKEN_TYPE, TokenError};
pub use config::Settings;
pub use http::state::AppState;
pub use messaging::{noop_event_publisher::NoopEventPublisher, redis_event_publisher::RedisEventPublisher};
pub use payment::http_payment_gateway::HttpPaymentGateway;
pub use persistence::{
    hashset_banned_token_store::HashSetBannedTokenStore,
    in_memory_user_repository::InMemoryUserRepository,
    postgres_user_repository::PostgresUserRepository,
    redis_banned_token_store::RedisBannedTokenStore,
};
