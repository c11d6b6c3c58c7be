pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    error::ValidationError,
    events::UserCreatedEvent,
    password::{self, PasswordHashError},
    user::User,
    user_id::UserId,
    user_name::UserName,
};

pub use ports::{
    repositories::{BannedTokenStore, BannedTokenStoreError, UserRepository, UserRepositoryError},
    services::{EventPublisher, EventPublisherError, PaymentGateway, PaymentGatewayError},
};
