//! # Userhub - User Management Service Library
//!
//! This is a facade crate that re-exports all public APIs from the user
//! service components. Use this crate to get access to the whole stack in
//! one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! userhub = { path = "../userhub" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `UserName`, `UserId`, `User`, etc.
//! - **Ports**: `UserRepository`, `EventPublisher`, `BannedTokenStore`, `PaymentGateway`
//! - **Use cases**: `CreateUserUseCase`, `LoginUserUseCase`, etc.
//! - **Adapters**: `PostgresUserRepository`, `RedisEventPublisher`, `JwtIssuer`, etc.
//! - **Service**: `UserService` - The main entry point for the HTTP service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use userhub_core::*;
}

// Re-export most commonly used core types at the root level
pub use userhub_core::{
    Email, PasswordHashError, User, UserCreatedEvent, UserId, UserName, ValidationError, password,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use userhub_core::ports::*;
}

// Re-export ports at root level
pub use userhub_core::{
    BannedTokenStore, BannedTokenStoreError, EventPublisher, EventPublisherError, PaymentGateway,
    PaymentGatewayError, UserRepository, UserRepositoryError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use userhub_application::*;
}

// Re-export use cases at root level
pub use userhub_application::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, LoginUserUseCase,
    LogoutUseCase, UpdateUserUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers, extractors and response envelope
    pub mod http {
        pub use userhub_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use userhub_adapters::persistence::*;
    }

    /// Event publisher implementations
    pub mod messaging {
        pub use userhub_adapters::messaging::*;
    }

    /// Payment gateway client
    pub mod payment {
        pub use userhub_adapters::payment::*;
    }

    /// JWT issuing and verification
    pub mod auth {
        pub use userhub_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use userhub_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use userhub_adapters::{
    AppState, HttpPaymentGateway, JwtIssuer, NoopEventPublisher, Settings,
    persistence::{
        hashset_banned_token_store::HashSetBannedTokenStore,
        in_memory_user_repository::InMemoryUserRepository,
        postgres_user_repository::PostgresUserRepository,
        redis_banned_token_store::RedisBannedTokenStore,
    },
};

pub use userhub_adapters::messaging::redis_event_publisher::RedisEventPublisher;

// ============================================================================
// User Service (Main Entry Point)
// ============================================================================

/// Main HTTP service
pub use userhub_service::UserService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
