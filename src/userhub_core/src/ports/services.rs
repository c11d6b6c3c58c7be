use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

// EventPublisher port trait and errors
#[derive(Debug, Error)]
pub enum EventPublisherError {
    #[error("Failed to publish event: {0}")]
    Publish(String),
}

/// Fire-and-forget domain event emission. No delivery confirmation is
/// surfaced to the core and no retries are performed.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event_type: &str, payload: Value) -> Result<(), EventPublisherError>;
}

// PaymentGateway port trait and errors
#[derive(Debug, Error)]
pub enum PaymentGatewayError {
    #[error("Payment request failed with status {status}: {body}")]
    Request { status: u16, body: String },
    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

/// Synchronous external payment calls, single attempt, no retries.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn process_payment(&self, payment_data: Value) -> Result<Value, PaymentGatewayError>;
    async fn get_payment_status(&self, transaction_id: &str)
    -> Result<Value, PaymentGatewayError>;
}
