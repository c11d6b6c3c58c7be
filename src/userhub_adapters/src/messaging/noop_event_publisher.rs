use serde_json::Value;
use userhub_core::{EventPublisher, EventPublisherError};

/// Publisher that drops events, for wiring without a broker.
#[derive(Debug, Default, Clone)]
pub struct NoopEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoopEventPublisher {
    async fn publish(&self, event_type: &str, _payload: Value) -> Result<(), EventPublisherError> {
        tracing::debug!(event_type, "event dropped by noop publisher");
        Ok(())
    }
}
