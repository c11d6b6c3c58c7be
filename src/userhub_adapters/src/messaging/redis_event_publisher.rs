use std::sync::Arc;

use redis::{Commands, Connection};
use serde_json::Value;
use tokio::sync::Mutex;
use userhub_core::{EventPublisher, EventPublisherError};

/// Publishes domain events as JSON on Redis pub/sub channels.
///
/// Channel name is `<prefix>:<event_type>`, e.g. `user_events:user.created`.
/// Fire-and-forget: the number of subscribers is not surfaced and nothing is
/// retried.
#[derive(Clone)]
pub struct RedisEventPublisher {
    conn: Arc<Mutex<Connection>>,
    channel_prefix: String,
}

impl RedisEventPublisher {
    pub fn new(conn: Arc<Mutex<Connection>>, channel_prefix: String) -> Self {
        Self {
            conn,
            channel_prefix,
        }
    }

    fn channel(&self, event_type: &str) -> String {
        format!("{}:{}", self.channel_prefix, event_type)
    }
}

#[async_trait::async_trait]
impl EventPublisher for RedisEventPublisher {
    #[tracing::instrument(name = "Publishing event to Redis", skip(self, payload))]
    async fn publish(&self, event_type: &str, payload: Value) -> Result<(), EventPublisherError> {
        let channel = self.channel(event_type);
        let message = payload.to_string();

        let mut conn = self.conn.lock().await;
        conn.publish(channel, message)
            .map_err(|e| EventPublisherError::Publish(e.to_string()))
    }
}
