use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use super::user::User;

/// Domain event emitted when a user is created.
#[derive(Debug, Clone)]
pub struct UserCreatedEvent {
    user: User,
    occurred_on: DateTime<Utc>,
}

impl UserCreatedEvent {
    pub const EVENT_TYPE: &'static str = "user.created";

    pub fn new(user: User, occurred_on: DateTime<Utc>) -> Self {
        Self { user, occurred_on }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }

    /// Flat JSON envelope with an event-type tag, consumed by the publisher.
    pub fn to_payload(&self) -> Value {
        json!({
            "event_type": Self::EVENT_TYPE,
            "user": self.user.to_json(),
            "occurred_on": self.occurred_on.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }
}
