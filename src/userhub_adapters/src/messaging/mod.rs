pub mod noop_event_publisher;
pub mod redis_event_publisher;
