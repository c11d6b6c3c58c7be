pub mod hashset_banned_token_store;
pub mod in_memory_user_repository;
pub mod postgres_user_repository;
pub mod redis_banned_token_store;
