use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use super::{email::Email, user_id::UserId, user_name::UserName};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The user aggregate root.
///
/// Identity is fixed at construction; profile fields are mutated in place by
/// the update use case. The repository is the sole persistence authority -
/// an instance only lives for the duration of a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    name: UserName,
    email: Email,
    password_hash: String,
    email_verified_at: Option<DateTime<Utc>>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(
        id: UserId,
        name: UserName,
        email: Email,
        password_hash: String,
        email_verified_at: Option<DateTime<Utc>>,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            email_verified_at,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn set_name(&mut self, name: UserName) {
        self.name = name;
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = email;
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
    }

    pub fn email_verified_at(&self) -> Option<DateTime<Utc>> {
        self.email_verified_at
    }

    pub fn set_email_verified_at(&mut self, at: Option<DateTime<Utc>>) {
        self.email_verified_at = at;
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }

    /// Flat JSON representation of the profile. The password hash is never
    /// included.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id.value(),
            "name": self.name.as_str(),
            "email": self.email.as_str(),
            "email_verified_at": self.email_verified_at.map(format_timestamp),
            "created_at": self.created_at.map(format_timestamp),
            "updated_at": self.updated_at.map(format_timestamp),
        })
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            UserId::new(1).unwrap(),
            UserName::parse("John Doe").unwrap(),
            Email::parse("john@example.com").unwrap(),
            "$argon2id$fake".to_string(),
            None,
            Some(Utc::now()),
            Some(Utc::now()),
        )
    }

    #[test]
    fn test_setters_mutate_in_place() {
        let mut user = sample_user();
        user.set_name(UserName::parse("Jane Doe").unwrap());
        user.set_email(Email::parse("jane@example.com").unwrap());
        assert_eq!(user.name().as_str(), "Jane Doe");
        assert_eq!(user.email().as_str(), "jane@example.com");
    }

    #[test]
    fn test_json_never_contains_password_hash() {
        let user = sample_user();
        let payload = user.to_json();
        assert!(payload.get("password_hash").is_none());
        assert!(payload.get("password").is_none());
        assert_eq!(payload["id"], 1);
        assert_eq!(payload["name"], "John Doe");
        assert_eq!(payload["email"], "john@example.com");
    }

    #[test]
    fn test_json_formats_timestamps() {
        let mut user = sample_user();
        user.set_updated_at("2026-01-02T03:04:05Z".parse().unwrap());
        assert_eq!(user.to_json()["updated_at"], "2026-01-02 03:04:05");
    }
}
