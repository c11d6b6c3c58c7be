use std::{sync::Arc, time::Duration};

use chrono::Utc;
use secrecy::Secret;
use serde_json::{Value, json};
use userhub_adapters::{
    AppState, HashSetBannedTokenStore, InMemoryUserRepository, JwtIssuer, NoopEventPublisher,
};
use userhub_core::{Email, User, UserId, UserName, UserRepository, password};
use userhub_service::UserService;

struct TestApp {
    address: String,
    client: reqwest::Client,
    users: InMemoryUserRepository,
}

impl TestApp {
    async fn spawn() -> Self {
        let users = InMemoryUserRepository::new();
        let state = AppState::new(
            Arc::new(users.clone()),
            Arc::new(NoopEventPublisher),
            Arc::new(HashSetBannedTokenStore::new()),
            JwtIssuer::new(
                &Secret::new("integration-test-secret".to_string()),
                "userhub".to_string(),
                Duration::from_secs(3600),
            ),
        );

        let router = UserService::new(state).into_router(&[]);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("server failed");
        });

        Self {
            address,
            client: reqwest::Client::new(),
            users,
        }
    }

    async fn seed_user(&self, id: i64, name: &str, email: &str, plain_password: &str) {
        let now = Utc::now();
        let user = User::new(
            UserId::new(id).unwrap(),
            UserName::parse(name).unwrap(),
            Email::parse(email).unwrap(),
            password::hash_password(plain_password).unwrap(),
            None,
            Some(now),
            Some(now),
        );
        self.users.save(user).await.unwrap();
    }

    async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/login", self.address))
            .json(&json!({"email": email, "password": password}))
            .send()
            .await
            .unwrap()
    }

    /// Seeds an operator account and returns a valid access token for it.
    async fn token(&self) -> String {
        self.seed_user(1000, "Operator", "operator@userhub.test", "Operator1!")
            .await;
        let body: Value = self
            .login("operator@userhub.test", "Operator1!")
            .await
            .json()
            .await
            .unwrap();
        body["data"]["access_token"].as_str().unwrap().to_string()
    }

    async fn get(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .bearer_auth(token)
            .send()
            .await
            .unwrap()
    }

    async fn post(&self, path: &str, token: &str, body: Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn put(&self, path: &str, token: &str, body: Value) -> reqwest::Response {
        self.client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn delete(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
            .send()
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn login_returns_user_and_bearer_token() {
    let app = TestApp::spawn().await;
    app.seed_user(1, "John Doe", "john@x.com", "Secret123!").await;

    let response = app.login("john@x.com", "Secret123!").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["data"]["user"]["email"], "john@x.com");
    assert_eq!(body["data"]["token_type"], "Bearer");
    assert!(body["data"]["access_token"].as_str().unwrap().len() > 20);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.seed_user(1, "John Doe", "john@x.com", "Secret123!").await;

    let wrong_password = app.login("john@x.com", "WrongPass1!").await;
    let unknown_email = app.login("nobody@x.com", "Secret123!").await;

    assert_eq!(wrong_password.status(), 401);
    assert_eq!(unknown_email.status(), 401);

    let first: Value = wrong_password.json().await.unwrap();
    let second: Value = unknown_email.json().await.unwrap();
    assert_eq!(first["message"], second["message"]);
}

#[tokio::test]
async fn login_with_missing_fields_is_unprocessable() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/login", app.address))
        .json(&json!({"email": "john@x.com"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["errors"]["password"].is_array());
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/users", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.get("/users", "not.a.real.token").await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn create_user_returns_created_profile() {
    let app = TestApp::spawn().await;
    let token = app.token().await;

    let response = app
        .post(
            "/users",
            &token,
            json!({"name": "John Doe", "email": "john@x.com", "password": "Secret123!"}),
        )
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "John Doe");
    assert_eq!(body["data"]["email"], "john@x.com");
    assert!(body["data"]["password_hash"].is_null());
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let app = TestApp::spawn().await;
    let token = app.token().await;

    let payload = json!({"name": "John Doe", "email": "john@x.com", "password": "Secret123!"});
    app.post("/users", &token, payload.clone()).await;

    let response = app
        .post(
            "/users",
            &token,
            json!({"name": "Other", "email": "john@x.com", "password": "Other456!"}),
        )
        .await;

    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn create_with_malformed_email_is_unprocessable() {
    let app = TestApp::spawn().await;
    let token = app.token().await;

    let response = app
        .post(
            "/users",
            &token,
            json!({"name": "John Doe", "email": "bad", "password": "Secret123!"}),
        )
        .await;

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.unwrap();
    assert!(body["errors"]["email"].is_array());
}

#[tokio::test]
async fn create_with_short_password_is_unprocessable() {
    let app = TestApp::spawn().await;
    let token = app.token().await;

    let response = app
        .post(
            "/users",
            &token,
            json!({"name": "John Doe", "email": "john@x.com", "password": "short"}),
        )
        .await;

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.unwrap();
    assert!(body["errors"]["password"].is_array());
}

#[tokio::test]
async fn get_user_by_id() {
    let app = TestApp::spawn().await;
    let token = app.token().await;
    app.seed_user(5, "Jane Doe", "jane@x.com", "Secret123!").await;

    let found = app.get("/users/5", &token).await;
    let missing = app.get("/users/99", &token).await;

    assert_eq!(found.status(), 200);
    let body: Value = found.json().await.unwrap();
    assert_eq!(body["data"]["id"], 5);
    assert_eq!(body["data"]["name"], "Jane Doe");

    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn update_user_applies_provided_fields() {
    let app = TestApp::spawn().await;
    let token = app.token().await;
    app.seed_user(5, "Jane Doe", "jane@x.com", "Secret123!").await;

    let response = app
        .put("/users/5", &token, json!({"name": "Jane Smith"}))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Jane Smith");
    assert_eq!(body["data"]["email"], "jane@x.com");
    assert!(body["data"]["updated_at"].is_string());
}

#[tokio::test]
async fn update_to_taken_email_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.token().await;
    app.seed_user(5, "Jane Doe", "jane@x.com", "Secret123!").await;
    app.seed_user(6, "John Doe", "john@x.com", "Secret123!").await;

    let response = app
        .put("/users/5", &token, json!({"email": "john@x.com"}))
        .await;

    assert_eq!(response.status(), 400);

    // Target user unchanged
    let body: Value = app.get("/users/5", &token).await.json().await.unwrap();
    assert_eq!(body["data"]["email"], "jane@x.com");
}

#[tokio::test]
async fn update_missing_user_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.token().await;

    let response = app.put("/users/99", &token, json!({"name": "Ghost"})).await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn delete_user_then_it_is_gone() {
    let app = TestApp::spawn().await;
    let token = app.token().await;
    app.seed_user(5, "Jane Doe", "jane@x.com", "Secret123!").await;

    let first = app.delete("/users/5", &token).await;
    assert_eq!(first.status(), 200);

    assert_eq!(app.get("/users/5", &token).await.status(), 404);

    // Second delete fails the same way as any other missing id
    let second = app.delete("/users/5", &token).await;
    assert_eq!(second.status(), 404);
}

#[tokio::test]
async fn list_users_pages_in_id_order() {
    let app = TestApp::spawn().await;
    let token = app.token().await;
    for id in 1..=5 {
        app.seed_user(id, &format!("User {id}"), &format!("user{id}@x.com"), "Secret123!")
            .await;
    }

    let response = app.get("/users?page=2&per_page=2", &token).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 4]);
    assert_eq!(body["meta"], json!({"page": 2, "per_page": 2}));
}

#[tokio::test]
async fn me_returns_the_authenticated_profile() {
    let app = TestApp::spawn().await;
    let token = app.token().await;

    let response = app.get("/me", &token).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["email"], "operator@userhub.test");
}

#[tokio::test]
async fn me_with_token_for_a_deleted_user_is_unauthorized() {
    let app = TestApp::spawn().await;
    let token = app.token().await;

    app.users
        .delete(UserId::new(1000).unwrap())
        .await
        .unwrap();

    let response = app.get("/me", &token).await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn logout_revokes_the_token() {
    let app = TestApp::spawn().await;
    let token = app.token().await;

    assert_eq!(app.get("/me", &token).await.status(), 200);

    let logout = app.post("/logout", &token, json!({})).await;
    assert_eq!(logout.status(), 200);

    assert_eq!(app.get("/me", &token).await.status(), 401);
}
