use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use userhub_adapters::{
    AppState,
    http::routes::{
        create_user, delete_user, get_user, list_users, login, logout, me, update_user,
    },
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// The assembled user-management service.
pub struct UserService {
    router: Router,
}

impl UserService {
    /// Build the route table. Ports are injected through `AppState`; there
    /// is no global container to resolve from.
    pub fn new(state: AppState) -> Self {
        let router = Router::new()
            .route("/login", post(login::login))
            .route("/logout", post(logout::logout))
            .route("/me", get(me::me))
            .route(
                "/users",
                get(list_users::list_users).post(create_user::create_user),
            )
            .route(
                "/users/{id}",
                get(get_user::get_user)
                    .put(update_user::update_user)
                    .delete(delete_user::delete_user),
            )
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Finalize the router, optionally restricting CORS to the given
    /// origins. An empty list means no CORS layer at all.
    pub fn into_router(mut self, allowed_origins: &[String]) -> Router {
        if !allowed_origins.is_empty() {
            let origins: Vec<HeaderValue> = allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_origin(AllowOrigin::list(origins));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Serve until the listener closes.
    pub async fn run(
        self,
        listener: TcpListener,
        allowed_origins: &[String],
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("User service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
