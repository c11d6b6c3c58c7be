pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod state;
pub mod validation;
