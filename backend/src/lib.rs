//! User directory backend.
//!
//! Hexagonal layout: [`domain`] holds the user model, use cases and ports;
//! [`inbound::http`] adapts them to actix-web; [`outbound`] provides the
//! PostgreSQL and in-memory repositories; [`server`] wires everything into
//! an `HttpServer`.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
