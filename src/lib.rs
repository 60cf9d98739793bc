//! # chirpy
//!
//! A small HTTP service for short text posts ("chirps"): it validates and
//! redacts them, counts visits to the static app, and keeps user records in
//! memory.
//!
//! ## Layers
//!
//! - **HTTP plumbing** — hyper + tokio underneath, a [`matchit`] radix-tree
//!   [`Router`], typed [`Request`] / [`Response`], and handlers that are
//!   plain `async fn`s.
//! - **Middleware** — functions that wrap a handler and return a handler
//!   ([`middleware::count_hits`], [`middleware::trace`]).
//! - **Domain** — [`moderation`] (length check and banned-word redaction),
//!   [`metrics::HitCounter`], [`users::UserStore`], [`fileserver`].
//! - **App** — [`App`] wires the domain into routes.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use chirpy::{App, Server};
//! use chirpy::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let app = App::new(config.clone());
//!     Server::bind(&config.addr)?.serve(app.router()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Routes
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET  | `/api/healthz` | readiness |
//! | POST | `/api/validate_chirp` | moderate `{ "body": … }` |
//! | POST | `/api/users` | create `{ "email": … }` |
//! | GET  | `/admin/metrics` | HTML hit count |
//! | POST | `/admin/reset` | zero the hit count |
//! | GET  | `/app/…` | static files, counted |

mod app;
mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod config;
pub mod fileserver;
pub mod health;
pub mod metrics;
pub mod middleware;
pub mod moderation;
pub mod users;

pub use app::App;
pub use error::Error;
pub use handler::Handler;
pub use method::{Method, UnknownMethod};
pub use request::Request;
pub use response::{ContentType, IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
