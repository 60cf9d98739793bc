//! Middleware layer.
//!
//! Middleware is a plain function that takes a handler and returns a new
//! handler. The inner handler is boxed once, when the wrapper is built; the
//! returned closure satisfies [`Handler`](crate::Handler) through the same
//! blanket impl as any `async fn`, so wrappers nest freely:
//!
//! ```rust
//! use chirpy::{Method, Request, Response, Router};
//! use chirpy::metrics::HitCounter;
//! use chirpy::middleware;
//!
//! async fn page(_req: Request) -> Response { Response::text("hi") }
//!
//! let hits = HitCounter::new();
//! let app = Router::new()
//!     .on(Method::Get, "/app/", middleware::trace(middleware::count_hits(hits, page)));
//! ```
//!
//! Built-in middleware:
//! - [`count_hits`] — bumps a [`HitCounter`](crate::metrics::HitCounter) per request
//! - [`trace`] — one log event per request with method, path, status, latency

mod hits;
mod trace;

pub use hits::count_hits;
pub use trace::trace;
