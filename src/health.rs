//! Health-check handler.
//!
//! Registered at `GET /api/healthz`. If the process can answer HTTP at all
//! it is ready: the service has no external dependencies to gate on.

use crate::{Request, Response};

/// Readiness check. Always `200 OK`, `text/plain`, body `"OK"`.
pub async fn readiness(_req: Request) -> Response {
    Response::text("OK")
}
