//! Route table and HTTP adapters.
//!
//! [`App`] owns the shared state (hit counter, moderator, user store,
//! config) and turns it into a [`Router`]. Each handler decodes its request,
//! calls into the domain types, and encodes the result; none of them hold
//! logic of their own beyond choosing a status code.

use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::fileserver::FileServer;
use crate::health;
use crate::method::Method;
use crate::metrics::HitCounter;
use crate::middleware;
use crate::moderation::{Moderator, ValidationError};
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;
use crate::status::Status;
use crate::users::UserStore;

// ── Wire types ────────────────────────────────────────────────────────────────

/// A missing or null `body` decodes as an empty chirp; only syntax and type
/// errors are rejected.
#[derive(Debug, Deserialize)]
struct ChirpParams {
    #[serde(default, alias = "Body")]
    body: Option<String>,
}

#[derive(Debug, Serialize)]
struct Cleaned {
    cleaned_body: String,
}

#[derive(Debug, Deserialize)]
struct UserParams {
    email: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: Status, msg: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: msg.into() })).into_response()
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Everything the handlers share. Cheap to clone: every field is a handle.
#[derive(Clone)]
pub struct App {
    hits: HitCounter,
    moderator: Arc<Moderator>,
    users: UserStore,
    files: FileServer,
    config: Arc<Config>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            hits: HitCounter::new(),
            moderator: Arc::new(Moderator::default()),
            users: UserStore::new(),
            files: FileServer::new(config.fileserver_root.clone()),
            config: Arc::new(config),
        }
    }

    /// Replaces the moderator (for custom banned-word sets).
    pub fn with_moderator(mut self, moderator: Moderator) -> Self {
        self.moderator = Arc::new(moderator);
        self
    }

    pub fn hits(&self) -> &HitCounter { &self.hits }
    pub fn users(&self) -> &UserStore { &self.users }
    pub fn config(&self) -> &Config { &self.config }

    /// Builds the route table. Only the `/app/` file routes are counted; the
    /// `/app` redirect is not. `HEAD` is served by every `GET` route.
    pub fn router(&self) -> Router {
        Router::new()
            .on(Method::Get, "/api/healthz", middleware::trace(health::readiness))
            .on(Method::Post, "/api/validate_chirp", middleware::trace(self.with(validate_chirp)))
            .on(Method::Post, "/api/users", middleware::trace(self.with(create_user)))
            .on(Method::Get, "/admin/metrics", middleware::trace(self.with(metrics)))
            .on(Method::Post, "/admin/reset", middleware::trace(self.with(reset)))
            .on(Method::Get, "/app", middleware::trace(app_redirect))
            .on(
                Method::Get,
                "/app/",
                middleware::trace(middleware::count_hits(self.hits.clone(), self.with(serve_file))),
            )
            .on(
                Method::Get,
                "/app/{*path}",
                middleware::trace(middleware::count_hits(self.hits.clone(), self.with(serve_file))),
            )
    }

    /// Binds a state-taking handler to a clone of this app.
    fn with<F, Fut>(&self, f: F) -> impl Fn(Request) -> Fut + Send + Sync + 'static + use<F, Fut>
    where
        F: Fn(App, Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let app = self.clone();
        move |req: Request| f(app.clone(), req)
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn validate_chirp(app: App, req: Request) -> Response {
    let params: ChirpParams = match req.json() {
        Ok(p) => p,
        Err(e) => {
            warn!("error decoding parameters: {e}");
            return Response::status(Status::InternalServerError);
        }
    };

    let body = params.body.unwrap_or_default();
    match app.moderator.moderate(&body) {
        Ok(moderation) => {
            if moderation.flagged {
                info!("banned word redacted from chirp");
            }
            Json(Cleaned { cleaned_body: moderation.body }).into_response()
        }
        Err(e @ ValidationError::TooLong { .. }) => error_response(Status::BadRequest, e.to_string()),
    }
}

async fn create_user(app: App, req: Request) -> Response {
    let params: UserParams = match req.json() {
        Ok(p) => p,
        Err(e) => {
            warn!("error decoding parameters: {e}");
            return Response::status(Status::InternalServerError);
        }
    };

    let email = params.email.trim();
    if email.is_empty() {
        return error_response(Status::BadRequest, "Email is required");
    }

    let user = app.users.create(email);
    info!(id = %user.id, "user created");
    (Status::Created, Json(user)).into_response()
}

async fn metrics(app: App, _req: Request) -> Response {
    Response::html(render_metrics(app.hits.value()))
}

async fn reset(app: App, _req: Request) -> Response {
    app.hits.reset();
    if app.config.is_dev() {
        app.users.clear();
        info!("hit counter reset, users cleared");
    } else {
        info!("hit counter reset");
    }
    Response::text("OK")
}

/// `/app` without the slash is not a file path; send the client to `/app/`.
async fn app_redirect(_req: Request) -> Response {
    Response::builder()
        .status(Status::MovedPermanently)
        .header("location", "/app/")
        .no_body()
}

async fn serve_file(app: App, req: Request) -> Response {
    app.files.serve(req).await
}

fn render_metrics(hits: u64) -> String {
    format!(
        "<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {hits} times!</p>
  </body>
</html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_template_embeds_count() {
        let html = render_metrics(42);
        assert!(html.contains("<h1>Welcome, Chirpy Admin</h1>"));
        assert!(html.contains("<p>Chirpy has been visited 42 times!</p>"));
    }

    #[test]
    fn error_body_shape() {
        let res = error_response(Status::BadRequest, "Chirp is too long");
        assert_eq!(res.status_code(), 400);
        assert_eq!(res.body(), br#"{"error":"Chirp is too long"}"#);
    }
}
