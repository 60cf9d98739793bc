//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler. Cross-cutting behaviour is added by wrapping the handler
//! before registration (see [`middleware`](crate::middleware)), never by the
//! router itself.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax and catch-alls `{*name}`;
    /// `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if the path is malformed or conflicts with an existing route.
    /// Routes are fixed at startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Routes one request and produces one response. `404` when no route
    /// matches the method + path pair.
    ///
    /// A `HEAD` request with no route of its own runs the `GET` route for the
    /// same path and drops the body.
    ///
    /// This is the whole request path minus the socket: the server calls it
    /// for every hyper request, and tests call it directly.
    pub async fn call(&self, req: Request) -> Response {
        if let Some((handler, params)) = self.lookup(req.method(), req.path()) {
            return handler.call(req.with_params(params)).await;
        }

        if req.method() == Method::Head {
            if let Some((handler, params)) = self.lookup(Method::Get, req.path()) {
                let mut res = handler.call(req.with_params(params)).await;
                res.body.clear();
                return res;
            }
        }

        Response::status(Status::NotFound)
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
