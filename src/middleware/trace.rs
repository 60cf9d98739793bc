use std::time::Instant;

use tracing::info;

use crate::handler::Handler;
use crate::request::Request;

/// Wraps `handler` so each request logs method, path, status and latency
/// once the response is ready.
pub fn trace(handler: impl Handler) -> impl Handler {
    let inner = handler.into_boxed_handler();
    move |req: Request| {
        let method = req.method();
        let path = req.path().to_owned();
        let started = Instant::now();
        let fut = inner.call(req);
        async move {
            let res = fut.await;
            info!(
                %method,
                path = %path,
                status = res.status_code(),
                latency_us = started.elapsed().as_micros() as u64,
                "request"
            );
            res
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;
    use crate::router::Router;
    use crate::status::Status;

    #[tokio::test]
    async fn response_passes_through() {
        let router = Router::new().on(
            Method::Get,
            "/",
            trace(|_req: Request| async { Status::NoContent }),
        );
        let res = router.call(Request::new(Method::Get, "/")).await;
        assert_eq!(res.status_code(), 204);
    }
}
