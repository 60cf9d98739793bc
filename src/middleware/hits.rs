use crate::handler::Handler;
use crate::metrics::HitCounter;
use crate::request::Request;

/// Wraps `handler` so every call increments `hits` exactly once.
///
/// The increment happens when the request arrives, before the inner handler
/// runs, so the count means "requests received". The inner response is
/// returned untouched.
pub fn count_hits(hits: HitCounter, handler: impl Handler) -> impl Handler {
    let inner = handler.into_boxed_handler();
    move |req: Request| {
        hits.increment();
        inner.call(req)
    }
}
