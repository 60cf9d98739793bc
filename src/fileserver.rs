//! Static file serving under `/app/`.
//!
//! Requests are resolved against a fixed root directory. A path that tries
//! to leave the root (`..`, backslashes, NUL) is answered with 404, the same
//! as a file that does not exist.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error};

use crate::request::Request;
use crate::response::{ContentType, Response};
use crate::status::Status;

const INDEX: &str = "index.html";

/// Serves files from one root directory.
#[derive(Debug, Clone)]
pub struct FileServer {
    root: Arc<PathBuf>,
}

impl FileServer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: Arc::new(root.into()) }
    }

    /// Serves the file named by the `path` route parameter, or the root
    /// index when the parameter is absent.
    pub async fn serve(&self, req: Request) -> Response {
        let rel = req.param("path").unwrap_or("");
        let Some(path) = resolve(&self.root, rel) else {
            debug!(path = rel, "rejected file path");
            return Response::status(Status::NotFound);
        };
        self.read(path).await
    }

    async fn read(&self, mut path: PathBuf) -> Response {
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => path.push(INDEX),
            Ok(_) => {}
            Err(e) => return io_failure(&path, e),
        }

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let content_type = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(ContentType::from_extension)
                    .unwrap_or(ContentType::OctetStream);
                Response::builder().bytes(content_type, bytes)
            }
            Err(e) => io_failure(&path, e),
        }
    }
}

fn io_failure(path: &Path, e: std::io::Error) -> Response {
    match e.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::IsADirectory => {
            Response::status(Status::NotFound)
        }
        ErrorKind::PermissionDenied => Response::status(Status::Forbidden),
        _ => {
            error!(path = %path.display(), "error reading file: {e}");
            Response::status(Status::InternalServerError)
        }
    }
}

/// Joins a URL-relative path onto `root`, refusing anything that could
/// climb out of it.
fn resolve(root: &Path, rel: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for segment in rel.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            s if s.contains(['\\', '\0']) || s.contains(':') => return None,
            s => path.push(s),
        }
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;
    use crate::router::Router;

    fn app(root: &Path) -> Router {
        let files = FileServer::new(root);
        let index = files.clone();
        Router::new()
            .on(Method::Get, "/app/", move |req: Request| {
                let files = index.clone();
                async move { files.serve(req).await }
            })
            .on(Method::Get, "/app/{*path}", move |req: Request| {
                let files = files.clone();
                async move { files.serve(req).await }
            })
    }

    #[test]
    fn resolve_rejects_escapes() {
        let root = Path::new("/srv");
        assert_eq!(resolve(root, "a/b.txt"), Some(PathBuf::from("/srv/a/b.txt")));
        assert_eq!(resolve(root, "./a//b"), Some(PathBuf::from("/srv/a/b")));
        assert_eq!(resolve(root, ""), Some(PathBuf::from("/srv")));
        assert_eq!(resolve(root, "../etc/passwd"), None);
        assert_eq!(resolve(root, "a/../../b"), None);
        assert_eq!(resolve(root, "a\\..\\b"), None);
        assert_eq!(resolve(root, "C:/x"), None);
    }

    #[tokio::test]
    async fn serves_index_for_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Welcome to Chirpy</h1>").unwrap();

        let res = app(dir.path()).call(Request::new(Method::Get, "/app/")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("content-type"), Some("text/html; charset=utf-8"));
        assert_eq!(res.body(), b"<h1>Welcome to Chirpy</h1>");
    }

    #[tokio::test]
    async fn serves_nested_files_with_content_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/logo.png"), [0x89, b'P', b'N', b'G']).unwrap();

        let res = app(dir.path())
            .call(Request::new(Method::Get, "/app/assets/logo.png"))
            .await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("content-type"), Some("image/png"));
        assert_eq!(res.body(), &[0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn missing_files_and_escapes_are_404() {
        let dir = tempfile::tempdir().unwrap();
        let router = app(dir.path());

        let res = router.call(Request::new(Method::Get, "/app/nope.txt")).await;
        assert_eq!(res.status_code(), 404);

        let res = router.call(Request::new(Method::Get, "/app/../Cargo.toml")).await;
        assert_eq!(res.status_code(), 404);

        // A directory without an index is not listed.
        let res = router.call(Request::new(Method::Get, "/app/")).await;
        assert_eq!(res.status_code(), 404);
    }
}
