use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "../../frontend/"]
pub struct FrontendAssets;

/// Serve the embedded single-page frontend. Unknown paths fall back to
/// index.html so a browser refresh always lands on the app.
pub async fn serve_frontend(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    match FrontendAssets::get(path) {
        Some(file) => serve_asset(path, file.data.into_owned()),
        None => match FrontendAssets::get("index.html") {
            Some(file) => serve_asset("index.html", file.data.into_owned()),
            None => (StatusCode::NOT_FOUND, "frontend not embedded").into_response(),
        },
    }
}

fn serve_asset(path: &str, data: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, content_type_for(path))], data).into_response()
}

fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_cover_frontend_assets() {
        assert_eq!(content_type_for("index.html"), "text/html; charset=utf-8");
        assert_eq!(content_type_for("app.js"), "application/javascript");
        assert_eq!(content_type_for("style.css"), "text/css");
        assert_eq!(content_type_for("unknown.bin"), "application/octet-stream");
    }

    #[tokio::test]
    async fn root_serves_index() {
        let response = serve_frontend(Uri::from_static("/")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
