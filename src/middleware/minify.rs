use std::sync::LazyLock;

use axum::{
    body::{Body, to_bytes},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
    keep_closing_tags: true,
    keep_html_and_head_opening_tags: true,
    minify_doctype: false,
    minify_css: true,
    minify_js: true,
    ..Default::default()
});

cfg_if::cfg_if! {
    if #[cfg(debug_assertions)] {
        const MINIFY: bool = false;
    } else {
        const MINIFY: bool = true;
    }
}

/// Minifies `text/html` responses in release builds.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    if MINIFY {
        minify_html_response(response).await
    } else {
        response
    }
}

/// Rewrites an HTML body in minified form. Other content types pass through.
pub async fn minify_html_response(response: Response<Body>) -> Response<Body> {
    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h.contains("text/html"));

    if !is_html {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(err = %err, status = %parts.status, "failed to read html body for minification");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let minified = minify_html::minify(&bytes, &MINIFY_CFG);
    parts.headers.remove(header::CONTENT_LENGTH);

    Response::from_parts(parts, Body::from(minified))
}
