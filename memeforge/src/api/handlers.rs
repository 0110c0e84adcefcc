use std::path::PathBuf;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use rand::seq::SliceRandom;
use serde::Deserialize;

use super::state::AppState;
use super::templates;
use crate::error::{MemeforgeError, Result};

/// One POST /create submission; lives for the duration of the request.
#[derive(Debug, Deserialize)]
pub struct MemeForm {
    pub image_url: String,
    pub body: String,
    pub author: String,
}

/// GET / — render a random stock image with a random library quote.
pub async fn meme_rand(State(state): State<AppState>) -> Result<Html<String>> {
    let image = state
        .images
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| MemeforgeError::Internal("no stock images loaded".to_string()))?;
    let quote = state
        .quotes
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| MemeforgeError::Internal("no quotes loaded".to_string()))?;

    let path = render_blocking(&state, image, quote.body, quote.author).await?;
    Ok(Html(templates::meme_page(&file_name(&path)?)))
}

/// GET /create — the submission form.
pub async fn meme_form() -> Html<&'static str> {
    Html(templates::FORM_PAGE)
}

/// POST /create — fetch a remote image and render the submitted caption.
/// Failures surface as an HTML error page rather than an error status.
pub async fn meme_post(State(state): State<AppState>, Form(form): Form<MemeForm>) -> Html<String> {
    match create_meme(&state, form).await {
        Ok(file) => Html(templates::meme_page(&file)),
        Err(e) => {
            tracing::warn!("Meme creation failed: {e}");
            Html(templates::error_page(&e.to_string()))
        }
    }
}

async fn create_meme(state: &AppState, form: MemeForm) -> Result<String> {
    let response = state
        .http
        .get(&form.image_url)
        .send()
        .await?
        .error_for_status()?;
    let bytes = response.bytes().await?;

    // The download lands in a temp file that is removed once the render
    // is done, mirroring the engine's load-from-path contract.
    let tmp = tempfile::Builder::new()
        .prefix("meme-gen-fg-")
        .suffix(".img")
        .tempfile()?;
    std::fs::write(tmp.path(), &bytes)?;

    let path = render_blocking(state, tmp.path().to_path_buf(), form.body, form.author).await?;
    file_name(&path)
}

/// GET /static/{file} — serve a rendered meme back out of the output dir.
pub async fn serve_static(State(state): State<AppState>, Path(file): Path<String>) -> Response {
    if file.contains("..") || file.contains('/') {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let path = state.config.render.output_dir.join(&file);
    let Ok(bytes) = tokio::fs::read(&path).await else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let mime = mime_guess::from_path(&file).first_or_octet_stream();
    let mut response = Response::new(Body::from(bytes));
    if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}

/// The render is synchronous and blocking, so it runs on the blocking pool
/// with a fresh engine moved into the task.
async fn render_blocking(
    state: &AppState,
    image: PathBuf,
    body: String,
    author: String,
) -> Result<PathBuf> {
    let mut engine = state.engine();
    let width = state.config.render.width;
    tokio::task::spawn_blocking(move || engine.make_meme(&image, &body, &author, width))
        .await
        .map_err(|e| MemeforgeError::Internal(format!("render task failed: {e}")))?
}

fn file_name(path: &std::path::Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(String::from)
        .ok_or_else(|| {
            MemeforgeError::Internal(format!("output path has no file name: {}", path.display()))
        })
}
