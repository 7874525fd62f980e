use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;

/// `error` field of every failure body.
pub const RENDER_FAILURE: &str = "Error generating wallpaper";
/// Browser and CDN cache lifetime for generated images.
pub const CACHE_CONTROL: &str = "public, max-age=3600, s-maxage=3600";

/// JSON body returned with a 500.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// Suggested download name for a wallpaper generated on `today`.
pub fn wallpaper_filename(today: NaiveDate) -> String {
    format!("goal-wallpaper-{}.png", today.format("%Y-%m-%d"))
}

pub(crate) fn png_response(png: Vec<u8>, today: NaiveDate) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_LENGTH, png.len().to_string()),
            (header::CACHE_CONTROL, CACHE_CONTROL.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", wallpaper_filename(today)),
            ),
        ],
        png,
    )
        .into_response()
}

pub(crate) fn render_failure(message: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: RENDER_FAILURE.to_string(),
            message: message.into(),
        }),
    )
        .into_response()
}

#[cfg(test)]
#[path = "../../tests/unit/server/response.rs"]
mod tests;
