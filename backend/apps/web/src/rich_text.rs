//! Rich-text API
//!
//! Plain-text extraction for serialized editor documents. Pure function, no
//! session access, so it is mounted outside the navigation guard.

use axum::{Json, Router, routing::post};
use platform::rich_text::extract_text;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RichTextRequest {
    /// Serialized editor document
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct RichTextResponse {
    /// `null` tells the client to keep its placeholder
    pub text: Option<String>,
}

/// POST /api/rich-text/text
pub async fn text(Json(req): Json<RichTextRequest>) -> Json<RichTextResponse> {
    let text = match extract_text(&req.content) {
        Ok(text) if !text.is_empty() => Some(text),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "Rich-text content not extractable");
            None
        }
    };
    Json(RichTextResponse { text })
}

pub fn rich_text_router() -> Router {
    Router::new().route("/text", post(text))
}
