use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::CONTENT_TYPE;

use crate::error::AppError;
use crate::inference::ImagePayload;

const DEFAULT_MIME: &str = "image/png";

// Download the screenshot and wrap it as base64 inline data
pub async fn fetch_inline(client: &reqwest::Client, url: &str) -> Result<ImagePayload, AppError> {
    let res = client
        .get(url)
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(AppError::ImageFetch)?;

    let mime_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_MIME)
        .to_string();

    let bytes = res.bytes().await.map_err(AppError::ImageFetch)?;
    tracing::debug!(size = bytes.len(), %mime_type, "fetched image");

    Ok(ImagePayload::Inline {
        mime_type,
        data: STANDARD.encode(&bytes),
    })
}
