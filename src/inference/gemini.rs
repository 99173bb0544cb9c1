use async_trait::async_trait;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};

use super::{FragmentStream, ImagePayload, Provider, ProviderCall, sse_events};
use crate::error::BackendError;

const BACKEND: &str = "gemini";

// Gemini generateContent request format
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

// Variant order matters for untagged decoding
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

// One SSE event of streamGenerateContent
#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

fn build_request(call: &ProviderCall) -> GenerateContentRequest {
    let mut parts = Vec::with_capacity(2);
    match &call.image {
        Some(ImagePayload::Inline { mime_type, data }) => parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.clone(),
                data: data.clone(),
            },
        }),
        // Gemini can't fetch arbitrary urls, hand it over as text
        Some(ImagePayload::Url(url)) => parts.push(Part::Text { text: url.clone() }),
        None => {}
    }
    parts.push(Part::Text {
        text: call.prompt.clone(),
    });

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
    }
}

// Text carried by one streamed chunk; missing candidates or parts count as empty
fn decode_chunk(data: &str) -> Result<String, BackendError> {
    let chunk: StreamChunk = serde_json::from_str(data).map_err(|source| BackendError::Decode {
        backend: BACKEND,
        source,
    })?;

    if let Some(err) = chunk.error {
        if err.code == 429 || err.status == "RESOURCE_EXHAUSTED" {
            return Err(BackendError::QuotaExceeded { backend: BACKEND });
        }
        return Err(BackendError::Stream {
            backend: BACKEND,
            message: err.message,
        });
    }

    let text = chunk
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| match part {
                    Part::Text { text } => Some(text),
                    Part::InlineData { .. } => None,
                })
                .collect::<String>()
        })
        .unwrap_or_default();
    Ok(text)
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &'static str {
        BACKEND
    }

    async fn complete(
        &self,
        call: &ProviderCall,
        api_key: &str,
    ) -> Result<FragmentStream, BackendError> {
        let url = format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.base_url, call.model
        );

        let res = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&build_request(call))
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                backend: BACKEND,
                source,
            })?;

        let res = super::check_status(res, BACKEND).await?;

        let fragments = sse_events(res.bytes_stream(), BACKEND)
            .map(|event| event.and_then(|data| decode_chunk(&data)));
        Ok(fragments.boxed())
    }
}
