use async_trait::async_trait;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};

use super::{FragmentStream, ImagePayload, Provider, ProviderCall, sse_events};
use crate::error::BackendError;

const BACKEND: &str = "together";

// OpenAI compatible chat completion request
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: MessageContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

// One streamed delta
#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
struct Delta {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

pub struct TogetherProvider {
    client: reqwest::Client,
    base_url: String,
}

impl TogetherProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

fn build_request(call: &ProviderCall) -> ChatRequest<'_> {
    let content = match &call.image {
        None => MessageContent::Text(&call.prompt),
        Some(image) => {
            let url = match image {
                ImagePayload::Url(url) => url.clone(),
                ImagePayload::Inline { mime_type, data } => {
                    format!("data:{};base64,{}", mime_type, data)
                }
            };
            MessageContent::Parts(vec![
                ContentPart::Text { text: &call.prompt },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url },
                },
            ])
        }
    };

    ChatRequest {
        model: &call.model,
        messages: vec![ChatMessage {
            role: "user",
            content,
        }],
        stream: true,
    }
}

fn decode_chunk(data: &str) -> Result<String, BackendError> {
    let chunk: StreamChunk = serde_json::from_str(data).map_err(|source| BackendError::Decode {
        backend: BACKEND,
        source,
    })?;

    if let Some(err) = chunk.error {
        if err.kind.as_deref() == Some("rate_limit_exceeded") {
            return Err(BackendError::QuotaExceeded { backend: BACKEND });
        }
        return Err(BackendError::Stream {
            backend: BACKEND,
            message: err.message,
        });
    }

    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.delta.content)
        .unwrap_or_default())
}

#[async_trait]
impl Provider for TogetherProvider {
    fn name(&self) -> &'static str {
        BACKEND
    }

    async fn complete(
        &self,
        call: &ProviderCall,
        api_key: &str,
    ) -> Result<FragmentStream, BackendError> {
        let res = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
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
