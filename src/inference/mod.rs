//! Uniform adapter over the hosted inference backends.
//!
//! A [`Provider`] knows one backend's wire format. [`InferenceClient`] pairs a
//! provider with its credentials and runs the describe and code stages through
//! [`with_credential_fallback`].

mod fallback;
mod fragments;
mod gemini;
mod together;

pub use fallback::with_credential_fallback;
pub use fragments::{FragmentStream, collect_text, sse_events};
pub use gemini::GeminiProvider;
pub use together::TogetherProvider;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::CredentialPair;
use crate::error::BackendError;
use crate::models::ModelId;
use crate::prompts;

/// Screenshot handed to the describe stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
    /// Base64 bytes, for backends that cannot fetch by themselves.
    Inline { mime_type: String, data: String },
    /// Passed through untouched to backends that fetch the image.
    Url(String),
}

/// Everything a backend needs for one call, except the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCall {
    pub model: String,
    pub prompt: String,
    pub image: Option<ImagePayload>,
}

#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Start a streaming completion. Errors before the first fragment (bad
    /// status, transport) are returned directly.
    async fn complete(
        &self,
        call: &ProviderCall,
        api_key: &str,
    ) -> Result<FragmentStream, BackendError>;
}

/// A backend plus the credentials used to reach it.
#[derive(Clone)]
pub struct InferenceClient {
    provider: Arc<dyn Provider>,
    credentials: CredentialPair,
}

impl InferenceClient {
    pub fn new(provider: Arc<dyn Provider>, credentials: CredentialPair) -> Self {
        Self {
            provider,
            credentials,
        }
    }

    pub async fn describe(
        &self,
        model: ModelId,
        image: ImagePayload,
    ) -> Result<String, BackendError> {
        let call = ProviderCall {
            model: model.vision_model().to_string(),
            prompt: prompts::describe_prompt().to_string(),
            image: Some(image),
        };
        self.run(&call).await
    }

    pub async fn generate_code(
        &self,
        model: ModelId,
        prompt: String,
    ) -> Result<String, BackendError> {
        let call = ProviderCall {
            model: model.code_model().to_string(),
            prompt,
            image: None,
        };
        self.run(&call).await
    }

    async fn run(&self, call: &ProviderCall) -> Result<String, BackendError> {
        let backend = self.provider.name();
        tracing::debug!(backend, model = %call.model, "calling backend");

        // drain inside the fallback so in-stream quota errors are retried too
        with_credential_fallback(&self.credentials, backend, |key| async move {
            let fragments = self.provider.complete(call, key).await?;
            collect_text(fragments).await
        })
        .await
    }
}

// 429 is the quota signal that triggers the credential fallback
async fn check_status(
    res: reqwest::Response,
    backend: &'static str,
) -> Result<reqwest::Response, BackendError> {
    let status = res.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(BackendError::QuotaExceeded { backend });
    }
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(BackendError::Http {
            backend,
            status: status.as_u16(),
            body,
        });
    }
    Ok(res)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use futures_util::StreamExt;
    use futures_util::stream;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Serve `app` on an ephemeral local port and return its base url.
    pub async fn serve(app: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// In-memory provider that replays scripted outcomes and records calls.
    pub struct ScriptedProvider {
        name: &'static str,
        script: Mutex<VecDeque<Result<Vec<String>, BackendError>>>,
        calls: Mutex<Vec<(ProviderCall, String)>>,
    }

    impl ScriptedProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                script: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn then_fragments(self, fragments: &[&str]) -> Self {
            self.script
                .lock()
                .unwrap()
                .push_back(Ok(fragments.iter().map(|f| f.to_string()).collect()));
            self
        }

        pub fn then_error(self, err: BackendError) -> Self {
            self.script.lock().unwrap().push_back(Err(err));
            self
        }

        pub fn calls(&self) -> Vec<(ProviderCall, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Provider for ScriptedProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn complete(
            &self,
            call: &ProviderCall,
            api_key: &str,
        ) -> Result<FragmentStream, BackendError> {
            self.calls
                .lock()
                .unwrap()
                .push((call.clone(), api_key.to_string()));
            let next = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted provider ran out of responses");
            let fragments = next?;
            Ok(stream::iter(fragments.into_iter().map(Ok)).boxed())
        }
    }
}
