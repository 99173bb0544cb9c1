use std::sync::Arc;

use crate::config::Args;
use crate::inference::{GeminiProvider, InferenceClient, TogetherProvider};
use crate::models::Backend;

// app's shared state, read-only after startup

pub struct AppState {
    pub client: reqwest::Client, // used for image downloads
    pub gemini: InferenceClient,
    pub together: InferenceClient,
}

impl AppState {
    pub fn from_args(args: &Args) -> Self {
        let client = reqwest::Client::new();

        let gemini = InferenceClient::new(
            Arc::new(GeminiProvider::new(client.clone(), &args.gemini_base_url)),
            args.gemini_credentials(),
        );
        let together = InferenceClient::new(
            Arc::new(TogetherProvider::new(client.clone(), &args.together_base_url)),
            args.together_credentials(),
        );

        Self {
            client,
            gemini,
            together,
        }
    }

    pub fn inference(&self, backend: Backend) -> &InferenceClient {
        match backend {
            Backend::Gemini => &self.gemini,
            Backend::Together => &self.together,
        }
    }
}
