use serde::Deserialize;

// Inbound request body for POST /api/generateCode
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub model: ModelId,
    pub image_url: String,
    #[serde(default)]
    pub shadcn: bool,
}

/// Hosted inference provider a model runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Gemini,
    Together,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Gemini => "gemini",
            Backend::Together => "together",
        }
    }
}

/// Models a caller may select, named by the provider's own model string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ModelId {
    #[serde(rename = "gemini-2.0-flash")]
    Gemini20Flash,
    #[serde(rename = "gemini-1.5-pro")]
    Gemini15Pro,
    #[serde(rename = "meta-llama/Llama-3.2-90B-Vision-Instruct-Turbo")]
    Llama32Vision90B,
    #[serde(rename = "Qwen/Qwen2.5-Coder-32B-Instruct")]
    QwenCoder32B,
}

impl ModelId {
    pub fn backend(&self) -> Backend {
        match self {
            ModelId::Llama32Vision90B | ModelId::QwenCoder32B => Backend::Together,
            // everything else goes to the default backend
            _ => Backend::Gemini,
        }
    }

    // Model used for the screenshot description stage
    pub fn vision_model(&self) -> &'static str {
        match self {
            ModelId::Gemini20Flash => "gemini-2.0-flash",
            ModelId::Gemini15Pro => "gemini-1.5-pro",
            // Qwen coder has no vision input, so Llama describes the image for it
            ModelId::Llama32Vision90B | ModelId::QwenCoder32B => {
                "meta-llama/Llama-3.2-90B-Vision-Instruct-Turbo"
            }
        }
    }

    // Model used for the code generation stage
    pub fn code_model(&self) -> &'static str {
        match self {
            ModelId::Gemini20Flash => "gemini-2.0-flash",
            ModelId::Gemini15Pro => "gemini-1.5-pro",
            ModelId::Llama32Vision90B => "meta-llama/Llama-3.2-90B-Vision-Instruct-Turbo",
            ModelId::QwenCoder32B => "Qwen/Qwen2.5-Coder-32B-Instruct",
        }
    }
}
