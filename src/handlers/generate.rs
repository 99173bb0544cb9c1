use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{StatusCode, header},
    response::Response,
};
use futures_util::stream;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

use crate::error::AppError;
use crate::image::fetch_inline;
use crate::inference::ImagePayload;
use crate::metrics::{REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{Backend, GenerationRequest};
use crate::prompts;
use crate::state::AppState;

// Request lifecycle, logged as it advances. Any stage may end in Error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Received,
    Validated,
    Describing,
    Described,
    GeneratingCode,
    Streaming,
    Done,
    Error,
}

fn enter(stage: Stage) {
    tracing::debug!(?stage, "generate stage");
}

// Terminal transition for a finished request
fn finish(result: &Result<Response, AppError>) -> Stage {
    match result {
        Ok(_) => {
            enter(Stage::Done);
            Stage::Done
        }
        Err(err) => {
            tracing::debug!(stage = ?Stage::Error, error = %err, "generate stage");
            Stage::Error
        }
    }
}

// Body is parsed by hand so every schema problem becomes a 422
fn parse_request(body: &[u8]) -> Result<GenerationRequest, AppError> {
    let request: GenerationRequest =
        serde_json::from_slice(body).map_err(|e| AppError::Validation(e.to_string()))?;

    let url = reqwest::Url::parse(&request.image_url)
        .map_err(|e| AppError::Validation(format!("invalid imageUrl: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Validation(
            "invalid imageUrl: scheme must be http or https".to_string(),
        ));
    }

    Ok(request)
}

// Drop markdown fences the model may add despite being told not to.
// Whole fence lines go away; a fence inside a line is cut out together with
// a language tag that runs to the end of the line.
fn strip_code_fences(code: &str) -> String {
    code.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .map(strip_inline_fences)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn strip_inline_fences(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(at) = rest.find("```") {
        // `at` is the start of a backtick run, so `out` never ends in a backtick
        out.push_str(&rest[..at]);
        rest = &rest[at + 3..];
        if rest.chars().all(|c| c.is_ascii_alphanumeric()) {
            rest = "";
        }
    }
    out.push_str(rest);
    out
}

fn stream_response(code: String) -> Result<Response, AppError> {
    let chunks: Vec<Result<String, Infallible>> = code
        .split_inclusive('\n')
        .map(|line| Ok(line.to_string()))
        .collect();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(stream::iter(chunks)))
        .map_err(|e| AppError::Internal(e.to_string()))
}

//post handler
pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AppError> {
    REQUEST_TOTAL.inc();
    let start_time = Instant::now();

    let result = generate(&state, &body).await;
    finish(&result);

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());
    result
}

#[tracing::instrument(skip_all, fields(model = tracing::field::Empty))]
async fn generate(state: &AppState, body: &[u8]) -> Result<Response, AppError> {
    enter(Stage::Received);
    let request = parse_request(body)?;
    tracing::Span::current().record("model", request.model.code_model());
    enter(Stage::Validated);

    let backend = request.model.backend();
    // Gemini needs the bytes, fetch before any inference call
    let image = match backend {
        Backend::Gemini => fetch_inline(&state.client, &request.image_url).await?,
        Backend::Together => ImagePayload::Url(request.image_url.clone()),
    };

    let inference = state.inference(backend);

    enter(Stage::Describing);
    let description = inference.describe(request.model, image).await?;
    enter(Stage::Described);

    enter(Stage::GeneratingCode);
    let prompt = prompts::code_prompt(&description, request.shadcn);
    let code = inference.generate_code(request.model, prompt).await?;

    enter(Stage::Streaming);
    let code = strip_code_fences(&code);
    tracing::info!(
        backend = backend.as_str(),
        description_len = description.len(),
        code_len = code.len(),
        "code generated"
    );
    stream_response(code)
}
