use async_stream::stream;
use bytes::Bytes;
use futures_util::stream::{BoxStream, Stream, StreamExt};

use crate::error::BackendError;

/// Incremental text pieces from one backend call. Finite, not restartable.
pub type FragmentStream = BoxStream<'static, Result<String, BackendError>>;

// Drain every fragment in order into one string
pub async fn collect_text(mut fragments: FragmentStream) -> Result<String, BackendError> {
    let mut text = String::new();
    while let Some(fragment) = fragments.next().await {
        text.push_str(&fragment?);
    }
    Ok(text)
}

// Split a server-sent-events body into the `data` payload of each event.
// Events may straddle chunk boundaries; `[DONE]` ends the stream early.
pub fn sse_events<S>(
    body: S,
    backend: &'static str,
) -> impl Stream<Item = Result<String, BackendError>> + Send + 'static
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
{
    stream! {
        let mut body = Box::pin(body);
        let mut buffer: Vec<u8> = Vec::new();
        let mut data: Vec<String> = Vec::new();

        while let Some(chunk) = body.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(source) => {
                    yield Err(BackendError::Transport { backend, source });
                    return;
                }
            };
            buffer.extend_from_slice(&chunk);

            while let Some(pos) = buffer.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=pos).collect();
                let line = String::from_utf8_lossy(&line);
                let line = line.trim_end_matches(['\n', '\r']);

                if line.is_empty() {
                    // blank line dispatches the pending event
                    if !data.is_empty() {
                        let event = data.join("\n");
                        data.clear();
                        if event == "[DONE]" {
                            // anything buffered after the marker is discarded
                            return;
                        }
                        yield Ok(event);
                    }
                } else if let Some(value) = line.strip_prefix("data:") {
                    data.push(value.strip_prefix(' ').unwrap_or(value).to_string());
                }
            }
        }

        // body ended without a trailing blank line
        if !buffer.is_empty() {
            let line = String::from_utf8_lossy(&buffer).trim_end_matches(['\n', '\r']).to_string();
            if let Some(value) = line.strip_prefix("data:") {
                data.push(value.strip_prefix(' ').unwrap_or(value).to_string());
            }
        }
        if !data.is_empty() {
            let event = data.join("\n");
            if event != "[DONE]" {
                yield Ok(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn body(chunks: &[&'static str]) -> impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static {
        let chunks: Vec<Result<Bytes, reqwest::Error>> = chunks
            .iter()
            .map(|c| Ok(Bytes::from_static(c.as_bytes())))
            .collect();
        stream::iter(chunks)
    }

    async fn events(chunks: &[&'static str]) -> Vec<String> {
        sse_events(body(chunks), "test")
            .map(|e| e.unwrap())
            .collect()
            .await
    }

    #[tokio::test]
    async fn events_split_across_chunks() {
        let got = events(&["data: {\"a\"", ":1}\n", "\ndata: two\r\n\r\n"]).await;
        assert_eq!(got, vec!["{\"a\":1}".to_string(), "two".to_string()]);
    }

    #[tokio::test]
    async fn done_marker_stops_stream() {
        let got = events(&["data: one\n\ndata: [DONE]\n\ndata: late\n\n"]).await;
        assert_eq!(got, vec!["one".to_string()]);
    }

    #[tokio::test]
    async fn done_marker_drops_unterminated_tail() {
        let got = events(&["data: one\n\ndata: [DONE]\n\n", "data: {\"broken\""]).await;
        assert_eq!(got, vec!["one".to_string()]);
    }

    #[tokio::test]
    async fn trailing_event_without_blank_line() {
        let got = events(&[": comment\n", "data: last"]).await;
        assert_eq!(got, vec!["last".to_string()]);
    }

    #[tokio::test]
    async fn collect_preserves_order() {
        let fragments: FragmentStream = stream::iter(vec![
            Ok("import ".to_string()),
            Ok("React".to_string()),
            Ok(";".to_string()),
        ])
        .boxed();
        assert_eq!(collect_text(fragments).await.unwrap(), "import React;");
    }

    #[tokio::test]
    async fn empty_stream_is_empty_text() {
        let fragments: FragmentStream = stream::empty().boxed();
        assert_eq!(collect_text(fragments).await.unwrap(), "");
        assert!(events(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn collect_stops_at_first_error() {
        let fragments: FragmentStream = stream::iter(vec![
            Ok("partial".to_string()),
            Err(BackendError::QuotaExceeded { backend: "test" }),
        ])
        .boxed();
        assert!(collect_text(fragments).await.unwrap_err().is_quota_exceeded());
    }
}
