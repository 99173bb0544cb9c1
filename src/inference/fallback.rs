use std::future::Future;

use crate::config::CredentialPair;
use crate::error::BackendError;
use crate::metrics::CREDENTIAL_FALLBACKS;

/// Run `call` with the primary key. On a quota error, replay it once with the
/// backup key. Any other outcome is returned as is.
///
/// The key is handed to each attempt, nothing shared is re-initialised.
pub async fn with_credential_fallback<'a, T, F, Fut>(
    credentials: &'a CredentialPair,
    backend: &'static str,
    mut call: F,
) -> Result<T, BackendError>
where
    F: FnMut(&'a str) -> Fut,
    Fut: Future<Output = Result<T, BackendError>>,
{
    match call(credentials.primary()).await {
        Err(err) if err.is_quota_exceeded() => {
            let Some(secondary) = credentials.secondary() else {
                tracing::warn!(backend, "quota exceeded and no backup credential configured");
                return Err(err);
            };
            tracing::warn!(backend, "quota exceeded, retrying with backup credential");
            CREDENTIAL_FALLBACKS.with_label_values(&[backend]).inc();
            call(secondary).await
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;
    use std::sync::Mutex;

    fn pair(secondary: Option<&str>) -> CredentialPair {
        CredentialPair::new(ApiKey::new("primary"), secondary.map(ApiKey::new))
    }

    #[tokio::test]
    async fn quota_error_switches_to_backup() {
        let creds = pair(Some("backup"));
        let seen = Mutex::new(Vec::new());

        let result = with_credential_fallback(&creds, "test", |key| {
            seen.lock().unwrap().push(key.to_string());
            async move {
                if key == "primary" {
                    Err(BackendError::QuotaExceeded { backend: "test" })
                } else {
                    Ok(key.len())
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "backup".len());
        assert_eq!(*seen.lock().unwrap(), vec!["primary", "backup"]);
    }

    #[tokio::test]
    async fn other_errors_are_not_retried() {
        let creds = pair(Some("backup"));
        let mut calls = 0;

        let result: Result<(), _> = with_credential_fallback(&creds, "test", |_| {
            calls += 1;
            async {
                Err(BackendError::Http {
                    backend: "test",
                    status: 500,
                    body: "boom".into(),
                })
            }
        })
        .await;

        assert!(matches!(result, Err(BackendError::Http { status: 500, .. })));
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn backup_failure_propagates() {
        let creds = pair(Some("backup"));
        let mut calls = 0;

        let result: Result<(), _> = with_credential_fallback(&creds, "test", |_| {
            calls += 1;
            async { Err(BackendError::QuotaExceeded { backend: "test" }) }
        })
        .await;

        assert!(result.unwrap_err().is_quota_exceeded());
        assert_eq!(calls, 2);
    }

    #[tokio::test]
    async fn missing_backup_keeps_quota_error() {
        let creds = pair(None);
        let mut calls = 0;

        let result: Result<(), _> = with_credential_fallback(&creds, "test", |_| {
            calls += 1;
            async { Err(BackendError::QuotaExceeded { backend: "test" }) }
        })
        .await;

        assert!(result.unwrap_err().is_quota_exceeded());
        assert_eq!(calls, 1);
    }
}
