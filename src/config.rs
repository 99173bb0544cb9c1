use clap::Parser;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// CLI argument structure, every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "screenshot-codegen")]
#[command(about = "Turns UI screenshots into React/Tailwind components")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    // Gemini credentials (primary + optional backup used on quota errors)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: ApiKey,

    #[arg(long, env = "GEMINI_API_KEY_BACKUP", hide_env_values = true)]
    pub gemini_api_key_backup: Option<ApiKey>,

    // Together credentials
    #[arg(long, env = "TOGETHER_API_KEY", hide_env_values = true)]
    pub together_api_key: ApiKey,

    #[arg(long, env = "TOGETHER_API_KEY_BACKUP", hide_env_values = true)]
    pub together_api_key_backup: Option<ApiKey>,

    // Backend base urls
    #[arg(long, default_value = "https://generativelanguage.googleapis.com")]
    pub gemini_base_url: String,

    #[arg(long, default_value = "https://api.together.xyz")]
    pub together_base_url: String,
}

impl Args {
    pub fn gemini_credentials(&self) -> CredentialPair {
        CredentialPair::new(
            self.gemini_api_key.clone(),
            self.gemini_api_key_backup.clone(),
        )
    }

    pub fn together_credentials(&self) -> CredentialPair {
        CredentialPair::new(
            self.together_api_key.clone(),
            self.together_api_key_backup.clone(),
        )
    }
}

/// A backend secret. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl FromStr for ApiKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Primary and backup key for one backend. Read-only once built.
#[derive(Debug, Clone)]
pub struct CredentialPair {
    primary: ApiKey,
    secondary: Option<ApiKey>,
}

impl CredentialPair {
    pub fn new(primary: ApiKey, secondary: Option<ApiKey>) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &str {
        self.primary.expose()
    }

    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_ref().map(ApiKey::expose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_debug_is_redacted() {
        let pair = CredentialPair::new(ApiKey::new("sk-live-123"), Some(ApiKey::new("sk-backup")));
        let printed = format!("{:?}", pair);
        assert!(!printed.contains("sk-live-123"));
        assert!(!printed.contains("sk-backup"));
        assert_eq!(pair.primary(), "sk-live-123");
        assert_eq!(pair.secondary(), Some("sk-backup"));
    }

    #[test]
    fn args_parse_keys_and_defaults() {
        let args = Args::try_parse_from([
            "screenshot-codegen",
            "--gemini-api-key",
            "g1",
            "--together-api-key",
            "t1",
            "--together-api-key-backup",
            "t2",
        ])
        .unwrap();

        assert_eq!(args.gemini_credentials().primary(), "g1");
        assert_eq!(args.gemini_credentials().secondary(), None);
        assert_eq!(args.together_credentials().secondary(), Some("t2"));
        assert_eq!(args.together_base_url, "https://api.together.xyz");
    }
}
