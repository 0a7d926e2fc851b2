use std::env;

use jsonwebtoken::EncodingKey;

use crate::errors::AppError;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Offset from UTC used when rendering the record timestamp (KST by default).
    pub utc_offset_hours: i32,
    pub google: GoogleConfig,
}

#[derive(Clone)]
pub struct GoogleConfig {
    pub sheet_id: String,
    pub service_account_email: String,
    /// PEM private key with real newlines.
    pub private_key: String,
    pub token_uri: String,
    pub sheets_api_url: String,
}

// Keeps the private key out of logs.
impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("sheet_id", &self.sheet_id)
            .field("service_account_email", &self.service_account_email)
            .field("private_key", &"<redacted>")
            .field("token_uri", &self.token_uri)
            .field("sheets_api_url", &self.sheets_api_url)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let utc_offset_hours = match env::var("RESERVATION_UTC_OFFSET_HOURS") {
            Ok(v) => v
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|h| (-23..=23).contains(h))
                .ok_or_else(|| {
                    AppError::Config(format!("RESERVATION_UTC_OFFSET_HOURS is invalid: {v}"))
                })?,
            Err(_) => 9,
        };

        let google = GoogleConfig {
            sheet_id: required("GOOGLE_SHEET_ID")?,
            service_account_email: required("GOOGLE_SERVICE_ACCOUNT_EMAIL")?,
            private_key: normalize_private_key(&required("GOOGLE_PRIVATE_KEY")?),
            token_uri: env::var("GOOGLE_TOKEN_URI")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URI.to_string()),
            sheets_api_url: env::var("GOOGLE_SHEETS_API_URL")
                .unwrap_or_else(|_| DEFAULT_SHEETS_API_URL.to_string()),
        };
        google.validate_key()?;

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            utc_offset_hours,
            google,
        })
    }
}

impl GoogleConfig {
    /// Fails when the configured key is not an RSA PEM the signer can use.
    pub fn validate_key(&self) -> Result<(), AppError> {
        EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .map(|_| ())
            .map_err(|e| AppError::Config(format!("GOOGLE_PRIVATE_KEY is not a valid RSA key: {e}")))
    }
}

fn required(name: &str) -> Result<String, AppError> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Config(format!("{name} must be set")))
}

/// Keys supplied through a single-line environment value carry `\n` escapes.
pub fn normalize_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
