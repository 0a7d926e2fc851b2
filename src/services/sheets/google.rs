use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{SheetsError, SpreadsheetStore};
use crate::config::GoogleConfig;

const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Appends rows to the first worksheet of a Google spreadsheet using a
/// service account. Every call authenticates and resolves the sheet anew.
pub struct GoogleSheetsStore {
    config: GoogleConfig,
    client: reqwest::Client,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceAccountClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetMetadata>,
}

#[derive(Deserialize)]
struct SheetMetadata {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
}

impl GoogleSheetsStore {
    pub fn new(config: &GoogleConfig) -> Self {
        Self {
            config: config.clone(),
            client: reqwest::Client::new(),
        }
    }

    fn sign_assertion(&self) -> Result<String, SheetsError> {
        let iat = Utc::now().timestamp();
        let claims = ServiceAccountClaims {
            iss: self.config.service_account_email.clone(),
            scope: SPREADSHEETS_SCOPE.to_string(),
            aud: self.config.token_uri.clone(),
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };
        let key = EncodingKey::from_rsa_pem(self.config.private_key.as_bytes())?;
        Ok(encode(&Header::new(Algorithm::RS256), &claims, &key)?)
    }

    async fn access_token(&self) -> Result<String, SheetsError> {
        let assertion = self.sign_assertion()?;
        let request = self
            .client
            .post(&self.config.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())]);

        let token: TokenResponse = send_json("token endpoint", request).await?;
        Ok(token.access_token)
    }

    async fn first_sheet_title(&self, token: &str) -> Result<String, SheetsError> {
        let url = self.spreadsheet_url(&[])?;
        let request = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(&[("fields", "sheets.properties")]);

        let metadata: SpreadsheetMetadata = send_json("spreadsheet metadata", request).await?;
        metadata
            .sheets
            .into_iter()
            .next()
            .map(|s| s.properties.title)
            .ok_or(SheetsError::NoSheets)
    }

    fn spreadsheet_url(&self, tail: &[&str]) -> Result<Url, SheetsError> {
        let mut url = Url::parse(&self.config.sheets_api_url)
            .map_err(|e| SheetsError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::Url(self.config.sheets_api_url.clone()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.config.sheet_id.as_str()])
            .extend(tail);
        Ok(url)
    }
}

#[async_trait]
impl SpreadsheetStore for GoogleSheetsStore {
    async fn append_row(&self, row: &[String]) -> Result<(), SheetsError> {
        let token = self.access_token().await?;
        let title = self.first_sheet_title(&token).await?;
        let target = format!("{}:append", a1_range(&title));
        let url = self.spreadsheet_url(&["values", target.as_str()])?;

        let request = self
            .client
            .post(url)
            .bearer_auth(&token)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "OVERWRITE"),
            ])
            .json(&json!({
                "majorDimension": "ROWS",
                "values": [row],
            }));

        let _: serde_json::Value = send_json("values append", request).await?;
        tracing::info!(sheet = %title, "appended reservation row");
        Ok(())
    }
}

/// Top-left cell of a sheet in A1 notation, with the title quoted.
fn a1_range(title: &str) -> String {
    format!("'{}'!A1", title.replace('\'', "''"))
}

async fn send_json<T: DeserializeOwned>(
    endpoint: &'static str,
    request: RequestBuilder,
) -> Result<T, SheetsError> {
    let resp = request
        .send()
        .await
        .map_err(|source| SheetsError::Request { endpoint, source })?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SheetsError::Rejected {
            endpoint,
            status: status.as_u16(),
            body,
        });
    }

    resp.json()
        .await
        .map_err(|source| SheetsError::Request { endpoint, source })
}
