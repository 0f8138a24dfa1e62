//! PostgREST client
//!
//! Thin wrapper around a shared `reqwest::Client`. Every request carries the
//! project key both as `apikey` and as a bearer token.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_RANGE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use topsaas_core::Settings;
use url::Url;

use super::error::GatewayError;
use super::query::TableQuery;

/// Path of the REST endpoint below the project URL
const REST_PATH: &str = "rest/v1";

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Gateway client, cheap to clone
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: Client,
    rest_base: String,
}

impl GatewayClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let url = Url::parse(base_url)
            .map_err(|e| GatewayError::Config(format!("invalid base url '{}': {}", base_url, e)))?;
        let rest_base = format!("{}/{}", url.as_str().trim_end_matches('/'), REST_PATH);

        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| GatewayError::Config("api key is not a valid header value".into()))?;
        key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| GatewayError::Config("api key is not a valid header value".into()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, rest_base })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, GatewayError> {
        Self::new(
            &settings.supabase_url,
            &settings.supabase_key,
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    /// `{base}/rest/v1/{table}`
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_base, table)
    }

    /// Run the query and decode the returned JSON array.
    pub async fn fetch_rows<T: DeserializeOwned>(
        &self,
        query: &TableQuery,
    ) -> Result<Vec<T>, GatewayError> {
        let table = query.table_name();
        tracing::debug!(table, params = ?query.query_pairs(), "gateway select");

        let response = self
            .http
            .get(self.table_url(table))
            .query(&query.query_pairs())
            .send()
            .await?;
        let response = check_status(response).await?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| GatewayError::Decode {
            table,
            reason: e.to_string(),
        })
    }

    /// Exact row count for the query, without fetching rows.
    pub async fn count(&self, query: &TableQuery) -> Result<u64, GatewayError> {
        let table = query.table_name();
        tracing::debug!(table, params = ?query.query_pairs(), "gateway count");

        let response = self
            .http
            .head(self.table_url(table))
            .query(&query.query_pairs())
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let response = check_status(response).await?;

        match response.headers().get(CONTENT_RANGE) {
            Some(value) => {
                let value = value
                    .to_str()
                    .map_err(|_| GatewayError::ContentRange("<non-ascii>".into()))?;
                parse_content_range_total(value)
            }
            None => Ok(0),
        }
    }
}

/// Turn non-2xx responses into `GatewayError::Status`.
async fn check_status(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                body
            }
        });

    Err(GatewayError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Total from a `Content-Range` value such as `0-19/100` or `*/0`.
///
/// An unknown total (`*`) counts as zero.
pub fn parse_content_range_total(value: &str) -> Result<u64, GatewayError> {
    let (_, total) = value
        .trim()
        .rsplit_once('/')
        .ok_or_else(|| GatewayError::ContentRange(value.to_string()))?;

    if total == "*" {
        return Ok(0);
    }

    total
        .parse()
        .map_err(|_| GatewayError::ContentRange(value.to_string()))
}
