use super::{StoreError, ThemeStore};
use crate::common::HttpError;
use crate::model::{NewThemeRow, ThemeColors, ThemeRow};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Media type asking PostgREST for exactly one JSON object instead of an array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// PostgREST error code for a single-object request that did not match exactly one row.
const NO_ROWS_CODE: &str = "PGRST116";

/// Connection settings for the hosted theme table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestStoreConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`
    pub url: String,
    /// Public (anon) API key sent as both `apikey` and bearer token
    pub api_key: String,
    pub table: String,
    pub timeout_secs: u64,
}

impl Default for RestStoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: "themes".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
}

#[derive(Serialize)]
struct ThemePatch<'a> {
    colors: &'a ThemeColors,
    is_active: bool,
}

#[derive(Serialize)]
struct ActivePatch {
    is_active: bool,
}

/// [`ThemeStore`] backed by the hosted database's PostgREST endpoint.
pub struct RestThemeStore {
    config: RestStoreConfig,
    endpoint: String,
    http_client: reqwest::Client,
}

impl RestThemeStore {
    pub fn new(config: RestStoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|e| {
            HttpError::ClientCreation {
                reason: format!("invalid API key header: {e}"),
            }
        })?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(|e| {
            HttpError::ClientCreation {
                reason: format!("invalid authorization header: {e}"),
            }
        })?;
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HttpError::ClientCreation {
                reason: e.to_string(),
            })?;

        let endpoint = table_endpoint(&config.url, &config.table);
        log::debug!("Theme store endpoint: {endpoint}");

        Ok(Self {
            config,
            endpoint,
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), StoreError> {
        let response = request.send().await.map_err(|e| self.http_error(e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.http_error(e))?;
        Ok((status, body))
    }

    fn http_error(&self, err: reqwest::Error) -> StoreError {
        HttpError::from_reqwest(&self.endpoint, self.config.timeout_secs, err).into()
    }

    async fn fetch_single(&self, filter: (&str, String)) -> Result<Option<ThemeRow>, StoreError> {
        let query = [("select", "*".to_string()), (filter.0, filter.1)];
        let request = self
            .http_client
            .get(&self.endpoint)
            .query(&query)
            .header(ACCEPT, SINGLE_OBJECT);
        let (status, body) = self.send(request).await?;
        parse_single_row(status, &body)
    }
}

#[async_trait]
impl ThemeStore for RestThemeStore {
    async fn read_active_theme(&self) -> Result<Option<ThemeRow>, StoreError> {
        self.fetch_single(("is_active", "eq.true".to_string())).await
    }

    async fn clear_all_active(&self) -> Result<(), StoreError> {
        let request = self
            .http_client
            .patch(&self.endpoint)
            .query(&[("is_active", "eq.true")])
            .header("Prefer", "return=minimal")
            .json(&ActivePatch { is_active: false });
        let (status, body) = self.send(request).await?;
        ensure_success(status, &body)
    }

    async fn find_theme_by_name(&self, name: &str) -> Result<Option<ThemeRow>, StoreError> {
        // Names are not unique in the table; the oldest row wins
        let request = self.http_client.get(&self.endpoint).query(&[
            ("select", "*".to_string()),
            ("name", format!("eq.{name}")),
            ("order", "created_at.asc".to_string()),
            ("limit", "1".to_string()),
        ]);
        let (status, body) = self.send(request).await?;
        parse_first_row(status, &body)
    }

    async fn update_theme(
        &self,
        id: &str,
        colors: &ThemeColors,
        active: bool,
    ) -> Result<(), StoreError> {
        let request = self
            .http_client
            .patch(&self.endpoint)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(&ThemePatch {
                colors,
                is_active: active,
            });
        let (status, body) = self.send(request).await?;
        ensure_success(status, &body)
    }

    async fn insert_theme(&self, row: NewThemeRow) -> Result<ThemeRow, StoreError> {
        let request = self
            .http_client
            .post(&self.endpoint)
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(&row);
        let (status, body) = self.send(request).await?;
        match parse_single_row(status, &body)? {
            Some(stored) => Ok(stored),
            None => Err(StoreError::Api {
                status,
                code: NO_ROWS_CODE.to_string(),
                message: "insert returned no row".to_string(),
            }),
        }
    }

    async fn list_themes(&self) -> Result<Vec<ThemeRow>, StoreError> {
        let request = self
            .http_client
            .get(&self.endpoint)
            .query(&[("select", "*"), ("order", "created_at.asc")]);
        let (status, body) = self.send(request).await?;
        ensure_success(status, &body)?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn table_endpoint(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map a single-object response. A "no rows" answer becomes `Ok(None)`.
fn parse_single_row(status: u16, body: &str) -> Result<Option<ThemeRow>, StoreError> {
    if is_success(status) {
        return Ok(Some(serde_json::from_str(body)?));
    }

    let error: Option<PostgrestError> = serde_json::from_str(body).ok();
    if let Some(err) = &error {
        if is_no_rows(status, err) {
            return Ok(None);
        }
    }
    Err(api_error(status, body, error))
}

/// Map an array response onto its first row.
fn parse_first_row(status: u16, body: &str) -> Result<Option<ThemeRow>, StoreError> {
    ensure_success(status, body)?;
    let rows: Vec<ThemeRow> = serde_json::from_str(body)?;
    Ok(rows.into_iter().next())
}

fn ensure_success(status: u16, body: &str) -> Result<(), StoreError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(api_error(status, body, serde_json::from_str(body).ok()))
    }
}

/// PGRST116 covers both "no rows" and "several rows"; only the former is a miss.
fn is_no_rows(status: u16, err: &PostgrestError) -> bool {
    status == 406
        && err.code.as_deref() == Some(NO_ROWS_CODE)
        && err
            .details
            .as_deref()
            .is_none_or(|details| details.contains(" 0 rows"))
}

fn api_error(status: u16, body: &str, parsed: Option<PostgrestError>) -> StoreError {
    match parsed {
        Some(err) => StoreError::Api {
            status,
            code: err.code.unwrap_or_default(),
            message: err.message.unwrap_or_default(),
        },
        None => StoreError::Api {
            status,
            code: String::new(),
            message: body.chars().take(200).collect(),
        },
    }
}
