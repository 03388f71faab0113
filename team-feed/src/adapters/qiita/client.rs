//! Qiita:Team API client implementation
//!
//! See https://qiita.com/api/v2/docs#get-apiv2items

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, ETAG};
use reqwest::Client;

use crate::domain::entities::ItemRecord;
use crate::domain::ports::{ItemsClient, ListItemsResponse};
use crate::error::QiitaError;

/// HTTP client for the Qiita:Team items endpoint
pub struct QiitaClientImpl {
    http: Client,
    base_url: String,
}

impl QiitaClientImpl {
    pub fn new(
        base_url: &str,
        access_token: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, QiitaError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", access_token))
                .map_err(|_| QiitaError::InvalidToken)?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v2{}", self.base_url, path)
    }
}

#[async_trait]
impl ItemsClient for QiitaClientImpl {
    async fn list_items(&self, per_page: Option<u32>) -> Result<ListItemsResponse, QiitaError> {
        let mut request = self.http.get(self.api_url("/items"));
        if let Some(per_page) = per_page {
            request = request.query(&[("per_page", per_page)]);
        }

        let response = request.send().await?;
        handle_items_response(response).await
    }
}

async fn handle_items_response(
    response: reqwest::Response,
) -> Result<ListItemsResponse, QiitaError> {
    let status = response.status().as_u16();
    let etag = response
        .headers()
        .get(ETAG)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    if status != 200 {
        return Ok(ListItemsResponse {
            status,
            etag,
            items: Vec::new(),
        });
    }

    let items: Vec<ItemRecord> = response
        .json()
        .await
        .map_err(|e| QiitaError::Deserialization(e.to_string()))?;

    Ok(ListItemsResponse {
        status,
        etag,
        items,
    })
}
