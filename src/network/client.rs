use chrono::NaiveDate;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{BriefingCard, KeywordsType, Keywords, ScrapRecord, ScrapSection};
use crate::network::endpoint::{BodyKey, Endpoint, HttpMethod, QueryKey};
use crate::network::request::RequestDescriptor;
use crate::scrapbook::group_by_date;

/// Executes [`RequestDescriptor`]s against the Briefing API.
#[derive(Debug, Clone)]
pub struct BriefingClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl BriefingClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves `endpoint` and applies the configured timeout.
    pub fn request(
        &self,
        endpoint: Endpoint,
        method: HttpMethod,
    ) -> Result<RequestDescriptor, ClientError> {
        Ok(endpoint.resolve(method)?.with_timeout(self.config.timeout))
    }

    pub fn url_for(&self, request: &RequestDescriptor) -> Result<Url, ClientError> {
        let raw = format!("{}/{}", self.config.base_url, request.path());
        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Sends the request and returns the raw response body.
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<Vec<u8>, ClientError> {
        let url = self.url_for(request)?;
        debug!(method = %request.method(), %url, "sending request");

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method()), url)
            .timeout(request.timeout());

        if let Some(query) = request.query() {
            builder = builder.query(query);
        }
        if let Some(token) = &self.config.access_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body() {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.to_vec());
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), path = %request.path(), "request failed");
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: &RequestDescriptor,
    ) -> Result<T, ClientError> {
        let payload = self.execute(request).await?;
        Ok(serde_json::from_slice(&payload)?)
    }

    pub async fn fetch_keywords(
        &self,
        date: NaiveDate,
        keyword_type: KeywordsType,
    ) -> Result<Keywords, ClientError> {
        let request = self
            .request(Endpoint::Keywords, HttpMethod::Get)?
            .with_query(QueryKey::Date, date.format("%Y-%m-%d").to_string())
            .with_query(QueryKey::Type, keyword_type.as_str());
        self.execute_json(&request).await
    }

    pub async fn fetch_briefing_card(&self, id: i64) -> Result<BriefingCard, ClientError> {
        let request = self.request(Endpoint::BriefingCard { id }, HttpMethod::Get)?;
        self.execute_json(&request).await
    }

    pub async fn fetch_scraps(&self, member_id: i64) -> Result<Vec<ScrapRecord>, ClientError> {
        let request = self.request(Endpoint::FetchScrap { member_id }, HttpMethod::Get)?;
        self.execute_json(&request).await
    }

    /// Member's scraps grouped into date sections, newest first as served.
    pub async fn fetch_scrapbook(&self, member_id: i64) -> Result<Vec<ScrapSection>, ClientError> {
        let records = self.fetch_scraps(member_id).await?;
        debug!(member_id, count = records.len(), "fetched scraps");
        Ok(group_by_date(records))
    }

    pub async fn add_scrap(&self, member_id: i64, briefing_id: i64) -> Result<(), ClientError> {
        let request = self.request(Endpoint::Scrap, HttpMethod::Post)?.with_body_fields(&[
            (BodyKey::MemberId, member_id),
            (BodyKey::BriefingId, briefing_id),
        ])?;
        self.execute(&request).await?;
        Ok(())
    }

    pub async fn delete_scrap(&self, id: i64, member_id: i64) -> Result<(), ClientError> {
        let request = self.request(Endpoint::DeleteScrap { id, member_id }, HttpMethod::Delete)?;
        self.execute(&request).await?;
        Ok(())
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}
