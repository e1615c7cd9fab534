use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::network::endpoint::{BodyKey, HttpMethod, QueryKey};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A fully resolved, transport-ready HTTP call.
///
/// Only [`Endpoint::resolve`](crate::network::Endpoint::resolve) creates one, so
/// `method` is always allowed for the endpoint it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: HttpMethod,
    path: String,
    query: Option<BTreeMap<String, String>>,
    body: Option<Vec<u8>>,
    timeout: Duration,
}

impl RequestDescriptor {
    pub(crate) fn new(method: HttpMethod, path: String) -> Self {
        Self {
            method,
            path,
            query: None,
            body: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&BTreeMap<String, String>> {
        self.query.as_ref()
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn with_query(mut self, key: QueryKey, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.as_str().to_string(), value.into());
        self
    }

    pub fn with_json_body<T: Serialize>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// JSON object body built from integer fields, e.g. `{"memberId":1,"briefingId":2}`.
    pub fn with_body_fields(self, fields: &[(BodyKey, i64)]) -> Result<Self, serde_json::Error> {
        let object: serde_json::Map<String, serde_json::Value> = fields
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), serde_json::Value::from(*value)))
            .collect();
        self.with_json_body(&object)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
