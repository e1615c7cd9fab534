use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::ResolveError;
use crate::network::request::RequestDescriptor;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(format!("unknown HTTP method: {}", other)),
        }
    }
}

/// A logical operation on the Briefing API, independent of the HTTP verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Root,
    Keywords,
    BriefingCard { id: i64 },
    /// Chat collection.
    Chattings,
    /// A single chat.
    Chatting { id: i64 },
    Scrap,
    FetchScrap { member_id: i64 },
    DeleteScrap { id: i64, member_id: i64 },
}

impl Endpoint {
    /// Every variant once, with placeholder ids. Handy for exhaustive checks.
    pub fn all_variants() -> Vec<Endpoint> {
        vec![
            Endpoint::Root,
            Endpoint::Keywords,
            Endpoint::BriefingCard { id: 1 },
            Endpoint::Chattings,
            Endpoint::Chatting { id: 1 },
            Endpoint::Scrap,
            Endpoint::FetchScrap { member_id: 1 },
            Endpoint::DeleteScrap { id: 1, member_id: 1 },
        ]
    }

    /// `None` gives the collection form, `Some(id)` the single chat.
    pub fn chattings(id: Option<i64>) -> Endpoint {
        match id {
            Some(id) => Endpoint::Chatting { id },
            None => Endpoint::Chattings,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Root => "root",
            Endpoint::Keywords => "keywords",
            Endpoint::BriefingCard { .. } => "briefingCard",
            Endpoint::Chattings | Endpoint::Chatting { .. } => "chattings",
            Endpoint::Scrap => "scrap",
            Endpoint::FetchScrap { .. } => "fetchScrap",
            Endpoint::DeleteScrap { .. } => "deleteScrap",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Endpoint::Root => "",
            Endpoint::Keywords => "briefings/temp",
            Endpoint::BriefingCard { .. } => "briefings/{id}",
            Endpoint::Chattings => "chattings",
            Endpoint::Chatting { .. } => "chattings/{id}",
            Endpoint::Scrap => "scraps/briefings",
            Endpoint::FetchScrap { .. } => "scraps/briefings/members/{memberId}",
            Endpoint::DeleteScrap { .. } => "scraps/briefings/{id}/members/{memberId}",
        }
    }

    pub fn allowed_methods(&self) -> &'static [HttpMethod] {
        match self {
            Endpoint::Root => &[HttpMethod::Get],
            Endpoint::Keywords => &[HttpMethod::Get, HttpMethod::Post],
            Endpoint::BriefingCard { .. } => &[HttpMethod::Get],
            Endpoint::Chattings | Endpoint::Chatting { .. } => {
                &[HttpMethod::Get, HttpMethod::Post]
            }
            Endpoint::Scrap => &[HttpMethod::Post],
            Endpoint::FetchScrap { .. } => &[HttpMethod::Get],
            Endpoint::DeleteScrap { .. } => &[HttpMethod::Delete],
        }
    }

    pub fn allows(&self, method: HttpMethod) -> bool {
        self.allowed_methods().contains(&method)
    }

    /// Values for the placeholders of [`Endpoint::template`].
    pub fn parameters(&self) -> Vec<(&'static str, i64)> {
        match *self {
            Endpoint::BriefingCard { id } | Endpoint::Chatting { id } => vec![("id", id)],
            Endpoint::FetchScrap { member_id } => vec![("memberId", member_id)],
            Endpoint::DeleteScrap { id, member_id } => {
                vec![("id", id), ("memberId", member_id)]
            }
            Endpoint::Root | Endpoint::Keywords | Endpoint::Chattings | Endpoint::Scrap => {
                Vec::new()
            }
        }
    }

    pub fn path(&self) -> Result<String, ResolveError> {
        fill_template(self.template(), &self.parameters())
    }

    pub fn resolve(&self, method: HttpMethod) -> Result<RequestDescriptor, ResolveError> {
        if !self.allows(method) {
            return Err(ResolveError::MethodNotAllowed {
                endpoint: self.name(),
                method,
            });
        }

        let path = self.path()?;
        tracing::trace!(endpoint = self.name(), %method, %path, "resolved endpoint");
        Ok(RequestDescriptor::new(method, path))
    }
}

/// Substitutes `{name}` placeholders with decimal values from `params`.
pub fn fill_template(template: &str, params: &[(&str, i64)]) -> Result<String, ResolveError> {
    let mut missing = None;

    let filled = PLACEHOLDER.replace_all(template, |caps: &Captures| {
        let name = &caps[1];
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => value.to_string(),
            None => {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(name) => Err(ResolveError::MissingParameter {
            template: template.to_string(),
            name,
        }),
        None => Ok(filled.into_owned()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Date,
    Type,
}

impl QueryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::Date => "date",
            QueryKey::Type => "type",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKey {
    MemberId,
    BriefingId,
}

impl BodyKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKey::MemberId => "memberId",
            BodyKey::BriefingId => "briefingId",
        }
    }
}
