//! Network core of the Briefing news client: endpoint resolution, API models,
//! scrapbook grouping and a thin HTTP transport.

pub mod config;
pub mod error;
pub mod models;
pub mod network;
pub mod scrapbook;

pub use config::ClientConfig;
pub use error::{ClientError, ConfigError, ResolveError};
pub use models::{BriefingCategory, KeywordsType, ScrapRecord, ScrapSection};
pub use network::{BriefingClient, Endpoint, HttpMethod, RequestDescriptor};
pub use scrapbook::{flatten, group_by_date};
