mod client;
mod endpoint;
mod request;

pub use client::BriefingClient;
pub use endpoint::{BodyKey, Endpoint, HttpMethod, QueryKey, fill_template};
pub use request::{DEFAULT_TIMEOUT, RequestDescriptor};
