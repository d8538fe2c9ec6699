//! HTTP client layer: `OceanHttp`, one method per endpoint.

pub mod client;
pub mod retry;

pub use client::OceanHttp;
pub use retry::QueryRetry;
