//! Network URL constants for the Ocean SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Path prefix shared by every endpoint.
pub const API_PREFIX: &str = "/ocean/v1";

/// Endpoint paths, relative to [`API_PREFIX`].
pub mod paths {
    pub const ISSUE_TOKEN: &str = "issueToken";
    pub const TRANSFER: &str = "transfer";
    pub const QUERY_TOKEN: &str = "queryToken";
    pub const QUERY_BALANCE: &str = "queryBalance";
    pub const QUERY_TX: &str = "queryTx";
}
