//! # Ocean SDK
//!
//! A Rust client for the Ocean token-issuance service.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Newtypes, response envelope, domain models, errors
//! 2. **Signing**: Wallets + canonicalize/sign/verify of request payloads
//! 3. **HTTP API**: `OceanHttp`, one method per endpoint
//! 4. **High-Level Client**: `OceanClient` with nested sub-clients and batch fan-out
//! 5. **Ambient**: TOML configuration and `tracing` sink setup
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ocean_sdk::prelude::*;
//!
//! let client = OceanClient::builder()
//!     .base_url("http://127.0.0.1:4000")
//!     .build()?;
//!
//! let owner = Wallet::generate();
//! let token_id = client.tokens().issue(&owner, "OCE", "10000".parse()?).await?;
//! let balance = client.balances().get(owner.address()).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and the response envelope.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and endpoint paths.
pub mod network;

// ── Layer 2: Signing ─────────────────────────────────────────────────────────

/// Wallets and signed request envelopes.
pub mod signing;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client and opt-in query retry.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `OceanClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

/// Bounded concurrent fan-out over many wallets.
#[cfg(feature = "http")]
pub mod batch;

// ── Layer 5: Ambient ─────────────────────────────────────────────────────────

/// TOML configuration.
pub mod config;

/// Log level / sink configuration and subscriber setup.
pub mod logging;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Address, Amount, Envelope, TokenId, TxId};

    // Domain types
    pub use crate::domain::balance::Balance;
    pub use crate::domain::token::TokenInfo;
    pub use crate::domain::transfer::TransactionInfo;

    // Signing
    pub use crate::signing::{SignedEnvelope, Wallet};

    // Errors
    pub use crate::error::{HttpError, SdkError, SigningError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Config + logging
    pub use crate::config::OceanConfig;
    pub use crate::logging::{LogConfig, LogLevel};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::batch::{TransferOrder, TransferOutcome};
    #[cfg(feature = "http")]
    pub use crate::client::{
        BalancesClient, OceanClient, OceanClientBuilder, TokensClient, TransfersClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::QueryRetry;
}
