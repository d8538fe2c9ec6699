//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types returned to callers
//! - `wire.rs`: Raw serde structs: signed payloads and `data` records
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `client.rs`: Sub-client with the HTTP calls for the domain

pub mod balance;
pub mod token;
pub mod transfer;
