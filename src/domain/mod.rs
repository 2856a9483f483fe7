//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs`: rich domain types
//! - `wire.rs`: raw serde structs matching CoinGecko responses
//! - `convert.rs`: total `From` conversions from wire to domain types
//! - `client.rs`: sub-client with HTTP methods and caching (`http` feature)
//!
//! `chart` adds coordinate mapping and pointer interaction; `favorites` adds
//! local persistence and has no wire side.

pub mod chart;
pub mod coin;
pub mod favorites;
pub mod search;
