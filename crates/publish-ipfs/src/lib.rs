//! IPFS content store for Agent Publisher
//!
//! [`IpfsClient`] talks to an IPFS node or pinning gateway over the HTTP RPC
//! API and implements [`publish_core::ContentStore`], so the manifest
//! pipeline can publish documentation and signed envelopes to IPFS.

pub mod client;
pub mod error;

pub use client::{DEFAULT_GATEWAY, IpfsClient};
pub use error::{Error, Result};
