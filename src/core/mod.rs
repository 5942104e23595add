//! Core components of the `closingbell` client.
//!
//! This module contains the foundational building blocks of the library:
//!
//! - The main [`CbClient`], its builder and transport retry policy.
//! - The primary [`CbError`] type.
//! - Internal networking helpers shared by the provider modules.

/// The main client, builder and transport configuration.
pub mod client;
/// The primary error type for the crate.
pub mod error;
pub(crate) mod net;

pub use client::{Backoff, CbClient, CbClientBuilder, RetryConfig};
pub use error::CbError;
