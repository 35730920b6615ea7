// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port` that need nothing from the host.
//!
//! # Available Adapters
//!
//! - [`memory_uri`]: In-process object URI registry (implements [`ObjectUriFactory`])
//!
//! [`ObjectUriFactory`]: crate::application::port::ObjectUriFactory

pub mod memory_uri;

// Re-export main types for convenience
pub use memory_uri::MemoryObjectUris;
