// SPDX-License-Identifier: MPL-2.0
//! Application layer - collaborator contracts.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`ui`) drives the ports through controllers
//!
//! # Example
//!
//! ```ignore
//! use panel_lens::application::port::{AttachmentSource, ObjectUriFactory};
//!
//! // The host implements the port traits over its REST client and platform
//! struct RestAttachments { /* ... */ }
//! impl AttachmentSource for RestAttachments { /* ... */ }
//! ```

pub mod port;
