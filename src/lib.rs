// SPDX-License-Identifier: MPL-2.0
//! `panel_lens` is the headless interaction layer behind floating entity
//! panels and their attachment previews.
//!
//! It provides the drag/resize geometry of floating panels, an attachment
//! preview controller with a leak-free object URI cache, image zoom/pan,
//! PDF paging, a drop-zone admission filter and persisted layout settings.
//! Rendering and transport are left to the host through the traits in
//! [`application::port`].

#![doc(html_root_url = "https://docs.rs/panel_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
