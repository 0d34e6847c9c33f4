// SPDX-License-Identifier: MPL-2.0
//! User interface.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes its state, a `Message` type and a `view` function, and the
//! application routes messages back into the owning state.
//!
//! - [`gallery`] - category tabs and project cards
//! - [`slider`] - per-card image slider with timer and swipe handling
//! - [`components`] - small shared widgets
//! - [`notifications`] - toast notifications
//! - [`styles`], [`design_tokens`], [`theming`] - look and feel

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod slider;
pub mod styles;
pub mod theming;
