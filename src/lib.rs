// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a desktop portfolio built with the Iced GUI framework.
//!
//! It loads a JSON list of projects, groups them by category behind a row
//! of tabs, and shows one card per project with a static picture or an
//! auto-advancing image slider. A header button saves the author's CV.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod media;
pub mod platform;
pub mod resume;
pub mod ui;
