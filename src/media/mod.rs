// SPDX-License-Identifier: MPL-2.0
//! Image handles for card media.
//!
//! Local files are handed to Iced by path and decoded by the renderer.
//! Remote images are downloaded once, kept as encoded bytes in a bounded LRU
//! cache, and shown as placeholders until they arrive.

pub mod remote;

pub use remote::{fetch, ImageStore, Preview};
