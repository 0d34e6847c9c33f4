// SPDX-License-Identifier: MPL-2.0
//! Reusable widgets shared by several views.
//!
//! - [`picture`] - fixed-height image frame with loading/failure placeholder

pub mod picture;
