// SPDX-License-Identifier: MPL-2.0
//! `alert_queue` coordinates transient snackbar alerts shown one at a time.
//!
//! Producers enqueue messages; a controller keeps them in arrival order,
//! exposes the front one to the view and only releases it once the view has
//! finished hiding it. An injectable scope lets any part of a UI tree reach
//! the same queue without threading the controller through every call.

#![doc(html_root_url = "https://docs.rs/alert_queue/0.1.0")]

pub mod alert;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
