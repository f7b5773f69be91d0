// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`BufferCapacity`]: Capacity for the alert event buffer

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};
