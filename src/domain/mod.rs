// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core alert types with ZERO external dependencies.
//!
//! This module contains pure value objects shared by the controller, the
//! presenter and the diagnostics layer. It depends on nothing but `std`.
//!
//! # Modules
//!
//! - [`alert`]: Alert identity and lifecycle ([`AlertKey`](alert::AlertKey),
//!   [`Severity`](alert::Severity), [`Phase`](alert::Phase))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`ui`]: UI value objects ([`AutoHideDuration`](ui::AutoHideDuration))

pub mod alert;
pub mod diagnostics;
pub mod ui;
