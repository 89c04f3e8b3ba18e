// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across the application.
//!
//! These modules contain pure types and functions with no Iced or platform
//! dependencies, so they can be tested without a running UI.

pub mod scheme;
