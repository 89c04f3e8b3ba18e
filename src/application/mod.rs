// SPDX-License-Identifier: MPL-2.0
//! Application layer: port definitions for dependency inversion.

pub mod port;
