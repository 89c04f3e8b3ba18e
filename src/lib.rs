// SPDX-License-Identifier: MPL-2.0
//! `docshell` is a small documentation browser shell built with the Iced GUI
//! framework.
//!
//! It renders a fixed set of manual pages for the Larch language and
//! demonstrates two reusable pieces of UI plumbing: a persistent color-scheme
//! preference (`auto` / `light` / `dark`) that keeps every selector control in
//! sync, and an animated slide-in navigation drawer for narrow windows.

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
