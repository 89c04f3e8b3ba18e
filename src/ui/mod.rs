// SPDX-License-Identifier: MPL-2.0
//! UI components and styling for the documentation shell.

pub mod design_tokens;
pub mod highlight;
pub mod nav_drawer;
pub mod sidebar;
pub mod theme_preference;
