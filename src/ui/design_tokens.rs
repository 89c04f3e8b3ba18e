// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Tokens are designed to be consistent across components; maintain the
//! ratios (e.g. `MD = XS * 2`) when adjusting them.

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE: f32 = 28.0;
    pub const HEADING: f32 = 20.0;
    pub const BODY: f32 = 16.0;
    pub const CODE: f32 = 14.0;
    pub const GLYPH: f32 = 18.0;
}

// ============================================================================
// Layout
// ============================================================================

pub mod layout {
    /// Window width below which the compact (drawer) layout is used.
    pub const COMPACT_BREAKPOINT: f32 = 700.0;

    /// Width of the persistent sidebar in the wide layout.
    pub const SIDEBAR_WIDTH: f32 = 240.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}
