// SPDX-License-Identifier: MPL-2.0
//! Code-highlight palettes for the embedded samples.
//!
//! The dark palette is one of the two dark-style resources controlled by the
//! color-scheme preference (the other being the widget theme). Both follow
//! the same activation condition, see [`crate::domain::scheme`].

use iced::Color;

/// Syntactic category of a code span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Keyword,
    Ident,
    Literal,
    Comment,
    Punct,
}

/// Colors used to render a code sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightPalette {
    pub background: Color,
    pub keyword: Color,
    pub ident: Color,
    pub literal: Color,
    pub comment: Color,
    pub punct: Color,
}

impl HighlightPalette {
    /// Light palette, active when the dark-highlight resource is inactive.
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb(0.96, 0.96, 0.94),
            keyword: Color::from_rgb(0.00, 0.40, 0.00),
            ident: Color::from_rgb(0.10, 0.10, 0.10),
            literal: Color::from_rgb(0.60, 0.10, 0.10),
            comment: Color::from_rgb(0.45, 0.45, 0.45),
            punct: Color::from_rgb(0.25, 0.25, 0.25),
        }
    }

    /// Dark palette, active when the dark-highlight resource is active.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb(0.12, 0.12, 0.13),
            keyword: Color::from_rgb(0.55, 0.80, 0.55),
            ident: Color::from_rgb(0.90, 0.90, 0.88),
            literal: Color::from_rgb(0.90, 0.60, 0.50),
            comment: Color::from_rgb(0.55, 0.55, 0.55),
            punct: Color::from_rgb(0.75, 0.75, 0.75),
        }
    }

    /// Selects a palette from the dark-highlight resource's active state.
    #[must_use]
    pub fn for_activation(dark_active: bool) -> Self {
        if dark_active {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Returns the color for a token category.
    #[must_use]
    pub fn color(&self, token: Token) -> Color {
        match token {
            Token::Keyword => self.keyword,
            Token::Ident => self.ident,
            Token::Literal => self.literal,
            Token::Comment => self.comment,
            Token::Punct => self.punct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_selects_matching_palette() {
        assert_eq!(HighlightPalette::for_activation(true), HighlightPalette::dark());
        assert_eq!(
            HighlightPalette::for_activation(false),
            HighlightPalette::light()
        );
    }

    #[test]
    fn light_palette_has_light_background() {
        assert!(HighlightPalette::light().background.r > 0.9);
    }

    #[test]
    fn dark_palette_has_dark_background() {
        assert!(HighlightPalette::dark().background.r < 0.2);
    }

    #[test]
    fn every_token_maps_to_a_color() {
        let palette = HighlightPalette::dark();
        for token in [
            Token::Keyword,
            Token::Ident,
            Token::Literal,
            Token::Comment,
            Token::Punct,
        ] {
            // Color lookup must be total; grab the value to prove it.
            let _ = palette.color(token);
        }
    }
}
