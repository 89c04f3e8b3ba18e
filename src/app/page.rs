// SPDX-License-Identifier: MPL-2.0
//! The manual pages rendered by the shell.
//!
//! Content is fixed at compile time; the shell is about presentation, not
//! about parsing documentation sources.

use crate::ui::highlight::Token;

/// One line of a highlighted code sample.
pub type CodeLine = &'static [(Token, &'static str)];

/// A page of the Larch manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Overview,
    GettingStarted,
    LanguageTour,
    BuildAndInstall,
}

impl Page {
    /// All pages, in navigation order.
    pub const ALL: [Page; 4] = [
        Page::Overview,
        Page::GettingStarted,
        Page::LanguageTour,
        Page::BuildAndInstall,
    ];

    /// Page title, also used as the navigation link label.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::GettingStarted => "Getting Started",
            Page::LanguageTour => "Language Tour",
            Page::BuildAndInstall => "Build & Install",
        }
    }

    /// Body paragraphs.
    #[must_use]
    pub fn body(self) -> &'static [&'static str] {
        match self {
            Page::Overview => &[
                "Larch is a small statically typed language that compiles to a \
                 portable command list. It trades generality for predictability: \
                 no runtime allocation, no reflection, and a compiler small \
                 enough to read in an afternoon.",
                "This manual covers installation, the core language, and the \
                 build tooling. Use the navigation panel to jump between \
                 chapters; your color-scheme choice is remembered across \
                 sessions.",
            ],
            Page::GettingStarted => &[
                "Install the toolchain, create a project directory, and put the \
                 following program in hello.lrc. Running `larch build` produces \
                 a command list next to the source file.",
                "The compiler reports errors with the offending line and a \
                 caret; warnings never stop a build.",
            ],
            Page::LanguageTour => &[
                "Functions are declared with def and must annotate parameter \
                 and return types. Integers, booleans, and strings are the only \
                 scalar types; arrays are fixed-length.",
                "Control flow is expression-oriented: if and while return the \
                 value of their last statement, and early return is allowed \
                 anywhere in a function body.",
            ],
            Page::BuildAndInstall => &[
                "Release archives ship a single static binary per platform. \
                 Building from source needs only a C compiler and make; there \
                 are no further dependencies.",
                "The test suite runs with `make check` and finishes in under a \
                 minute on modest hardware.",
            ],
        }
    }

    /// Highlighted code sample, if this page has one.
    #[must_use]
    pub fn code_sample(self) -> Option<&'static [CodeLine]> {
        match self {
            Page::GettingStarted => Some(HELLO_SAMPLE),
            Page::LanguageTour => Some(TOUR_SAMPLE),
            Page::Overview | Page::BuildAndInstall => None,
        }
    }
}

const HELLO_SAMPLE: &[CodeLine] = &[
    &[(Token::Comment, "# hello.lrc")],
    &[
        (Token::Keyword, "def"),
        (Token::Ident, " main"),
        (Token::Punct, "() -> "),
        (Token::Keyword, "void"),
        (Token::Punct, ":"),
    ],
    &[
        (Token::Ident, "    print"),
        (Token::Punct, "("),
        (Token::Literal, "\"hello, larch\""),
        (Token::Punct, ")"),
    ],
];

const TOUR_SAMPLE: &[CodeLine] = &[
    &[
        (Token::Keyword, "def"),
        (Token::Ident, " fib"),
        (Token::Punct, "("),
        (Token::Ident, "n"),
        (Token::Punct, ": "),
        (Token::Keyword, "int"),
        (Token::Punct, ") -> "),
        (Token::Keyword, "int"),
        (Token::Punct, ":"),
    ],
    &[
        (Token::Keyword, "    if"),
        (Token::Ident, " n"),
        (Token::Punct, " < "),
        (Token::Literal, "2"),
        (Token::Punct, ": "),
        (Token::Keyword, "return"),
        (Token::Ident, " n"),
    ],
    &[
        (Token::Keyword, "    return"),
        (Token::Ident, " fib"),
        (Token::Punct, "("),
        (Token::Ident, "n"),
        (Token::Punct, " - "),
        (Token::Literal, "1"),
        (Token::Punct, ") + "),
        (Token::Ident, "fib"),
        (Token::Punct, "("),
        (Token::Ident, "n"),
        (Token::Punct, " - "),
        (Token::Literal, "2"),
        (Token::Punct, ")"),
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_title_and_body() {
        for page in Page::ALL {
            assert!(!page.title().is_empty());
            assert!(!page.body().is_empty());
        }
    }

    #[test]
    fn default_page_is_overview() {
        assert_eq!(Page::default(), Page::Overview);
    }

    #[test]
    fn code_samples_have_no_empty_lines() {
        for page in Page::ALL {
            if let Some(sample) = page.code_sample() {
                assert!(sample.iter().all(|line| !line.is_empty()));
            }
        }
    }
}
