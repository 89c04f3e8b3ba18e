// SPDX-License-Identifier: MPL-2.0
//! Slide-in navigation drawer for the compact layout.
//!
//! The drawer is a two-state machine (`closed`, the initial state, and
//! `open`) with a single transition: [`Message::Toggle`]. Three triggers
//! close it: the explicit toggle control, activating a link inside the menu
//! (close-on-navigate), and a pointer press on the content region outside the
//! drawer (a no-op when already closed). The menu region reports link
//! activations as one [`Message::LinkActivated`] carrying the origin link, so
//! the handler stays correct however the menu contents change.
//!
//! Presentation is a pure function of the state: the target offset is `0`
//! when open and `-(PANEL_WIDTH + GUTTER)` when closed, with the transition
//! animated by [`slide::Slide`]. The state is never persisted; every launch
//! starts closed.

pub mod slide;

use crate::app::page::Page;
use crate::domain::scheme::ColorSchemeMode;
use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{button, container, pick_list, Column, Container, Text};
use iced::{Border, Element, Length, Theme};
use slide::Slide;
use std::time::Instant;

/// Width of the drawer panel.
pub const PANEL_WIDTH: f32 = 260.0;

/// Extra off-screen distance beyond the panel width when hidden.
pub const GUTTER: f32 = 20.0;

/// Offset of the fully hidden panel.
pub const HIDDEN_OFFSET: f32 = -(PANEL_WIDTH + GUTTER);

/// Toggle-control glyph while the drawer is open.
pub const CLOSE_GLYPH: &str = "\u{2715}";

/// Toggle-control glyph while the drawer is closed.
pub const OPEN_GLYPH: &str = "\u{2630}";

/// Drawer state: expansion flag plus the animated offset tracking it.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    expanded: bool,
    slide: Slide,
}

impl State {
    /// A closed drawer, resting fully off-screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expanded: false,
            slide: Slide::settled(HIDDEN_OFFSET),
        }
    }

    /// Returns `true` while the drawer is open.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flips the state and retargets the slide from its current position.
    pub fn toggle(&mut self, now: Instant) {
        self.expanded = !self.expanded;
        let target = if self.expanded { 0.0 } else { HIDDEN_OFFSET };
        self.slide = self.slide.retarget(target, now);
    }

    /// The panel's horizontal offset at `now`.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        self.slide.position(now)
    }

    /// Returns `true` while the slide animation is still in flight.
    #[must_use]
    pub fn is_sliding(&self, now: Instant) -> bool {
        !self.slide.is_settled(now)
    }

    /// Glyph the toggle control must display for the current state.
    #[must_use]
    pub fn toggle_glyph(&self) -> &'static str {
        if self.expanded {
            CLOSE_GLYPH
        } else {
            OPEN_GLYPH
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages emitted by the drawer and its triggers.
#[derive(Debug, Clone)]
pub enum Message {
    /// Explicit activation of the toggle control.
    Toggle,
    /// A link inside the menu region was activated.
    LinkActivated(Page),
    /// Pointer press on the content region outside the drawer.
    OutsideClick,
    /// The scheme selector inside the menu changed value.
    SchemeSelected(ColorSchemeMode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Page),
    SchemeSelected(ColorSchemeMode),
}

/// Processes a drawer message and returns the event for the parent.
pub fn update(message: Message, state: &mut State, now: Instant) -> Event {
    match message {
        Message::Toggle => {
            state.toggle(now);
            Event::None
        }
        Message::LinkActivated(page) => {
            // Close-on-navigate.
            if state.expanded {
                state.toggle(now);
            }
            Event::Navigate(page)
        }
        Message::OutsideClick => {
            if state.expanded {
                state.toggle(now);
            }
            Event::None
        }
        Message::SchemeSelected(mode) => Event::SchemeSelected(mode),
    }
}

/// Contextual data needed to render the drawer.
pub struct ViewContext {
    pub current_page: Page,
    pub scheme: ColorSchemeMode,
    /// Offset already sampled at the frame's instant.
    pub offset: f32,
}

/// Renders the drawer panel, clipped to its revealed width.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let mut menu = Column::new().spacing(spacing::XXS).width(Length::Fill);

    for page in Page::ALL {
        let label = Text::new(page.title()).size(typography::BODY);
        let link = if page == ctx.current_page {
            button(label)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(button::primary)
        } else {
            button(label)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(button::text)
        }
        .on_press(Message::LinkActivated(page));
        menu = menu.push(link);
    }

    let selector = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new("Color scheme").size(typography::CODE))
        .push(
            pick_list(ColorSchemeMode::ALL, Some(ctx.scheme), Message::SchemeSelected)
                .width(Length::Fill),
        );

    let panel_content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(menu)
        .push(selector);

    let panel = Container::new(panel_content)
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fill)
        .style(panel_style);

    // The panel keeps its full width and hugs the clipping container's right
    // edge, so as the revealed width grows the content translates in from the
    // left instead of being unmasked in place.
    Container::new(panel)
        .align_x(Horizontal::Right)
        .width(Length::Fixed(revealed_width(ctx.offset)))
        .height(Length::Fill)
        .clip(true)
        .into()
}

/// Width of the panel's visible portion for a given slide offset.
fn revealed_width(offset: f32) -> f32 {
    (PANEL_WIDTH + offset).max(0.0)
}

fn panel_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            ..Default::default()
        },
        ..Default::default()
    }
}
