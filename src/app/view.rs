// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Wide windows get a persistent sidebar; narrow windows get a top bar with
//! the drawer toggle plus the animated drawer itself. Both layouts render the
//! page content from the same scheme effects, so theme and highlight palette
//! always agree.

use super::page::{CodeLine, Page};
use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::highlight::HighlightPalette;
use crate::ui::nav_drawer;
use crate::ui::sidebar;
use iced::alignment::Vertical;
use iced::widget::{
    button, container, mouse_area, scrollable, Column, Container, Row, Text,
};
use iced::{Border, Element, Font, Length};

/// Renders the current application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let effects = app.scheme_effects();
    let content = page_content(app.page, effects.dark_highlight_active);

    if app.is_compact() {
        let top_bar = build_top_bar(app);
        let drawer = nav_drawer::view(nav_drawer::ViewContext {
            current_page: app.page,
            scheme: effects.selector_value,
            offset: app.drawer.offset(app.now),
        })
        .map(Message::Drawer);

        // Only an open drawer turns the content region into a close trigger.
        let body: Element<'_, Message> = if app.drawer.is_expanded() {
            mouse_area(content)
                .on_press(Message::Drawer(nav_drawer::Message::OutsideClick))
                .into()
        } else {
            content
        };

        Column::new()
            .push(top_bar)
            .push(
                Row::new()
                    .push(drawer)
                    .push(body)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .into()
    } else {
        let sidebar = sidebar::view(sidebar::ViewContext {
            current_page: app.page,
            scheme: effects.selector_value,
        })
        .map(Message::Sidebar);

        Row::new()
            .push(sidebar)
            .push(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Top bar for the compact layout: drawer toggle plus the manual title.
fn build_top_bar(app: &App) -> Element<'_, Message> {
    let toggle = button(Text::new(app.drawer.toggle_glyph()).size(typography::GLYPH))
        .on_press(Message::Drawer(nav_drawer::Message::Toggle))
        .padding(spacing::XS);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(toggle)
        .push(Text::new("Larch Manual").size(typography::HEADING));

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &iced::Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

/// Renders a page: title, paragraphs, and the optional code sample.
fn page_content<'a>(page: Page, dark_highlight: bool) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(760.0)
        .push(Text::new(page.title()).size(typography::TITLE));

    for paragraph in page.body() {
        column = column.push(Text::new(*paragraph).size(typography::BODY));
    }

    if let Some(sample) = page.code_sample() {
        column = column.push(code_block(sample, dark_highlight));
    }

    scrollable(
        Container::new(column)
            .width(Length::Fill)
            .padding(spacing::SM),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Renders a code sample with the palette selected by the highlight resource.
fn code_block<'a>(sample: &'static [CodeLine], dark_highlight: bool) -> Element<'a, Message> {
    let palette = HighlightPalette::for_activation(dark_highlight);

    let mut lines = Column::new().spacing(spacing::XXS);
    for line in sample {
        let mut row = Row::new();
        for (token, text) in *line {
            row = row.push(
                Text::new(*text)
                    .size(typography::CODE)
                    .font(Font::MONOSPACE)
                    .color(palette.color(*token)),
            );
        }
        lines = lines.push(row);
    }

    Container::new(lines)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |_theme: &iced::Theme| container::Style {
            background: Some(palette.background.into()),
            border: Border {
                radius: crate::ui::design_tokens::radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
