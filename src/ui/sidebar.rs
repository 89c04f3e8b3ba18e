// SPDX-License-Identifier: MPL-2.0
//! Persistent navigation sidebar for the wide layout.
//!
//! Unlike the drawer, the sidebar has no state of its own: it is always
//! visible and never animates. It carries the second scheme selector, which
//! must stay in sync with the one in the drawer menu.

use crate::app::page::Page;
use crate::domain::scheme::ColorSchemeMode;
use crate::ui::design_tokens::{layout, spacing, typography};
use iced::widget::{button, container, pick_list, Column, Container, Text};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the sidebar.
pub struct ViewContext {
    pub current_page: Page,
    pub scheme: ColorSchemeMode,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    SchemeSelected(ColorSchemeMode),
}

/// Renders the sidebar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let title = Text::new("Larch Manual").size(typography::HEADING);

    let mut links = Column::new().spacing(spacing::XXS).width(Length::Fill);
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
        .on_press(Message::Navigate(page));
        links = links.push(link);
    }

    let selector = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new("Color scheme").size(typography::CODE))
        .push(
            pick_list(ColorSchemeMode::ALL, Some(ctx.scheme), Message::SchemeSelected)
                .width(Length::Fill),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(title)
        .push(links)
        .push(selector);

    Container::new(content)
        .width(Length::Fixed(layout::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(sidebar_style)
        .into()
}

fn sidebar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_renders_for_every_page() {
        for page in Page::ALL {
            let _element = view(ViewContext {
                current_page: page,
                scheme: ColorSchemeMode::Auto,
            });
        }
    }
}
