use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::widget::container;
use iced::Length;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(
        text(t)
            .font(MEDIUM)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::primary)
}

/// Primary button stretched to the width of its parent, like a form submit button.
pub fn submit<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    primary(t).width(Length::Fill)
}

fn content<'a, T: 'a>(text: Text<'a>) -> Container<'a, T> {
    container(text.width(Length::Fill)).padding(5)
}
