pub mod button;
pub mod form;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

/// White rounded panel holding a screen of the application.
pub fn card<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding([40, 55])
        .max_width(450.0)
        .width(Length::Fill)
        .style(theme::card::simple)
}
