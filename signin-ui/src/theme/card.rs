use iced::widget::container::Style;
use iced::{Background, Border, Shadow, Vector};

use super::palette::ContainerPalette;
use super::Theme;

fn card(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                radius: 15.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: 15.0.into(),
                ..Default::default()
            }
        },
        shadow: if let Some(color) = palette.shadow {
            Shadow {
                color,
                offset: Vector::new(0.0, 14.0),
                blur_radius: 80.0,
            }
        } else {
            Shadow::default()
        },
    }
}

pub fn simple(theme: &Theme) -> Style {
    card(&theme.colors.cards.simple)
}
