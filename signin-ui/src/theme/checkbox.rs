use iced::{
    widget::checkbox::{Catalog, Status, Style, StyleFn},
    Border,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    let is_checked = match status {
        Status::Active { is_checked }
        | Status::Hovered { is_checked }
        | Status::Disabled { is_checked } => is_checked,
    };
    Style {
        icon_color: theme.colors.checkboxes.icon,
        text_color: theme.colors.checkboxes.text.into(),
        background: if is_checked {
            theme.colors.checkboxes.checked.into()
        } else {
            theme.colors.checkboxes.unchecked.into()
        },
        border: if let Some(color) = theme.colors.checkboxes.border {
            Border {
                radius: 4.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                ..Default::default()
            }
        },
    }
}
