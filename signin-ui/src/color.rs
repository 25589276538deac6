use iced::Color;
pub const BLACK: Color = iced::Color::BLACK;
pub const WHITE: Color = iced::Color::WHITE;
pub const GREY_4: Color = Color::from_rgb(
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
);
pub const LIGHT_GREY: Color = Color::from_rgb(
    0xF4 as f32 / 255.0,
    0xF5 as f32 / 255.0,
    0xF7 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0x00 as f32 / 255.0,
    0x00 as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x1B as f32 / 255.0,
    0x9E as f32 / 255.0,
    0x4B as f32 / 255.0,
);
// Submit button
pub const BLUE: Color = Color::from_rgb(
    0x0E as f32 / 255.0,
    0x87 as f32 / 255.0,
    0xF8 as f32 / 255.0,
);
pub const DARK_BLUE: Color = Color::from_rgb(
    0x0A as f32 / 255.0,
    0x6C as f32 / 255.0,
    0xC7 as f32 / 255.0,
);
// Card drop shadow, rgba(34, 35, 58, 0.2)
pub const SHADOW: Color = Color::from_rgba(
    0x22 as f32 / 255.0,
    0x23 as f32 / 255.0,
    0x3A as f32 / 255.0,
    0.2,
);
