use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub text_inputs: TextInputs,
    pub checkboxes: Checkboxes,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
    pub shadow: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub focused: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Checkboxes {
    pub icon: iced::Color,
    pub text: iced::Color,
    pub checked: iced::Color,
    pub unchecked: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_GREY,
            },
            text: Text {
                primary: color::BLACK,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::BLUE,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::DARK_BLUE,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::DARK_BLUE,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: None,
                    shadow: Some(color::SHADOW),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::BLACK,
                        selection: color::BLUE,
                        border: Some(color::GREY_2),
                    },
                    focused: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::BLACK,
                        selection: color::BLUE,
                        border: Some(color::BLUE),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_4,
                        selection: color::GREY_2,
                        border: Some(color::GREY_2),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::BLACK,
                        selection: color::BLUE,
                        border: Some(color::RED),
                    },
                    focused: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::BLACK,
                        selection: color::BLUE,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_4,
                        selection: color::GREY_2,
                        border: Some(color::RED),
                    },
                },
            },
            checkboxes: Checkboxes {
                icon: color::WHITE,
                text: color::BLACK,
                checked: color::BLUE,
                unchecked: color::WHITE,
                border: Some(color::GREY_2),
            },
        }
    }
}
