/// Full-window configuration error with remediation steps
///
/// Shown instead of the main screen when no usable API key was found.
/// Nothing else is reachable from here; fixing `.env` and restarting is the
/// only way out.
use iced::widget::{column, container, text};
use iced::{Element, Length, Theme};

use crate::config::{API_KEY_VAR, PLACEHOLDER_API_KEY};
use crate::error::ConfigError;
use crate::Message;

/// Steps telling the user how to configure the key
pub fn remediation_steps() -> [String; 3] {
    [
        "1. Create a .env file in your project root".to_string(),
        "2. Add your OpenAI API key:".to_string(),
        format!("{}={}", API_KEY_VAR, PLACEHOLDER_API_KEY),
    ]
}

pub fn view(error: &ConfigError) -> Element<'_, Message> {
    let [create, add, line] = remediation_steps();

    let steps = container(
        column![
            text(create).size(14),
            text(add).size(14),
            text(line).size(14).font(iced::Font::MONOSPACE),
        ]
        .spacing(6),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::rounded_box);

    let card = container(
        column![
            text("⚠ Configuration Error")
                .size(24)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().danger),
                }),
            text(error.to_string()).size(16),
            steps,
        ]
        .spacing(16),
    )
    .padding(32)
    .max_width(480.0)
    .style(container::bordered_box);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
