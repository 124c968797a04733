/// User interface module
///
/// Views over controller state; none of them own state:
/// - Drop zone and file picker (drop_zone.rs)
/// - Selected image preview (image_preview.rs)
/// - Result renderer and its loading skeleton (result_view.rs, skeleton.rs)
/// - Full-window configuration error (config_error.rs)

pub mod config_error;
pub mod drop_zone;
pub mod image_preview;
pub mod result_view;
pub mod skeleton;

use iced::widget::{container, text};
use iced::{Background, Border, Element, Length, Theme};

use crate::Message;

/// Inline banner for operational errors
pub fn error_banner(message: &str) -> Element<'_, Message> {
    container(text(message).size(15))
        .padding([12, 16])
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(Background::Color(palette.danger.weak.color)),
                text_color: Some(palette.danger.weak.text),
                border: Border {
                    color: palette.danger.base.color,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..container::Style::default()
            }
        })
        .into()
}
