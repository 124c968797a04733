/// Drop zone: the intake widget shown while no image is selected
///
/// Drops arrive through the window event subscription; clicking the zone
/// opens the native file picker.
use iced::widget::{button, column, text};
use iced::{Alignment, Background, Border, Element, Length, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

use crate::state::intake::ALLOWED_EXTENSIONS;
use crate::Message;

/// Open the native picker restricted to the accepted image types
pub fn pick_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select a Plant Photo")
        .add_filter("Images", &ALLOWED_EXTENSIONS)
        .pick_file()
}

/// Prompt text for the current drag state
pub fn headline(drag_active: bool) -> &'static str {
    if drag_active {
        "Drop your image here"
    } else {
        "Drag & drop a plant image"
    }
}

pub fn view<'a>(drag_active: bool) -> Element<'a, Message> {
    let content = column![
        text("⬆").size(40),
        text(headline(drag_active)).size(20),
        text("or click to select a file").size(14),
        text("JPEG, PNG or WebP").size(12),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    button(content)
        .on_press(Message::PickImage)
        .padding(32)
        .width(Length::Fill)
        .style(move |theme: &Theme, status| zone_style(theme, status, drag_active))
        .into()
}

fn zone_style(theme: &Theme, status: button::Status, drag_active: bool) -> button::Style {
    let palette = theme.extended_palette();

    let (background, border_color) = if drag_active {
        (palette.success.weak.color, palette.success.strong.color)
    } else if matches!(status, button::Status::Hovered | button::Status::Pressed) {
        (palette.background.strong.color, palette.success.base.color)
    } else {
        (palette.background.weak.color, palette.background.strong.color)
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 12.0.into(),
        },
        ..button::Style::default()
    }
}
