/// Preview of the selected image with a clear trigger. No internal state.
use iced::widget::{button, column, container, horizontal_space, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::preview::DisplayRef;
use crate::Message;

const PREVIEW_HEIGHT: f32 = 360.0;

pub fn view(preview: &DisplayRef) -> Element<'_, Message> {
    let name = preview
        .path()
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let toolbar = row![
        text(name).size(14),
        horizontal_space(),
        button(text("✕ Clear"))
            .on_press(Message::Clear)
            .style(button::secondary)
            .padding([6, 12]),
    ]
    .align_y(Alignment::Center);

    let picture = container(
        image(preview.handle().clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT)),
    )
    .style(container::rounded_box)
    .width(Length::Fill);

    column![toolbar, picture].spacing(8).into()
}
