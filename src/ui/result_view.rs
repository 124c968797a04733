/// Result renderer
///
/// Three mutually exclusive presentations driven by controller state:
/// - Loading: skeleton placeholder while an attempt is in flight
/// - Empty: nothing (no result, not loading)
/// - Present: the returned markdown rendered as rich text
use iced::widget::{canvas, column, markdown, text, Space};
use iced::{Element, Length, Theme};

use super::skeleton::{Skeleton, SKELETON_HEIGHT};
use crate::state::Controller;
use crate::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView<'a> {
    Loading,
    Empty,
    Present(&'a str),
}

impl<'a> ResultView<'a> {
    pub fn of(controller: &'a Controller) -> Self {
        if controller.is_analyzing() {
            ResultView::Loading
        } else if let Some(text) = controller.analysis_result() {
            ResultView::Present(text)
        } else {
            ResultView::Empty
        }
    }
}

/// Parsed markdown report, kept so the text is only parsed once per result
#[derive(Debug, Clone)]
pub struct Report {
    source: String,
    items: Vec<markdown::Item>,
}

impl Report {
    pub fn parse(source: &str) -> Self {
        Self {
            source: source.to_string(),
            items: markdown::parse(source).collect(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn items(&self) -> &[markdown::Item] {
        &self.items
    }
}

pub fn view<'a>(
    state: ResultView<'a>,
    report: Option<&'a Report>,
    theme: &'_ Theme,
) -> Element<'a, Message> {
    match (state, report) {
        (ResultView::Loading, _) => canvas(Skeleton)
            .width(Length::Fill)
            .height(Length::Fixed(SKELETON_HEIGHT))
            .into(),
        (ResultView::Present(_), Some(report)) => column![
            text("Plant Analysis Results").size(26),
            markdown::view(
                report.items(),
                markdown::Settings::default(),
                markdown::Style::from_palette(theme.palette()),
            )
            .map(Message::LinkClicked),
        ]
        .spacing(16)
        .into(),
        _ => Space::new(Length::Shrink, Length::Shrink).into(),
    }
}
