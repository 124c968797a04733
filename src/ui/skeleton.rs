/// Loading placeholder shown while an analysis is in flight
/// Draws a heading bar and three text lines, no real content
use iced::widget::canvas;
use iced::{Point, Rectangle, Size};

use crate::Message;

/// Height of the whole placeholder in logical pixels
pub const SKELETON_HEIGHT: f32 = 120.0;

const HEADING_HEIGHT: f32 = 32.0;
const LINE_HEIGHT: f32 = 16.0;
const GAP: f32 = 8.0;

/// Relative widths: heading, then the text lines
const WIDTHS: [f32; 4] = [0.75, 1.0, 5.0 / 6.0, 4.0 / 6.0];

#[derive(Debug, Clone, Copy, Default)]
pub struct Skeleton;

impl Skeleton {
    /// Bar rectangles for a given available width
    pub fn bars(width: f32) -> Vec<(Point, Size)> {
        let mut bars = Vec::with_capacity(WIDTHS.len());
        let mut y = 0.0;

        for (i, fraction) in WIDTHS.iter().enumerate() {
            let height = if i == 0 { HEADING_HEIGHT } else { LINE_HEIGHT };
            bars.push((Point::new(0.0, y), Size::new(width * fraction, height)));

            // Bigger gap between heading and body
            y += height + if i == 0 { GAP * 2.0 } else { GAP };
        }

        bars
    }
}

impl canvas::Program<Message> for Skeleton {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let color = theme.extended_palette().background.strong.color;

        for (top_left, size) in Self::bars(bounds.width) {
            frame.fill_rectangle(top_left, size, color);
        }

        vec![frame.into_geometry()]
    }
}
