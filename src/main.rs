use iced::event::{self, Event};
use iced::widget::{button, column, container, markdown, scrollable, text};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use tracing::{debug, info};

mod analysis;
mod config;
mod error;
mod logging;
mod state;
mod ui;

use analysis::encode::read_data_url;
use analysis::DataUrl;
use error::AnalysisError;
use state::intake::DropTracker;
use state::{AttemptId, Controller};
use ui::result_view::{Report, ResultView};

/// Which top-level screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    /// No usable API key; blocks everything else
    ConfigError,
    Main,
}

/// Main application state
struct PlantIdentifier {
    /// Owns the selected image and the analysis attempt
    controller: Controller,
    /// Drop gesture tracking for the drop zone
    drops: DropTracker,
    /// Parsed form of the current analysis result
    report: Option<Report>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the drop zone
    PickImage,
    /// A file is being dragged over the window
    FileHovered,
    /// A file was dropped on the window (one message per file)
    FileDropped(PathBuf),
    /// Dragged files left the window
    HoverLeft,
    /// User clicked "Analyze Plant"
    Analyze,
    /// Background read of the selected image finished
    ImageEncoded(AttemptId, Result<DataUrl, AnalysisError>),
    /// Remote analysis finished
    AnalysisFinished(AttemptId, Result<Option<String>, AnalysisError>),
    /// Clear button or "Analyze Another Plant"
    Clear,
    /// Link clicked inside the rendered report
    LinkClicked(markdown::Url),
}

impl PlantIdentifier {
    /// Create a new instance of the application
    fn new(settings: &config::Settings) -> (Self, Task<Message>) {
        let controller = Controller::initialize(settings);
        info!("🌱 Plant Identifier initialized");

        (
            PlantIdentifier {
                controller,
                drops: DropTracker::new(),
                report: None,
            },
            Task::none(),
        )
    }

    fn screen(&self) -> Screen {
        if self.controller.config_error().is_some() {
            Screen::ConfigError
        } else {
            Screen::Main
        }
    }

    /// The drop zone is only on screen while nothing is selected
    fn accepts_intake(&self) -> bool {
        self.screen() == Screen::Main && self.controller.selected().is_none()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::PickImage => {
                if self.accepts_intake() {
                    // Show the native file picker dialog
                    if let Some(candidate) = ui::drop_zone::pick_file()
                        .and_then(|path| state::intake::first_accepted([path]))
                    {
                        self.controller.accept_image(candidate);
                    }
                }
                Task::none()
            }
            Message::FileHovered => {
                if self.accepts_intake() {
                    self.drops.hovered();
                }
                Task::none()
            }
            Message::HoverLeft => {
                self.drops.hover_left();
                Task::none()
            }
            Message::FileDropped(path) => {
                if self.accepts_intake() {
                    if let Some(candidate) = self.drops.dropped(path) {
                        self.controller.accept_image(candidate);
                    }
                } else {
                    debug!("Ignoring drop of {}", path.display());
                    self.drops.hover_left();
                }
                Task::none()
            }
            Message::Analyze => match self.controller.request_analysis() {
                Some(job) => {
                    let attempt = job.attempt;
                    Task::perform(read_data_url(job.path, job.kind), move |encoded| {
                        Message::ImageEncoded(attempt, encoded)
                    })
                }
                None => Task::none(),
            },
            Message::ImageEncoded(attempt, encoded) => {
                match self.controller.image_encoded(attempt, encoded) {
                    Some(call) => Task::perform(call.run(), move |outcome| {
                        Message::AnalysisFinished(attempt, outcome)
                    }),
                    None => Task::none(),
                }
            }
            Message::AnalysisFinished(attempt, outcome) => {
                self.controller.analysis_finished(attempt, outcome);
                Task::none()
            }
            Message::Clear => {
                self.controller.reset();
                self.drops.hover_left();
                Task::none()
            }
            Message::LinkClicked(url) => {
                info!("🔗 Link clicked in report: {}", url);
                Task::none()
            }
        };

        self.sync_report();
        task
    }

    /// Keep the parsed report in step with the controller's result text
    fn sync_report(&mut self) {
        match self.controller.analysis_result() {
            Some(text) => {
                if self.report.as_ref().map(Report::source) != Some(text) {
                    self.report = Some(Report::parse(text));
                }
            }
            None => self.report = None,
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        if let Some(error) = self.controller.config_error() {
            return ui::config_error::view(error);
        }

        let header = column![
            text("Plant Identifier").size(40),
            text("Upload a photo of any plant to identify it instantly").size(18),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        let mut card = column![].spacing(24);

        if let Some(message) = self.controller.error_message() {
            card = card.push(ui::error_banner(message));
        }

        match self.controller.selected() {
            None => {
                card = card.push(ui::drop_zone::view(self.drops.is_drag_active()));
            }
            Some(selected) => {
                card = card.push(ui::image_preview::view(selected.preview()));

                if self.controller.can_analyze() {
                    card = card.push(
                        button(text("Analyze Plant").width(Length::Fill).center())
                            .on_press(Message::Analyze)
                            .style(button::success)
                            .padding(12)
                            .width(Length::Fill),
                    );
                }

                card = card.push(ui::result_view::view(
                    ResultView::of(&self.controller),
                    self.report.as_ref(),
                    &self.theme(),
                ));

                if self.controller.analysis_result().is_some() {
                    card = card.push(
                        button(text("Analyze Another Plant").width(Length::Fill).center())
                            .on_press(Message::Clear)
                            .style(button::secondary)
                            .padding(12)
                            .width(Length::Fill),
                    );
                }
            }
        }

        let card = container(card)
            .padding(32)
            .width(Length::Fill)
            .style(container::bordered_box);

        let footer = text("Upload clear, well-lit photos for best results").size(14);

        let content = column![header, card, footer]
            .spacing(32)
            .padding(32)
            .max_width(900.0)
            .align_x(Alignment::Center);

        scrollable(container(content).center_x(Length::Fill)).into()
    }

    /// Window file drag-and-drop events
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::HoverLeft),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    logging::init();
    let settings = config::Settings::load();

    iced::application(
        "Plant Identifier",
        PlantIdentifier::update,
        PlantIdentifier::view,
    )
    .subscription(PlantIdentifier::subscription)
    .theme(PlantIdentifier::theme)
    .window_size((900.0, 860.0))
    .centered()
    .run_with(move || PlantIdentifier::new(&settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Settings, API_KEY_VAR};
    use std::path::Path;

    fn app(key: Option<&str>) -> PlantIdentifier {
        let key = key.map(str::to_string);
        let settings = Settings::from_lookup(move |name| {
            if name == API_KEY_VAR {
                key.clone()
            } else {
                None
            }
        });
        PlantIdentifier::new(&settings).0
    }

    fn write_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();
        path
    }

    #[test]
    fn test_missing_key_shows_config_screen_and_blocks_intake() {
        let dir = tempfile::tempdir().unwrap();
        let leaf = write_image(dir.path(), "leaf.png");

        let mut app = app(None);
        assert_eq!(app.screen(), Screen::ConfigError);
        assert!(!app.accepts_intake());

        let _ = app.update(Message::FileHovered);
        let _ = app.update(Message::FileDropped(leaf));
        assert!(app.controller.selected().is_none());
        assert!(!app.drops.is_drag_active());

        let message = app.controller.config_error().unwrap().to_string();
        assert!(message.contains("VITE_OPENAI_API_KEY"));
    }

    #[test]
    fn test_placeholder_key_shows_config_screen() {
        let app = app(Some("your_api_key_here"));
        assert_eq!(app.screen(), Screen::ConfigError);
    }

    #[test]
    fn test_multi_file_drop_selects_first() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_image(dir.path(), "leaf.png");
        let second = write_image(dir.path(), "rose.png");

        let mut app = app(Some("sk-test"));
        assert_eq!(app.screen(), Screen::Main);

        let _ = app.update(Message::FileHovered);
        let _ = app.update(Message::FileHovered);
        let _ = app.update(Message::FileDropped(first.clone()));
        let _ = app.update(Message::FileDropped(second));

        assert_eq!(app.controller.selected().unwrap().path, first);
        assert_eq!(app.controller.live_previews(), 1);
    }

    #[test]
    fn test_non_image_drop_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, b"not a plant").unwrap();

        let mut app = app(Some("sk-test"));
        let _ = app.update(Message::FileHovered);
        let _ = app.update(Message::FileDropped(notes));
        assert!(app.controller.selected().is_none());
        assert!(!app.drops.is_drag_active());
    }

    #[test]
    fn test_report_follows_result() {
        let dir = tempfile::tempdir().unwrap();
        let leaf = write_image(dir.path(), "leaf.png");

        let mut app = app(Some("sk-test"));
        let _ = app.update(Message::FileDropped(leaf));

        let job = app.controller.request_analysis().unwrap();
        let encoded = Ok(DataUrl::encode(b"leaf", job.kind));
        let _ = app.update(Message::ImageEncoded(job.attempt, encoded));
        assert!(app.controller.is_analyzing());

        let _ = app.update(Message::AnalysisFinished(job.attempt, Ok(Some("# Rosa\n...".into()))));
        assert!(!app.controller.is_analyzing());
        assert_eq!(app.report.as_ref().map(Report::source), Some("# Rosa\n..."));

        let _ = app.update(Message::Clear);
        assert!(app.report.is_none());
        assert_eq!(app.controller.live_previews(), 0);
        assert!(app.accepts_intake());
    }
}
