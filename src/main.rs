use iced::widget::{button, column, container, scrollable, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;

mod analysis;
mod state;
mod ui;
mod upload;

use analysis::mock;
use analysis::report::AnalysisReport;
use state::session::{Preview, Session};

/// Main application state: one page, one session
struct AnalysisPage {
    /// Selected images, previews, report, analyzing flag
    session: Session,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Select Images" button
    PickImages,
    /// Background thumbnail decode completed for a selection batch
    PreviewsLoaded(u64, Vec<Preview>),
    /// User clicked the "Analyze Images" button
    RunAnalysis,
    /// The (simulated) analysis run completed
    AnalysisComplete(u64, AnalysisReport),
}

impl AnalysisPage {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🛼 ABA Roller Skating Analysis ready");

        (
            AnalysisPage {
                session: Session::new(),
                status: "Ready. Select images to begin.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImages => {
                // Show the native file picker (multiple image files)
                let files = FileDialog::new()
                    .set_title("Select Skating Images")
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                    .pick_files();

                if let Some(files) = files {
                    self.status = format!("Loading {} image(s)...", files.len());

                    // Replacing the selection also clears any previous
                    // report and cancels pending background work
                    let seq = self.session.select_files(files.clone());

                    return Task::perform(upload::preview::load_previews(files), move |p| {
                        Message::PreviewsLoaded(seq, p)
                    });
                }

                Task::none()
            }
            Message::PreviewsLoaded(seq, previews) => {
                let failed = previews
                    .iter()
                    .filter(|p| matches!(p, Preview::Failed(_)))
                    .count();

                self.session.previews_loaded(seq, previews);

                let total = self.session.previews().len();
                self.status = if failed > 0 {
                    format!("Loaded {} image(s), {} could not be previewed.", total, failed)
                } else {
                    format!("Loaded {} image(s). Ready to analyze.", total)
                };

                Task::none()
            }
            Message::RunAnalysis => {
                // No-op on empty selection or while a run is pending
                if let Some(run) = self.session.begin_analysis() {
                    self.status = "Analyzing...".to_string();

                    let frames = self.session.images().to_vec();

                    return Task::perform(mock::analyze(frames), move |report| {
                        Message::AnalysisComplete(run, report)
                    });
                }

                Task::none()
            }
            Message::AnalysisComplete(run, report) => {
                self.session.finish_analysis(run, report);

                if self.session.report().is_some() {
                    self.status = "✅ Analysis complete.".to_string();
                    println!("📊 Analysis complete");
                }

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("ABA Roller Skating Analysis").size(40),
            text(
                "Analyze roller skating activities with Applied Behavior Analysis \
                 methodology. Upload images to receive detailed behavioral observations, \
                 Portuguese transcription, and ABA technique identification."
            )
            .size(15),
        ]
        .spacing(10)
        .align_x(Alignment::Center);

        let analyze_label = if self.session.is_analyzing() {
            "Analyzing..."
        } else {
            "▶ Analyze Images"
        };

        let controls = column![
            button("📁 Select Images")
                .on_press(Message::PickImages)
                .padding(12),
            text(&self.status).size(14),
        ]
        .spacing(10)
        .align_x(Alignment::Center);

        let mut page = Column::new()
            .spacing(24)
            .padding(30)
            .align_x(Alignment::Center)
            .push(header)
            .push(controls);

        if !self.session.previews().is_empty() {
            page = page
                .push(
                    text(format!(
                        "🖼 Uploaded Images ({})",
                        self.session.previews().len()
                    ))
                    .size(18),
                )
                .push(ui::gallery::preview_grid(self.session.previews()))
                .push(
                    // Disabled while a run is pending (and with nothing selected)
                    button(analyze_label)
                        .on_press_maybe(
                            self.session.can_analyze().then_some(Message::RunAnalysis),
                        )
                        .padding(12),
                );
        }

        if let Some(report) = self.session.report() {
            page = page.push(ui::report::report_view(report));
        }

        let footer = column![
            text(
                "This tool provides educational analysis based on Applied Behavior \
                 Analysis (ABA) principles."
            )
            .size(12),
            text(
                "Note: This is a demonstration using simulated analysis. Production \
                 version would integrate with AI vision and speech recognition APIs."
            )
            .size(12),
        ]
        .spacing(4)
        .align_x(Alignment::Center);

        page = page.push(footer);

        scrollable(
            container(page)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application(
        "ABA Roller Skating Analysis",
        AnalysisPage::update,
        AnalysisPage::view,
    )
    .theme(AnalysisPage::theme)
    .centered()
    .run_with(AnalysisPage::new)
}
