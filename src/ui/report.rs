/// Analysis report rendering
///
/// Pure presentation of a completed `AnalysisReport`: no mutation, no
/// derived computation beyond iterating the record's lists. The caller
/// renders nothing in this area when no report exists.

use iced::widget::{column, container, row, text, Column};
use iced::{Element, Length};

use crate::analysis::report::{AnalysisReport, Observation};
use crate::Message;

const SECTION_TITLE_SIZE: u16 = 24;
const BODY_SIZE: u16 = 15;

/// Render the full report as a stack of labeled sections
pub fn report_view(report: &AnalysisReport) -> Element<'_, Message> {
    column![
        section(
            "Visual Description",
            text(&report.visual_description).size(BODY_SIZE).into(),
        ),
        section(
            "ABA Observations & Transcriptions",
            observations(&report.observations),
        ),
        section(
            "Behavior Summary",
            text(&report.behavior_summary).size(BODY_SIZE).into(),
        ),
        section(
            "Reinforcement Patterns Observed",
            bullet_list(&report.reinforcement_patterns),
        ),
        section(
            "Recommendations",
            numbered_list(&report.recommendations),
        ),
    ]
    .spacing(16)
    .into()
}

/// A titled card wrapping one section of the report
fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![text(title).size(SECTION_TITLE_SIZE), body]
            .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

/// Per-observation blocks: timestamp + technique tag, description, then
/// the Portuguese/English transcription pair
fn observations(items: &[Observation]) -> Element<'_, Message> {
    let blocks = items.iter().fold(Column::new().spacing(14), |col, obs| {
        col.push(
            column![
                row![
                    text(&obs.timestamp).size(BODY_SIZE),
                    text(&obs.technique).size(12),
                ]
                .spacing(12),
                text(&obs.description).size(BODY_SIZE),
                container(
                    column![
                        text("🇧🇷 Portuguese:").size(12),
                        text(format!("\"{}\"", obs.portuguese)).size(BODY_SIZE),
                        text("🇬🇧 English:").size(12),
                        text(format!("\"{}\"", obs.english)).size(BODY_SIZE),
                    ]
                    .spacing(4),
                )
                .padding(10)
                .width(Length::Fill)
                .style(container::rounded_box),
            ]
            .spacing(6),
        )
    });

    blocks.into()
}

fn bullet_list(items: &[String]) -> Element<'_, Message> {
    let list = items.iter().fold(Column::new().spacing(6), |col, item| {
        col.push(text(format!("• {item}")).size(BODY_SIZE))
    });

    list.into()
}

fn numbered_list(items: &[String]) -> Element<'_, Message> {
    let list = items
        .iter()
        .enumerate()
        .fold(Column::new().spacing(8), |col, (idx, item)| {
            col.push(text(format!("{}. {item}", idx + 1)).size(BODY_SIZE))
        });

    list.into()
}
