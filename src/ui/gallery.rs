/// Preview thumbnail grid
///
/// Renders the session's preview list as a wrapping grid of fixed-size
/// tiles. Entries still decoding show a placeholder; entries that failed
/// to decode show the failure instead of silently rendering a broken tile.

use iced::widget::{container, image, text};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::state::session::Preview;
use crate::Message;

/// Tile dimensions for one thumbnail in the grid
const TILE_WIDTH: f32 = 160.0;
const TILE_HEIGHT: f32 = 120.0;

/// Build the wrapping grid of preview tiles
pub fn preview_grid(previews: &[Preview]) -> Element<'_, Message> {
    let tiles: Vec<Element<Message>> = previews.iter().map(tile).collect();

    Wrap::with_elements(tiles)
        .spacing(10.0)
        .line_spacing(10.0)
        .into()
}

/// One grid tile for a single preview entry
fn tile(preview: &Preview) -> Element<'_, Message> {
    let content: Element<Message> = match preview {
        Preview::Loading => text("Loading...").size(13).into(),
        Preview::Ready(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Preview::Failed(reason) => text(format!("⚠ {reason}")).size(12).into(),
    };

    container(content)
        .padding(4)
        .style(container::rounded_box)
        .center_x(Length::Fixed(TILE_WIDTH))
        .center_y(Length::Fixed(TILE_HEIGHT))
        .into()
}
