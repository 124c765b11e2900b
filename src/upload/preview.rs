/// Thumbnail decoding for picked image files
///
/// Decoding and resizing are CPU-bound, so the whole batch runs inside
/// `spawn_blocking` and reports back as one message. Output is one
/// `Preview` per input file, in input order; files that fail to decode
/// become `Preview::Failed` so the list stays aligned with the selection.

use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use thiserror::Error;
use tokio::task;

use crate::state::session::Preview;

/// Size of generated thumbnails (longest edge)
const PREVIEW_SIZE: u32 = 256;

/// Why a single file produced no thumbnail
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("not a decodable image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode a batch of picked files into display thumbnails.
///
/// Always returns exactly `files.len()` entries, positionally matching
/// the input.
pub async fn load_previews(files: Vec<PathBuf>) -> Vec<Preview> {
    let count = files.len();

    let result = task::spawn_blocking(move || {
        files.iter().map(|path| load_one(path)).collect::<Vec<_>>()
    })
    .await;

    match result {
        Ok(previews) => previews,
        Err(e) => {
            eprintln!("⚠️  Preview task failed: {e}");
            vec![Preview::Failed("preview task failed".to_string()); count]
        }
    }
}

/// Decode one file, mapping any failure into a displayable entry
fn load_one(path: &Path) -> Preview {
    match decode_thumbnail(path) {
        Ok(handle) => Preview::Ready(handle),
        Err(e) => {
            eprintln!("⚠️  No preview for {:?}: {e}", path.file_name());
            Preview::Failed(e.to_string())
        }
    }
}

/// Decode and downscale a single image file into an iced handle
fn decode_thumbnail(path: &Path) -> Result<Handle, PreviewError> {
    if !path.exists() {
        return Err(PreviewError::NotFound(path.to_path_buf()));
    }

    let img = image::open(path)?;

    // Lanczos3 keeps thumbnails crisp at small sizes
    let thumbnail = img.resize(
        PREVIEW_SIZE,
        PREVIEW_SIZE,
        image::imageops::FilterType::Lanczos3,
    );

    let rgba = thumbnail.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
