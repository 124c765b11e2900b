/// Upload handling module
///
/// Background thumbnail decoding for picked image files (preview.rs).

pub mod preview;
