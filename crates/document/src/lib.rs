//! docsum document conversion
//!
//! Generated markup to heading/paragraph blocks, and blocks to DOCX

mod export;
mod markup;
mod types;

pub use export::{blocks_to_docx, markup_to_docx, DOCX_MIME};
pub use markup::{convert_markup, strip_markers};
pub use types::{Block, HEADING_LEVEL};
