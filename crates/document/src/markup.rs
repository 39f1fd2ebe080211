//! Markdown-ish model output to document blocks
//!
//! This is plain substring replacement, not a markdown parser. Text that
//! legitimately contains `### ` or `**` loses those characters.

use tracing::debug;

use crate::types::Block;

/// Third-level heading marker removed everywhere
const HEADING_MARKER: &str = "### ";

/// Bold delimiter removed everywhere
const BOLD_MARKER: &str = "**";

/// Remove every `### ` and `**` from the text
pub fn strip_markers(text: &str) -> String {
    text.replace(HEADING_MARKER, "").replace(BOLD_MARKER, "")
}

/// Convert generated text into ordered heading/paragraph blocks.
///
/// Heading detection looks at the raw line, before `### ` is stripped, so
/// `### Summary` is a heading. Lines that are blank once markers are
/// removed are skipped. Heading text has every `#` removed, which may leave
/// an empty heading.
pub fn convert_markup(text: &str) -> Vec<Block> {
    let blocks: Vec<Block> = text
        .split('\n')
        .filter_map(|raw| {
            let line = strip_markers(raw);
            if line.trim().is_empty() {
                return None;
            }

            if raw.starts_with('#') {
                Some(Block::heading(line.replace('#', "").trim()))
            } else {
                Some(Block::paragraph(line.trim()))
            }
        })
        .collect();

    debug!("Converted {} chars into {} blocks", text.len(), blocks.len());
    blocks
}
