use docsum_common::{DocsumError, Result};
use docx_rs::{Docx, Paragraph, Run, Style, StyleType};
use std::io::Cursor;
use tracing::debug;

use crate::markup::convert_markup;
use crate::types::Block;

/// MIME type of the exported document
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const HEADING_STYLE_ID: &str = "Heading2";

/// Serialize blocks into an in-memory DOCX file
pub fn blocks_to_docx(blocks: &[Block]) -> Result<Vec<u8>> {
    let heading_style = Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
        .name("Heading 2")
        .size(26)
        .bold();

    let docx = blocks
        .iter()
        .fold(Docx::new().add_style(heading_style), |docx, block| {
            let paragraph = Paragraph::new().add_run(Run::new().add_text(block.text()));
            let paragraph = match block {
                Block::Heading { .. } => paragraph.style(HEADING_STYLE_ID),
                Block::Paragraph { .. } => paragraph,
            };
            docx.add_paragraph(paragraph)
        });

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| DocsumError::document(format!("Failed to write DOCX: {}", e)))?;

    let bytes = buffer.into_inner();
    debug!("Packed {} blocks into {} bytes", blocks.len(), bytes.len());
    Ok(bytes)
}

/// Convert generated text straight to DOCX bytes
pub fn markup_to_docx(text: &str) -> Result<Vec<u8>> {
    blocks_to_docx(&convert_markup(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut xml = String::new();
        part.read_to_string(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_docx_contains_blocks_in_order() {
        let bytes = markup_to_docx("### 핵심 논의\n납기 지연 논의\n### 남은 과제\n일정 재조율").unwrap();
        assert_eq!(&bytes[..2], b"PK");

        let xml = read_part(&bytes, "word/document.xml");
        let positions: Vec<usize> = ["핵심 논의", "납기 지연 논의", "남은 과제", "일정 재조율"]
            .iter()
            .map(|text| xml.find(text).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(xml.matches(HEADING_STYLE_ID).count(), 2);
    }

    #[test]
    fn test_heading_style_is_defined() {
        let bytes = blocks_to_docx(&[Block::heading("요약")]).unwrap();
        let styles = read_part(&bytes, "word/styles.xml");
        assert!(styles.contains("Heading 2"));
    }

    #[test]
    fn test_empty_document_is_still_valid_zip() {
        let bytes = blocks_to_docx(&[]).unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("w:body"));
    }
}
