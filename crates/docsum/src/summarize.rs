//! One-shot generation from the command line
//!
//! A single invocation is a single session: generate once, print the result,
//! write the DOCX next to it.

use anyhow::{bail, Context, Result};
use docsum_common::{AppConfig, DocsumError};
use docsum_document::markup_to_docx;
use docsum_llm::OpenAiClient;
use docsum_server::{GenerationWorkflow, Selection, SessionStore};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Options for `docsum summarize`
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    pub input: Option<PathBuf>,
    pub selection: Selection,
    pub out_dir: PathBuf,
}

pub async fn run(config: &AppConfig, options: SummarizeOptions) -> Result<()> {
    let raw_input = read_input(options.input.as_deref())?;

    if let Some(notice) = options.selection.notice() {
        eprintln!("⚠️  {}", notice);
    }

    let client = Arc::new(OpenAiClient::from_config(config)?);
    let sessions = Arc::new(SessionStore::new());
    let workflow = GenerationWorkflow::new(client, sessions.clone());
    let session_id = sessions.create().await;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("AI가 한국어로 내용을 정리하는 중입니다...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = workflow
        .execute(&session_id, &raw_input, options.selection)
        .await;
    spinner.finish_and_clear();

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(DocsumError::InvalidInput(msg)) => bail!(msg),
        Err(e) => bail!("에러 발생: {}", e),
    };

    let session = outcome.session;
    println!("{}", session.generated_text);

    if !session.has_result() {
        eprintln!("모델이 빈 응답을 반환했습니다. 문서를 만들지 않습니다.");
        return Ok(());
    }

    let path = write_document(&options.out_dir, &session.file_name, &session.generated_text)?;
    info!("Document written: {}", path.display());
    eprintln!("📥 워드 파일 저장: {}", path.display());

    Ok(())
}

/// Read the input file, or stdin when no file was given
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Export `text` as DOCX to `out_dir/file_name`
fn write_document(out_dir: &Path, file_name: &str, text: &str) -> Result<PathBuf> {
    let bytes = markup_to_docx(text)?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let path = out_dir.join(file_name);
    std::fs::write(&path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_document_uses_session_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out");

        let path = write_document(&out_dir, "기획서.docx", "### 개요\n내용").unwrap();

        assert_eq!(path, out_dir.join("기획서.docx"));
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "회의록 내용").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "회의록 내용");
        assert!(read_input(Some(&dir.path().join("missing.txt"))).is_err());
    }
}
