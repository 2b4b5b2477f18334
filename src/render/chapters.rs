//! Chapter grouping and per-chapter HTML export.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use regex::Regex;

use crate::error::Result;
use crate::model::Document;

/// A maximal run of consecutive page documents forming one chapter.
///
/// Chapters start at every document carrying an h1 header; the very first
/// non-empty page opens chapter one even without a header.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter<'a> {
    /// Chapter title, taken from the headers of the opening document
    pub title: String,
    /// Pages of the chapter, in processing order
    pub documents: Vec<&'a Document>,
}

/// Group page documents into chapters.
///
/// Documents that produced no elements at all are skipped.
pub fn group_chapters(documents: &[Document]) -> Vec<Chapter<'_>> {
    let mut chapters: Vec<Chapter> = Vec::new();

    for document in documents {
        if document.is_empty() {
            continue;
        }
        if document.has_title() || chapters.is_empty() {
            chapters.push(Chapter {
                title: chapter_title(document),
                documents: vec![document],
            });
        } else if let Some(open) = chapters.last_mut() {
            open.documents.push(document);
        }
    }

    chapters
}

/// Title of a chapter-opening document: its first h1 header, falling back to
/// the first header of any level, then to "untitled".
fn chapter_title(document: &Document) -> String {
    let headers = document.headers();
    headers
        .iter()
        .find(|h| h.level == crate::model::HeaderLevel::H1)
        .or_else(|| headers.first())
        .map(|h| h.text())
        .unwrap_or_else(|| "untitled".to_string())
}

/// File-name slug of a chapter title: lowercase, whitespace collapsed to
/// hyphens, path-unsafe characters stripped.
pub fn slug(title: &str) -> String {
    let whitespace = Regex::new(r"\s+").unwrap();
    let unsafe_chars = Regex::new(r#"[/\\:*?"<>|]"#).unwrap();

    let lowered = title.trim().to_lowercase();
    let hyphened = whitespace.replace_all(&lowered, "-");
    unsafe_chars.replace_all(&hyphened, "").into_owned()
}

/// Write one HTML file per chapter under `out_dir`.
///
/// Files are named `{index:02}-{slug}.html`. Directory creation is
/// idempotent. Returns the written paths in chapter order.
pub fn write_chapters(out_dir: &Path, documents: &[Document], lang: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    for (index, chapter) in group_chapters(documents).iter().enumerate() {
        let file_name = format!("{:02}-{}.html", index, slug(&chapter.title));
        info!("writing chapter {file_name}");

        let path = out_dir.join(&file_name);
        fs::write(&path, chapter_html(chapter, lang))?;
        written.push(path);
    }

    Ok(written)
}

/// Minimal document shell around the chapter's concatenated element HTML.
pub fn chapter_html(chapter: &Chapter<'_>, lang: &str) -> String {
    let mut html = format!(
        "<!doctype html><html lang=\"{}\"><head><meta charset=\"UTF-8\"></head><body>",
        lang
    );
    for document in &chapter.documents {
        html.push_str(&document.to_html());
    }
    html.push_str("</body></html>");
    html
}
