/*!
 * Export artifact serialization.
 *
 * Turns a highlighted summary into the two deliverables: a UTF-8 text
 * file and a paginated A4 PDF. PDF text is restricted to the built-in
 * Helvetica font, so characters outside Latin-1 are transliterated to
 * close ASCII equivalents first.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::EncodingError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 11.0;
const LINE_HEIGHT_MM: f32 = 6.0;

/// A serialized export ready to be written to disk
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// File name including extension
    pub file_name: String,

    /// Serialized file content
    pub bytes: Vec<u8>,
}

/// Serializes summaries into text and PDF artifacts
#[derive(Debug, Clone)]
pub struct Exporter {
    /// Fixed line width for the PDF body reflow
    line_width: usize,
}

impl Exporter {
    /// Create an exporter with the given body line width
    pub fn new(line_width: usize) -> Self {
        Self { line_width }
    }

    /// Serialize the summary as a UTF-8 text artifact
    pub fn to_text(&self, summary: &str, video_id: &str) -> ExportArtifact {
        ExportArtifact {
            file_name: format!("{}_summary.txt", video_id),
            bytes: summary.as_bytes().to_vec(),
        }
    }

    /// Serialize the summary as a paginated A4 PDF artifact
    pub fn to_pdf(&self, summary: &str, video_id: &str) -> Result<ExportArtifact> {
        let title = format!("Video digest: {}", video_id);
        let body = encode_for_pdf(summary)?;

        let (doc, page, layer) = PdfDocument::new(
            &title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .context("Failed to register the built-in PDF font")?;
        let bold_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .context("Failed to register the built-in bold PDF font")?;

        let mut current_layer = doc.get_page(page).get_layer(layer);
        let mut cursor_y = PAGE_HEIGHT_MM - MARGIN_MM;

        current_layer.use_text(
            &title,
            TITLE_FONT_SIZE,
            Mm(MARGIN_MM),
            Mm(cursor_y),
            &bold_font,
        );
        cursor_y -= 2.0 * LINE_HEIGHT_MM;

        for line in reflow(&body, self.line_width) {
            if cursor_y < MARGIN_MM {
                let (next_page, next_layer) = doc.add_page(
                    Mm(PAGE_WIDTH_MM),
                    Mm(PAGE_HEIGHT_MM),
                    "Layer 1",
                );
                current_layer = doc.get_page(next_page).get_layer(next_layer);
                cursor_y = PAGE_HEIGHT_MM - MARGIN_MM;
            }

            current_layer.use_text(&line, BODY_FONT_SIZE, Mm(MARGIN_MM), Mm(cursor_y), &font);
            cursor_y -= LINE_HEIGHT_MM;
        }

        let bytes = doc
            .save_to_bytes()
            .context("Failed to serialize the PDF document")?;

        debug!("Serialized {}-byte PDF for '{}'", bytes.len(), video_id);

        Ok(ExportArtifact {
            file_name: format!("{}_summary.pdf", video_id),
            bytes,
        })
    }

    /// Write an artifact into the given directory, creating it if needed
    pub fn write(&self, artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {:?}", dir))?;

        let path = dir.join(&artifact.file_name);
        fs::write(&path, &artifact.bytes)
            .with_context(|| format!("Failed to write export artifact {:?}", path))?;

        info!("Wrote {} ({} bytes)", path.display(), artifact.bytes.len());

        Ok(path)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(90)
    }
}

/// Replace common non-Latin-1 typography with ASCII equivalents.
///
/// Anything still outside Latin-1 after substitution becomes '?', so the
/// built-in WinAnsi fonts can always render the result.
pub fn transliterate(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' => "'".to_string(),
            '\u{201C}' | '\u{201D}' | '\u{201E}' => "\"".to_string(),
            '\u{2013}' | '\u{2014}' | '\u{2015}' => "-".to_string(),
            '\u{2026}' => "...".to_string(),
            '\u{00A0}' => " ".to_string(),
            c if (c as u32) > 0x00FF => "?".to_string(),
            c => c.to_string(),
        })
        .collect()
}

// Transliteration maps every char into Latin-1, so this only fails if a
// substitution rule is wrong. The check keeps the PDF path honest.
fn encode_for_pdf(text: &str) -> Result<String, EncodingError> {
    let transliterated = transliterate(text);

    for (position, character) in transliterated.chars().enumerate() {
        if (character as u32) > 0x00FF {
            return Err(EncodingError::UnsupportedCharacter {
                character,
                position,
            });
        }
    }

    Ok(transliterated)
}

/// Reflow text into lines no wider than `width` characters, breaking on
/// word boundaries. Words longer than the width get their own line.
fn reflow(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() {
            current.push_str(word);
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
