/*!
 * Tests for export artifact serialization
 */

use std::fs;

use crate::common::{TEST_VIDEO_ID, create_temp_dir};
use ytdigest::export::{Exporter, transliterate};

/// Test that both artifacts land in the output directory
#[test]
fn test_write_withBothArtifacts_shouldCreateBothFiles() {
    let temp_dir = create_temp_dir().unwrap();
    let exporter = Exporter::new(90);

    let text = exporter.to_text("A digest with **marked** words.", TEST_VIDEO_ID);
    let pdf = exporter
        .to_pdf("A digest with **marked** words.", TEST_VIDEO_ID)
        .unwrap();

    let text_path = exporter.write(&text, temp_dir.path()).unwrap();
    let pdf_path = exporter.write(&pdf, temp_dir.path()).unwrap();

    assert_eq!(
        text_path.file_name().unwrap().to_str().unwrap(),
        "dQw4w9WgXcQ_summary.txt"
    );
    assert_eq!(
        pdf_path.file_name().unwrap().to_str().unwrap(),
        "dQw4w9WgXcQ_summary.pdf"
    );
    assert!(fs::read(&pdf_path).unwrap().starts_with(b"%PDF"));
}

/// Test that the text artifact keeps the summary byte-for-byte
#[test]
fn test_write_textArtifact_shouldPreserveContent() {
    let temp_dir = create_temp_dir().unwrap();
    let exporter = Exporter::new(90);

    let summary = "Le **résumé** de la vidéo.";
    let artifact = exporter.to_text(summary, TEST_VIDEO_ID);
    let path = exporter.write(&artifact, temp_dir.path()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), summary);
}

/// Test that an empty summary still exports successfully
#[test]
fn test_export_withEmptySummary_shouldStillProduceArtifacts() {
    let temp_dir = create_temp_dir().unwrap();
    let exporter = Exporter::new(90);

    let text = exporter.to_text("", TEST_VIDEO_ID);
    let pdf = exporter.to_pdf("", TEST_VIDEO_ID).unwrap();

    let text_path = exporter.write(&text, temp_dir.path()).unwrap();
    let pdf_path = exporter.write(&pdf, temp_dir.path()).unwrap();

    assert_eq!(fs::metadata(&text_path).unwrap().len(), 0);
    assert!(fs::read(&pdf_path).unwrap().starts_with(b"%PDF"));
}

/// Test that smart typography survives as readable ASCII in the PDF path
#[test]
fn test_transliterate_withSmartTypography_shouldDowngradeGracefully() {
    let input = "He said \u{201C}let\u{2019}s go\u{201D} \u{2014} then\u{2026}";
    assert_eq!(transliterate(input), "He said \"let's go\" - then...");
}

/// Test that a PDF with non-Latin-1 text still serializes
#[test]
fn test_toPdf_withNonLatin1Summary_shouldSerialize() {
    let exporter = Exporter::new(90);
    let artifact = exporter
        .to_pdf("Emoji \u{1F600} and \u{4E2D}\u{6587} become placeholders.", TEST_VIDEO_ID)
        .unwrap();
    assert!(artifact.bytes.starts_with(b"%PDF"));
}
