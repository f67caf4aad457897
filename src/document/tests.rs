use super::*;
use std::io::Write;

#[test]
fn test_document_kind_labels() {
    assert_eq!(DocumentKind::Resume.as_str(), "resume");
    assert_eq!(DocumentKind::JobDescription.as_str(), "job_description");
    assert_eq!(DocumentKind::Resume.to_string(), "resume");
}

#[test]
fn test_document_kind_allowed_extensions() {
    assert_eq!(DocumentKind::Resume.allowed_extensions(), &["pdf"]);
    assert_eq!(DocumentKind::JobDescription.allowed_extensions(), &["txt"]);
}

#[test]
fn test_document_size() {
    let doc = Document::new(DocumentKind::JobDescription, b"hello".to_vec());
    assert_eq!(doc.size(), 5);
    assert!(!doc.is_empty());
    assert_eq!(doc.kind(), DocumentKind::JobDescription);

    let empty = Document::new(DocumentKind::Resume, Vec::new());
    assert!(empty.is_empty());
    assert_eq!(empty.size(), 0);
}

#[test]
fn test_document_debug_hides_payload() {
    let doc = Document::new(DocumentKind::Resume, b"secret resume bytes".to_vec());
    let debug_str = format!("{:?}", doc);
    assert!(debug_str.contains("Resume"));
    assert!(debug_str.contains("size: 19"));
    assert!(!debug_str.contains("secret"));
}

#[test]
fn test_document_from_path_reads_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("tempfile");
    file.write_all(b"Senior Rust engineer").expect("write");

    let doc = Document::from_path(DocumentKind::JobDescription, file.path()).expect("should load");
    assert_eq!(doc.bytes(), b"Senior Rust engineer");
}

#[test]
fn test_document_from_path_extension_is_case_insensitive() {
    let file = tempfile::Builder::new()
        .suffix(".PDF")
        .tempfile()
        .expect("tempfile");

    let doc = Document::from_path(DocumentKind::Resume, file.path()).expect("should load");
    assert!(doc.is_empty());
}

#[test]
fn test_document_from_path_rejects_wrong_extension() {
    let file = tempfile::Builder::new()
        .suffix(".docx")
        .tempfile()
        .expect("tempfile");

    let err = Document::from_path(DocumentKind::Resume, file.path()).unwrap_err();
    match err {
        ExtractionError::UnsupportedFileType {
            document,
            extension,
        } => {
            assert_eq!(document, DocumentKind::Resume);
            assert_eq!(extension, "docx");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_document_from_path_missing_file() {
    let err =
        Document::from_path(DocumentKind::JobDescription, "/nonexistent/dir/job.txt").unwrap_err();
    assert!(matches!(err, ExtractionError::ExtractionFailed { .. }));
    assert!(err.to_string().contains("/nonexistent/dir/job.txt"));
}

#[test]
fn test_document_from_path_rejects_oversized_file_before_reading() {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("tempfile");
    file.write_all(&[b'a'; 64]).expect("write");

    let err = Document::from_path_with_limit(DocumentKind::JobDescription, file.path(), 63)
        .unwrap_err();
    match err {
        ExtractionError::OversizedDocument { size, limit } => {
            assert_eq!(size, 64);
            assert_eq!(limit, 63);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let doc = Document::from_path_with_limit(DocumentKind::JobDescription, file.path(), 64)
        .expect("file at the limit should load");
    assert_eq!(doc.size(), 64);
}

#[test]
fn test_document_from_path_applies_default_limit() {
    let file = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .expect("tempfile");
    file.as_file()
        .set_len(crate::constants::DEFAULT_MAX_DOCUMENT_BYTES + 1)
        .expect("grow file");

    let err = Document::from_path(DocumentKind::Resume, file.path()).unwrap_err();
    assert!(matches!(err, ExtractionError::OversizedDocument { .. }));
}

#[test]
fn test_extracted_text_rejects_blank() {
    assert!(ExtractedText::new("").is_none());
    assert!(ExtractedText::new("  \n\t ").is_none());
    assert!(ExtractedText::new(" a ").is_some());
}

#[test]
fn test_extracted_text_trimmed_char_count() {
    let text = ExtractedText::new("  héllo  ").unwrap();
    assert_eq!(text.trimmed_char_count(), 5);
}

#[test]
fn test_normalized_text_word_count() {
    let text = NormalizedText::from_normalized("rust engineer with python".to_string());
    assert_eq!(text.word_count(), 4);

    let single = NormalizedText::from_normalized("rust".to_string());
    assert_eq!(single.word_count(), 1);
}

#[test]
fn test_preview_short_text_is_unchanged() {
    assert_eq!(preview("short", 10), "short");
    assert_eq!(preview("exact", 5), "exact");
}

#[test]
fn test_preview_truncates_with_ellipsis() {
    assert_eq!(preview("abcdefghij", 4), "abcd...");
}

#[test]
fn test_preview_counts_characters_not_bytes() {
    assert_eq!(preview("ééééé", 2), "éé...");
}

#[test]
fn test_extracted_text_preview() {
    let text = ExtractedText::new("a".repeat(1500)).unwrap();
    let shown = text.preview(1000);
    assert_eq!(shown.len(), 1003);
    assert!(shown.ends_with("..."));
}
