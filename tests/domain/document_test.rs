use quizdoc::domain::{ContentType, Document};

#[test]
fn given_pdf_mime_when_parsing_then_returns_pdf_content_type() {
    assert_eq!(
        ContentType::from_mime("application/pdf"),
        Some(ContentType::Pdf)
    );
}

#[test]
fn given_unknown_mime_when_parsing_then_returns_none() {
    assert_eq!(ContentType::from_mime("text/plain"), None);
}

#[test]
fn given_pdf_magic_bytes_when_sniffing_then_detects_pdf() {
    assert_eq!(ContentType::sniff(b"%PDF-1.7\n..."), ContentType::Pdf);
}

#[test]
fn given_leading_whitespace_before_magic_when_sniffing_then_detects_pdf() {
    assert_eq!(ContentType::sniff(b"\r\n  %PDF-1.4"), ContentType::Pdf);
}

#[test]
fn given_plain_text_named_pdf_when_uploading_then_is_not_pdf() {
    let document = Document::from_upload("notes.pdf".to_string(), b"hello world");
    assert!(!document.is_pdf());
    assert_eq!(document.size_bytes, 11);
}

#[test]
fn given_empty_bytes_when_sniffing_then_is_unknown() {
    assert_eq!(ContentType::sniff(b""), ContentType::Unknown);
}
