//! Document fixtures: in-memory PDFs and on-disk uploads.

use std::path::PathBuf;

use lopdf::content::{Content, Operation};
use lopdf::{Object, Stream, dictionary};
use tempfile::TempDir;

pub const ENGINEER_RESUME: &str = "Experienced Software Engineer skilled in Python, AWS, and \
     distributed systems. Designed REST APIs, data pipelines and CI/CD tooling.";

pub const CHEF_RESUME: &str = "Professional chef with 10 years in French cuisine, pastry, \
     seasonal menu planning and kitchen brigade leadership.";

pub const ENGINEER_JD: &str = "Hiring a Software Engineer with Python, AWS, and distributed \
     systems experience to build REST APIs and data pipelines.";

// One-line variants: the chef resume shares only stop words with the job description.
pub const ENGINEER_RESUME_SHORT: &str =
    "Experienced software engineer skilled in Python and distributed systems";

pub const CHEF_RESUME_SHORT: &str = "Professional chef with 10 years in French cuisine";

pub const CLOUD_ENGINEER_JD: &str =
    "Looking for a software engineer with Python and cloud experience";

/// Builds a PDF with one page per entry; `None` produces a page without text.
pub fn build_pdf(page_texts: &[Option<&str>]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let operations = text
            .map(|t| {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 11.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(t)]),
                    Operation::new("ET", vec![]),
                ]
            })
            .unwrap_or_default();
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            Content { operations }.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("save pdf");
    buf
}

/// Single-page PDF containing `text`.
pub fn text_pdf(text: &str) -> Vec<u8> {
    build_pdf(&[Some(text)])
}

/// Temporary directory that holds uploaded files for the test's lifetime.
pub struct UploadDir {
    dir: TempDir,
}

impl UploadDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).expect("write upload");
        path
    }
}
