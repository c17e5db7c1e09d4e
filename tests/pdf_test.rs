//! End-to-end tests comparing PDFs through pdfium.
//!
//! Skipped with a message when no pdfium library can be bound. pdfium binds
//! once per process, so a single test drives every check.

#![cfg(feature = "pdf")]

use std::path::Path;

use pagediff::annotate::{TextExtractor, TextLocator};
use pagediff::pdf::{bind_pdfium, compare_files_with, PdfFile};
use pagediff::{CompareConfig, Error, MarkKind};
use pdfium_render::prelude::*;
use tempfile::TempDir;

/// Write a PDF with one text object per line, pages in order.
fn write_pdf(pdfium: &Pdfium, path: &Path, pages: &[&[&str]]) {
    let mut document = pdfium.create_new_pdf().unwrap();
    let font = document.fonts_mut().helvetica();

    for lines in pages {
        let mut page = document
            .pages_mut()
            .create_page_at_end(PdfPagePaperSize::a4())
            .unwrap();
        for (row, line) in lines.iter().enumerate() {
            page.objects_mut()
                .create_text_object(
                    PdfPoints::new(72.0),
                    PdfPoints::new(760.0 - row as f32 * 24.0),
                    *line,
                    font,
                    PdfPoints::new(12.0),
                )
                .unwrap();
        }
    }

    document.save_to_file(path).unwrap();
}

fn annotation_count(pdfium: &Pdfium, path: &Path, page: PdfPageIndex) -> usize {
    let document = pdfium.load_pdf_from_file(path, None).unwrap();
    let page = document.pages().get(page).unwrap();
    page.annotations().len() as usize
}

#[test]
fn test_pdf_documents() {
    let pdfium = match bind_pdfium() {
        Ok(pdfium) => pdfium,
        Err(e) => {
            eprintln!("skipping PDF test: {}", e);
            return;
        }
    };

    check_compare_writes_annotated_copies(&pdfium);
    check_text_and_search(&pdfium);
}

fn check_compare_writes_annotated_copies(pdfium: &Pdfium) {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("before.pdf");
    let b = dir.path().join("after.pdf");
    write_pdf(pdfium, &a, &[&["Quarterly report", "The cat sat on the mat"]]);
    write_pdf(
        pdfium,
        &b,
        &[&["Quarterly report", "The dog sat on the mat"], &["Appendix"]],
    );

    let config = CompareConfig::new(&a, &b).with_output_dir(dir.path().join("out"));
    assert!(config.output_a.ends_with("output_diff_1.pdf"));

    let report = compare_files_with(pdfium, &config).unwrap();

    assert_eq!(report.page_count_a, 1);
    assert_eq!(report.page_count_b, 2);
    assert_eq!(report.a.word_requests, 1);
    assert_eq!(report.a.line_requests, 0);
    assert_eq!(report.a.regions_marked, 1);
    assert_eq!(report.b.word_requests, 1);
    assert_eq!(report.b.whole_pages_marked, 1);

    assert_eq!(annotation_count(pdfium, &config.output_a, 0), 1);
    assert_eq!(annotation_count(pdfium, &config.output_b, 0), 1);
    assert_eq!(annotation_count(pdfium, &config.output_b, 1), 1);
}

fn check_text_and_search(pdfium: &Pdfium) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.pdf");
    write_pdf(pdfium, &path, &[&["the first line", "the second line"]]);

    let doc = PdfFile::open(pdfium, &path).unwrap();
    let pages = doc.extract_pages().unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].lines, vec!["the first line", "the second line"]);

    let regions = doc.locate(0, "the").unwrap();
    assert_eq!(regions.len(), 2);
    // first line sits above the second in top-left coordinates
    assert!(regions[0].y0 < regions[1].y0);

    assert!(doc.locate(0, "missing").unwrap().is_empty());
    assert!(matches!(doc.locate(1, "the"), Err(Error::PageOutOfRange(2, 1))));
    assert_eq!(doc.annotations().count_kind(MarkKind::Word), 0);
}
