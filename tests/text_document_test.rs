//! End-to-end tests comparing plain-text documents on disk.

use std::fs;

use pagediff::render::from_json;
use pagediff::{
    compare_files, Color, CompareConfig, CompareOptions, Error, MarkKind, MarkShape, PageDiff,
    TextLayout, TextOptions,
};
use tempfile::TempDir;

const BEFORE: &str = "Quarterly Report\nThe cat sat on the mat\nRevenue grew\n\x0cAppendix\nold note\n";
const AFTER: &str =
    "Quarterly Report\nThe dog sat on the mat\nRevenue grew\n\x0cAppendix\n\x0cNew page\nextra\n";

fn write_inputs(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let a = dir.path().join("before.txt");
    let b = dir.path().join("after.txt");
    fs::write(&a, BEFORE).unwrap();
    fs::write(&b, AFTER).unwrap();
    (a, b)
}

#[test]
fn test_compare_files_writes_both_reports() {
    let dir = TempDir::new().unwrap();
    let (a, b) = write_inputs(&dir);

    let config = CompareConfig::new(&a, &b).with_output_dir(dir.path().join("out"));
    let report = compare_files(&config).unwrap();

    assert_eq!(report.page_count_a, 2);
    assert_eq!(report.page_count_b, 3);
    assert_eq!(report.a.word_requests, 1);
    assert_eq!(report.a.line_requests, 1);
    assert_eq!(report.b.word_requests, 1);
    assert_eq!(report.b.whole_pages_marked, 1);

    let out_a = fs::read_to_string(dir.path().join("out/output_diff_1.json")).unwrap();
    let out_b = fs::read_to_string(dir.path().join("out/output_diff_2.json")).unwrap();
    let report_a = from_json(&out_a).unwrap();
    let report_b = from_json(&out_b).unwrap();

    assert_eq!(report_a.source.as_deref(), Some(a.as_path()));
    assert_eq!(report_a.page_count, 2);
    assert_eq!(report_a.count_kind(MarkKind::Word), 1);
    assert_eq!(report_a.count_kind(MarkKind::WholeLine), 1);
    assert_eq!(report_a.page(1).count(), 1);

    assert_eq!(report_b.page_count, 3);
    assert_eq!(report_b.count_kind(MarkKind::WholePage), 1);
    let whole_page: Vec<_> = report_b.page(2).collect();
    assert_eq!(whole_page.len(), 1);
    assert_eq!(whole_page[0].rect, report_b.page_size.rect());
    assert_eq!(whole_page[0].style.shape, MarkShape::Rectangle);
}

#[test]
fn test_word_mark_geometry_and_style() {
    let dir = TempDir::new().unwrap();
    let (a, b) = write_inputs(&dir);
    let out_a = dir.path().join("a.json");
    let out_b = dir.path().join("b.json");

    PageDiff::new()
        .compare_files(&a, &b, &out_a, &out_b)
        .unwrap();

    let report = from_json(&fs::read_to_string(&out_a).unwrap()).unwrap();
    let word = report
        .annotations
        .iter()
        .find(|ann| ann.kind == MarkKind::Word)
        .unwrap();

    // "cat" starts at column 4 of the second line
    let layout = TextLayout::default();
    assert_eq!(word.rect, layout.span_rect(1, 4, 3));
    assert_eq!(word.style.color, Color::RED);
    assert_eq!(word.style.width, 1.5);
}

#[test]
fn test_line_only_and_compact_output() {
    let dir = TempDir::new().unwrap();
    let (a, b) = write_inputs(&dir);
    let out_a = dir.path().join("a.json");
    let out_b = dir.path().join("b.json");

    let report = PageDiff::new()
        .line_only()
        .sequential()
        .compact_json()
        .compare_files(&a, &b, &out_a, &out_b)
        .unwrap();

    assert_eq!(report.a.word_requests, 0);
    assert_eq!(report.a.line_requests, 2);

    let json = fs::read_to_string(&out_a).unwrap();
    assert!(!json.contains('\n'));
    let parsed = from_json(&json).unwrap();
    assert_eq!(parsed.count_kind(MarkKind::WholeLine), 2);
}

#[test]
fn test_identical_files() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, BEFORE).unwrap();
    fs::write(&b, BEFORE).unwrap();

    let config = CompareConfig::new(&a, &b).with_output_dir(dir.path());
    let report = compare_files(&config).unwrap();

    assert!(report.is_identical());
    let saved = from_json(&fs::read_to_string(&config.output_a).unwrap()).unwrap();
    assert!(saved.annotations.is_empty());
}

#[test]
fn test_collapse_whitespace_option() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "total:\t\t42 units").unwrap();
    fs::write(&b, "total: 42 units").unwrap();

    let config = CompareConfig::new(&a, &b)
        .with_output_dir(dir.path())
        .with_compare_options(CompareOptions::new().line_only())
        .with_text_options(TextOptions::new().with_collapse_whitespace(true));
    let report = compare_files(&config).unwrap();

    assert!(report.is_identical());
}

#[test]
fn test_pdf_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.pdf");
    let b = dir.path().join("b.txt");
    fs::write(&a, b"%PDF-1.7\n%binary").unwrap();
    fs::write(&b, "text").unwrap();

    let config = CompareConfig::new(&a, &b).with_output_dir(dir.path());
    let result = compare_files(&config);

    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    assert!(!config.output_a.exists());
}

#[test]
fn test_invalid_utf8_is_a_decode_error() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, [0x66, 0x6f, 0xff, 0xfe]).unwrap();
    fs::write(&b, "fo").unwrap();

    let config = CompareConfig::new(&a, &b).with_output_dir(dir.path());
    match compare_files(&config) {
        Err(Error::Decode { path, .. }) => assert_eq!(path, a),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[test]
fn test_compare_texts_in_memory() {
    let (report, a, b) = PageDiff::new()
        .compare_texts("the end of the line", "the end of a line")
        .unwrap();

    // "the" occurs twice on the page and both occurrences are marked
    assert_eq!(report.a.word_requests, 1);
    assert_eq!(report.a.regions_marked, 2);
    assert_eq!(a.annotations().count_kind(MarkKind::Word), 2);

    assert_eq!(report.b.word_requests, 1);
    assert_eq!(b.annotations().count_kind(MarkKind::Word), 1);
}
