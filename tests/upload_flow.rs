//! End-to-end tests for the upload widget's core flow: drop a batch, watch it
//! get validated and tracked, preview it, remove it.
//!
//! These drive the same `ingest` path the UI uses, with a headless egui
//! context standing in for the running app.

use std::io::Write;

use eframe::egui;

use document_uploader::intake::{
    ingest, FileCandidate, FileRegistry, IntakeError, MAX_FILES_LIMIT, PROCESSING_DELAY,
};
use document_uploader::preview::{resolve, PreviewContent, PreviewRequest};

fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([90, 90, 200, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn drop_of(names: &[&str]) -> Vec<Result<FileCandidate, String>> {
    names
        .iter()
        .map(|name| {
            let bytes = if name.ends_with(".png") {
                png_bytes()
            } else {
                b"content".to_vec()
            };
            Ok(FileCandidate::in_memory(*name, bytes))
        })
        .collect()
}

#[test]
fn mixed_drop_keeps_the_valid_subset_in_order() {
    let ctx = egui::Context::default();
    let mut registry = FileRegistry::new();

    let outcome = ingest(&mut registry, &ctx, drop_of(&["a.pdf", "b.exe", "c.png"]));

    assert_eq!(outcome.accepted.len(), 2);
    let names: Vec<&str> = registry.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["a.pdf", "c.png"]);

    let message = outcome.error.unwrap().to_string();
    assert!(message.contains("1 file(s) not supported"));

    assert!(registry.records()[0].preview_texture.is_none());
    assert!(registry.records()[1].preview_texture.is_some());
}

#[test]
fn sixth_file_is_refused_with_exact_counts() {
    let ctx = egui::Context::default();
    let mut registry = FileRegistry::new();
    ingest(
        &mut registry,
        &ctx,
        drop_of(&["1.txt", "2.txt", "3.txt", "4.txt"]),
    );

    let outcome = ingest(&mut registry, &ctx, drop_of(&["5.txt", "6.txt"]));

    assert_eq!(registry.len(), 4);
    assert_eq!(
        outcome.error,
        Some(IntakeError::CountExceeded {
            current: 4,
            attempted: 2,
            limit: MAX_FILES_LIMIT,
        })
    );
}

#[test]
fn batch_lifecycle_flips_processing_per_batch() {
    let ctx = egui::Context::default();
    let mut registry = FileRegistry::new();

    let first = ingest(&mut registry, &ctx, drop_of(&["a.txt"])).accepted;
    let second = ingest(&mut registry, &ctx, drop_of(&["b.txt"])).accepted;
    assert!(registry.records().iter().all(|r| r.processing));

    // What the first batch's timer does when its delay elapses.
    registry.mark_processed(&first);

    assert!(!registry.get(first[0]).unwrap().processing);
    assert!(registry.get(second[0]).unwrap().processing);
}

#[test]
fn processing_delay_is_two_seconds() {
    assert_eq!(PROCESSING_DELAY.as_millis(), 2000);
}

#[test]
fn text_preview_reads_the_literal_file_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"hello").unwrap();

    let ctx = egui::Context::default();
    let mut registry = FileRegistry::new();
    let outcome = ingest(
        &mut registry,
        &ctx,
        vec![FileCandidate::from_path(&path)],
    );
    let id = outcome.accepted[0];

    match resolve(registry.get(id).unwrap()) {
        PreviewRequest::TextRead { source, name, .. } => {
            assert_eq!(name, "hello.txt");
            let rt = tokio::runtime::Runtime::new().unwrap();
            assert_eq!(rt.block_on(source.read_text()).unwrap(), "hello");
        }
        _ => panic!("text records must resolve to a deferred read"),
    }
}

#[test]
fn unsupported_preview_is_a_placeholder() {
    let ctx = egui::Context::default();
    let mut registry = FileRegistry::new();
    let id = ingest(&mut registry, &ctx, drop_of(&["report.docx"])).accepted[0];

    match resolve(registry.get(id).unwrap()) {
        PreviewRequest::Ready(PreviewContent::Unavailable { detail, .. }) => {
            assert!(detail.contains(".docx"));
        }
        _ => panic!("expected a placeholder preview"),
    }
}

#[test]
fn removal_is_idempotent_and_frees_the_preview() {
    let ctx = egui::Context::default();
    let baseline = ctx.tex_manager().read().num_allocated();
    let mut registry = FileRegistry::new();

    let id = ingest(&mut registry, &ctx, drop_of(&["c.png"])).accepted[0];
    assert_eq!(ctx.tex_manager().read().num_allocated(), baseline + 1);

    assert!(registry.remove(id));
    assert_eq!(ctx.tex_manager().read().num_allocated(), baseline);
    assert!(!registry.remove(id));
}

#[test]
fn unreadable_path_is_skipped_and_counted() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("ghost.txt");

    let ctx = egui::Context::default();
    let mut registry = FileRegistry::new();
    let mut batch = vec![FileCandidate::from_path(&missing)];
    batch.extend(drop_of(&["real.txt"]));

    let outcome = ingest(&mut registry, &ctx, batch);

    assert_eq!(registry.len(), 1);
    assert_eq!(
        outcome.error,
        Some(IntakeError::DescriptorResolutionFailed { count: 1 })
    );
}
