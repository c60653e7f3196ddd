use eframe::egui;

use crate::intake::{FileId, FileSource};

/// Decodes an image file and uploads it as an egui texture. Returns `None`
/// when the bytes cannot be read or are not a decodable image; the record is
/// then listed without a preview.
pub fn load_preview_texture(
    ctx: &egui::Context,
    id: FileId,
    name: &str,
    source: &FileSource,
) -> Option<egui::TextureHandle> {
    let bytes = match source.read_bytes() {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Could not read {} for its preview: {}", name, e);
            return None;
        }
    };

    let decoded = match image::load_from_memory(&bytes) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("Could not decode {} as an image: {}", name, e);
            return None;
        }
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    let color_image = egui::ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        rgba.as_raw(),
    );

    Some(ctx.load_texture(
        format!("preview_{}", id),
        color_image,
        egui::TextureOptions::LINEAR,
    ))
}
