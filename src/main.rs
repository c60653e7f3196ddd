use document_uploader::app::DocumentUpload;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 680.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Document Upload System",
        options,
        Box::new(|cc| Box::new(DocumentUpload::new(cc))),
    )
}
