use eframe::egui::{self, Align, Color32, RichText};

use super::DocumentUpload;
use crate::intake::{FileId, FileKind, MAX_FILES_LIMIT};
use crate::preview::PreviewContent;
use crate::utils::file_size::format_size;

impl DocumentUpload {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Document Upload System");
                });
                ui.add_space(20.0);

                self.render_drop_zone(ui);
                ui.add_space(10.0);
                self.render_error_banner(ui);
                ui.add_space(10.0);
                self.render_file_list(ui);
                ui.add_space(20.0);
            });
        });

        self.render_preview_modal(ctx);
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let drag_active = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        let stroke = if drag_active {
            egui::Stroke::new(2.0, Color32::from_rgb(59, 130, 246))
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke
        };

        egui::Frame::none()
            .stroke(stroke)
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::symmetric(16.0, 24.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📤").size(32.0));
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(if drag_active {
                            "Drop the files here, we are ready!"
                        } else {
                            "Drag and drop files here, or click to browse"
                        })
                        .strong(),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!(
                            "We can upload up to {} files (PDF, DOCX, TXT, PNG, JPG)",
                            MAX_FILES_LIMIT
                        ))
                        .color(ui.visuals().weak_text_color()),
                    );
                    ui.add_space(10.0);
                    if ui.button("📁 Browse Files").clicked() {
                        let ctx = ui.ctx().clone();
                        self.browse_for_files(&ctx);
                    }
                });
            });
    }

    fn render_error_banner(&mut self, ui: &mut egui::Ui) {
        let Some(error) = &self.state.error_message else {
            return;
        };
        let message = error.to_string();
        let mut dismissed = false;

        egui::Frame::none()
            .fill(ui.style().visuals.extreme_bg_color)
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::symmetric(10.0, 8.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.colored_label(
                        Color32::from_rgb(220, 50, 50),
                        RichText::new("Oops!").strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("❌").on_hover_text("Dismiss").clicked() {
                            dismissed = true;
                        }
                        ui.with_layout(egui::Layout::left_to_right(Align::Center), |ui| {
                            ui.add(
                                egui::Label::new(
                                    RichText::new(message).color(Color32::from_rgb(220, 50, 50)),
                                )
                                .wrap(true),
                            );
                        });
                    });
                });
            });

        if dismissed {
            self.state.dismiss_error();
        }
    }

    fn render_file_list(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Uploaded Files ({})", self.registry.len())).strong());
            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new("Click on a file to preview")
                        .small()
                        .color(ui.visuals().weak_text_color()),
                );
            });
        });
        ui.add_space(6.0);

        if self.registry.is_empty() {
            egui::Frame::none()
                .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                .rounding(egui::Rounding::same(6.0))
                .inner_margin(egui::Margin::symmetric(10.0, 18.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label("No files uploaded yet");
                        ui.label(
                            RichText::new("Upload files to see them listed here")
                                .small()
                                .color(ui.visuals().weak_text_color()),
                        );
                    });
                });
            return;
        }

        let mut to_remove: Option<FileId> = None;
        let mut to_preview: Option<FileId> = None;

        egui::Frame::none()
            .fill(ui.style().visuals.extreme_bg_color)
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::symmetric(10.0, 8.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                for (index, record) in self.registry.records().iter().enumerate() {
                    if index > 0 {
                        ui.separator();
                    }
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&record.name).strong());
                            ui.label(
                                RichText::new(format!(
                                    "{} · {}",
                                    format_size(record.size_bytes),
                                    record.mime_type
                                ))
                                .small()
                                .color(ui.visuals().weak_text_color()),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                            if ui.button("🗑").on_hover_text("Remove file").clicked() {
                                to_remove = Some(record.id);
                            }
                            if record.processing {
                                ui.spinner();
                                ui.colored_label(Color32::from_rgb(150, 150, 150), "Processing...");
                            } else {
                                let reading = self.state.loading_preview == Some(record.id);
                                if reading {
                                    ui.spinner();
                                }
                                if ui
                                    .add_enabled(!reading, egui::Button::new("Preview"))
                                    .clicked()
                                {
                                    to_preview = Some(record.id);
                                }
                                ui.colored_label(Color32::from_rgb(0, 180, 0), "✅ Ready");
                                if record.kind == FileKind::Image
                                    && record.preview_texture.is_none()
                                {
                                    ui.colored_label(
                                        Color32::from_rgb(150, 150, 150),
                                        "(no preview)",
                                    );
                                }
                            }
                        });
                    });
                }
            });

        if let Some(id) = to_remove {
            self.remove_file(id);
        } else if let Some(id) = to_preview {
            let ctx = ui.ctx().clone();
            self.request_preview(&ctx, id);
        }
    }

    fn render_preview_modal(&mut self, ctx: &egui::Context) {
        let Some(content) = &self.state.preview else {
            return;
        };
        let mut open = true;
        let mut close_clicked = false;

        egui::Window::new("File Preview")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_max_width(520.0);
                ui.label(RichText::new(content.name()).strong());
                ui.add_space(8.0);

                match content {
                    PreviewContent::Image { texture, .. } => {
                        let size = scaled_to_fit(texture.size_vec2(), egui::vec2(480.0, 360.0));
                        ui.add(egui::Image::new(egui::load::SizedTexture::new(
                            texture.id(),
                            size,
                        )));
                    }
                    PreviewContent::Text { body, .. } => {
                        egui::ScrollArea::vertical()
                            .max_height(320.0)
                            .show(ui, |ui| {
                                ui.add(
                                    egui::Label::new(RichText::new(body).monospace()).wrap(true),
                                );
                            });
                    }
                    PreviewContent::Unavailable { detail, .. } => {
                        ui.label(detail);
                    }
                }

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });

        if !open || close_clicked {
            self.state.close_preview();
        }
    }
}

/// Shrinks `size` to fit inside `max` while keeping its aspect ratio; never
/// scales up.
fn scaled_to_fit(size: egui::Vec2, max: egui::Vec2) -> egui::Vec2 {
    let scale = (max.x / size.x).min(max.y / size.y).min(1.0);
    size * scale
}
