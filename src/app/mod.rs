mod state;
mod ui;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use eframe::{egui, App};

use crate::intake::{
    self, FileCandidate, FileId, FileRegistry, FileSource, IntakeError, IntakeEvent,
    ACCEPTED_EXTENSIONS, PROCESSING_DELAY,
};
use crate::preview::{self, PreviewContent, PreviewRequest};
pub use state::WidgetState;

/// The upload widget: registry plus UI state, mutated only on the UI thread.
/// Detached timer and read tasks report back over the channel and are drained
/// at the top of every frame.
pub struct DocumentUpload {
    registry: FileRegistry,
    state: WidgetState,
    events_tx: Sender<IntakeEvent>,
    events_rx: Receiver<IntakeEvent>,
    /// Cancellation flags for in-flight text reads, keyed by record id so
    /// removing a record abandons its read.
    pending_reads: HashMap<FileId, Arc<AtomicBool>>,
}

impl DocumentUpload {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        println!("Initializing Document Upload System");
        let (events_tx, events_rx) = channel();
        Self {
            registry: FileRegistry::new(),
            state: WidgetState::default(),
            events_tx,
            events_rx,
            pending_reads: HashMap::new(),
        }
    }

    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        let batch = dropped.iter().map(FileCandidate::from_dropped).collect();
        self.ingest_batch(ctx, batch);
    }

    fn browse_for_files(&mut self, ctx: &egui::Context) {
        let Some(paths) = rfd::FileDialog::new()
            .add_filter("Documents and images", &ACCEPTED_EXTENSIONS)
            .pick_files()
        else {
            return;
        };
        let batch = paths
            .iter()
            .map(|path| FileCandidate::from_path(path))
            .collect();
        self.ingest_batch(ctx, batch);
    }

    fn ingest_batch(&mut self, ctx: &egui::Context, batch: Vec<Result<FileCandidate, String>>) {
        let outcome = intake::ingest(&mut self.registry, ctx, batch);
        self.state.error_message = outcome.error;

        if !outcome.accepted.is_empty() {
            println!(
                "Accepted {} file(s), simulating upload",
                outcome.accepted.len()
            );
            self.spawn_processing_timer(ctx, outcome.accepted);
        }
    }

    /// One detached timer per accepted batch; the message carries the batch's
    /// ids so concurrent batches never touch each other's records.
    fn spawn_processing_timer(&self, ctx: &egui::Context, ids: Vec<FileId>) {
        let sender = self.events_tx.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                tokio::time::sleep(PROCESSING_DELAY).await;
            });
            sender
                .send(IntakeEvent::BatchProcessed(ids))
                .unwrap_or_default();
            ctx.request_repaint();
        });
    }

    fn request_preview(&mut self, ctx: &egui::Context, id: FileId) {
        let Some(record) = self.registry.get(id) else {
            return;
        };
        match preview::resolve(record) {
            PreviewRequest::Ready(content) => self.state.open_preview(content),
            PreviewRequest::TextRead { id, name, source } => {
                self.spawn_text_read(ctx, id, name, source)
            }
        }
    }

    fn spawn_text_read(&mut self, ctx: &egui::Context, id: FileId, name: String, source: FileSource) {
        if self.pending_reads.contains_key(&id) {
            return;
        }
        let cancelled = Arc::new(AtomicBool::new(false));
        self.pending_reads.insert(id, cancelled.clone());
        self.state.loading_preview = Some(id);

        let sender = self.events_tx.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt
                .block_on(source.read_text())
                .map_err(|e| e.to_string());
            if cancelled.load(Ordering::Relaxed) {
                return;
            }
            sender
                .send(IntakeEvent::PreviewLoaded { id, name, result })
                .unwrap_or_default();
            ctx.request_repaint();
        });
    }

    fn remove_file(&mut self, id: FileId) {
        if let Some(cancelled) = self.pending_reads.remove(&id) {
            cancelled.store(true, Ordering::Relaxed);
        }
        if self.state.loading_preview == Some(id) {
            self.state.loading_preview = None;
        }
        if self.registry.remove(id) {
            println!("Removed file {}", id);
        }
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        let mut had_updates = false;

        while let Ok(event) = self.events_rx.try_recv() {
            had_updates = true;
            match event {
                IntakeEvent::BatchProcessed(ids) => self.registry.mark_processed(&ids),
                IntakeEvent::PreviewLoaded { id, name, result } => {
                    self.pending_reads.remove(&id);
                    if self.state.loading_preview == Some(id) {
                        self.state.loading_preview = None;
                    }
                    // The record may have been removed while the read ran;
                    // its content must not resurface.
                    if !self.registry.contains(id) {
                        continue;
                    }
                    match result {
                        Ok(body) => self
                            .state
                            .open_preview(PreviewContent::Text { name, body }),
                        Err(reason) => {
                            self.state.error_message =
                                Some(IntakeError::PreviewReadFailed { name, reason })
                        }
                    }
                }
            }
        }

        if had_updates {
            ctx.request_repaint();
        }
    }
}

impl App for DocumentUpload {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);
        self.collect_dropped_files(ctx);
        self.render(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        for (_, cancelled) in self.pending_reads.drain() {
            cancelled.store(true, Ordering::Relaxed);
        }
        self.registry.teardown();
    }
}
