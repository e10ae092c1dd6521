//! Asynchronous document loading.
//!
//! This module loads block documents on a background thread, keeping the
//! GUI responsive while large or compressed files are parsed.

use eframe::egui;
use rlistview::{BlockDocumentData, DocumentReader, VirtualDocumentReader};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use crate::io::file_loader;

/// Shared flag between the GUI thread and the loading thread.
///
/// Only the in_progress flag is shared; results come through a channel.
#[derive(Debug, Default)]
pub struct LoadingState {
    pub in_progress: bool,
}

/// Result of a completed loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        data: BlockDocumentData,
        path: PathBuf,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation finished since the last check
    None,
}

/// Manages asynchronous loading of document files.
pub struct AsyncLoader {
    loading_state: Arc<Mutex<LoadingState>>,
    loading_receiver: Option<Receiver<Result<BlockDocumentData, String>>>,
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::default())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// Path of the file being loaded, if any.
    pub fn pending_path(&self) -> Option<&PathBuf> {
        self.pending_load_path.as_ref()
    }

    /// Starts loading a document file in the background.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the document to load
    /// * `ctx` - egui context, repainted when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        set_in_progress(&self.loading_state, true);
        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        log::info!("Loading document {}", path.display());

        thread::spawn(move || {
            let reader = file_loader::document_reader();
            let path_string = path.to_string_lossy().into_owned();

            // `{:#}` keeps the context chain in the message
            let result = reader.read(&path_string).map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);

            set_in_progress(&loading_state, false);
            ctx_handle.request_repaint();
        });
    }

    /// Generates a virtual document in-memory.
    ///
    /// Generation is fast enough to run synchronously.
    pub fn load_virtual_document(&self, seed: u64) -> Result<BlockDocumentData, String> {
        VirtualDocumentReader::with_config(12, 4, 6, seed)
            .read("")
            .map_err(|e| e.to_string())
    }

    /// Returns the result of a finished background load, if one arrived.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let path = self.pending_load_path.take();
        match (result, path) {
            (Ok(data), Some(path)) => LoadResult::Success { data, path },
            (Ok(_), None) => LoadResult::Error("Loaded document has no path".to_string()),
            (Err(error_msg), _) => LoadResult::Error(error_msg),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn set_in_progress(state: &Mutex<LoadingState>, in_progress: bool) {
    if let Ok(mut state) = state.lock() {
        state.in_progress = in_progress;
    }
}
