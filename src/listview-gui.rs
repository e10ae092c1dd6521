//! Block List View GUI Application
//!
//! This module provides an interactive viewer for block documents using the
//! egui framework. The viewer features:
//! - Hierarchical list view of blocks, windowed so only visible rows are built
//! - Expand/collapse, multi-selection, drag state and block movers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Asynchronous file loading with loading indicators
//! - Persistent list view options and panel layout
//! - Details panel for the selected block's attributes
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `cache/` - Row count caching
//! - `io/` - File loading and virtual document generation
//! - `utils/` - Formatting helpers
//! - `ui/` - UI panel rendering and layout
//! - `rendering/` - Low-level painting of list rows
//! - `state/` - Document, viewport and layout state

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod cache;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use io::AsyncLoader;
use rendering::row_renderer::RowAction;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the list viewer GUI.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments to check for initial file to load
    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Block List View"),
        ..Default::default()
    };

    eframe::run_native(
        "Block List View",
        options,
        Box::new(move |cc| Ok(Box::new(ListViewerApp::new(cc, initial_file)))),
    )
}

/// The main list viewer application.
///
/// Most functionality is delegated:
/// - `ApplicationCoordinator` handles loading, errors and row interactions
/// - `SettingsCoordinator` handles persistence
/// - `PanelManager` handles UI panel layout and rendering
struct ListViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous file loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl Default for ListViewerApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            loader: AsyncLoader::new(),
            pending_file_load: None,
        }
    }
}

impl ListViewerApp {
    /// Creates a new viewer with list view settings and layout loaded from
    /// persistent storage. Optionally loads a file on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let settings = SettingsCoordinator::load_list_view_settings(cc.storage);
        let layout = SettingsCoordinator::load_layout(cc.storage);

        Self {
            state: AppState::with_settings(settings, layout),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenVirtualDocumentRequested => {
                ApplicationCoordinator::open_virtual_document(&mut self.state, &self.loader);
            }
            PanelInteraction::ExpandAll => ApplicationCoordinator::expand_all(&mut self.state),
            PanelInteraction::CollapseAll => ApplicationCoordinator::collapse_all(&mut self.state),
            PanelInteraction::Host(intent) => {
                ApplicationCoordinator::apply_intents(&mut self.state, vec![intent]);
            }
            PanelInteraction::Row(RowAction::Move { id, direction }) => {
                ApplicationCoordinator::move_block(&mut self.state, id, direction);
            }
            PanelInteraction::Row(RowAction::Append { parent_id }) => {
                ApplicationCoordinator::append_block(&mut self.state, parent_id);
            }
            PanelInteraction::Row(RowAction::ToggleSelection(id)) => {
                ApplicationCoordinator::toggle_selection(&mut self.state, id);
            }
        }
    }
}

impl eframe::App for ListViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_all(storage, &self.state.settings, &self.state.layout);
    }

    /// Main update loop:
    /// 1. Check for async loading completion
    /// 2. Load initial file if specified via command line
    /// 3. Render all panels via PanelManager
    /// 4. Apply what the panels reported
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        let interactions = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader);
        let changed = !interactions.is_empty();
        for interaction in interactions {
            self.handle_panel_interaction(interaction, ctx);
        }

        if changed {
            ApplicationCoordinator::prune_selection(&mut self.state);
            ctx.request_repaint();
        }
    }
}
