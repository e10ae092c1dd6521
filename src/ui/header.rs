//! Header panel UI rendering
//!
//! Handles the top bar with document controls and list view switches.

use eframe::egui;
use egui::Color32;
use std::path::PathBuf;
use crate::app::AppState;
use crate::io::file_loader::DOCUMENT_EXTENSIONS;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a file with "Open Document"
    OpenFileRequested(PathBuf),
    /// User clicked "Virtual Document"
    OpenVirtualDocumentRequested,
    ExpandAll,
    CollapseAll,
}

/// Renders the application header with document and list view controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Document").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Block Documents", DOCUMENT_EXTENSIONS)
                .add_filter("Compressed Documents", &["br"]);

            if let Some(dir) = dirs::document_dir().or_else(|| std::env::current_dir().ok()) {
                dialog = dialog.set_directory(dir);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🔮 Virtual Document").clicked() {
            interaction = Some(HeaderInteraction::OpenVirtualDocumentRequested);
        }

        ui.separator();

        let settings = &mut state.settings;
        ui.checkbox(&mut settings.options.show_nested_blocks, "Nested blocks");
        ui.checkbox(&mut settings.options.show_appender, "Appender");
        ui.checkbox(&mut settings.options.show_block_movers, "Movers");
        ui.checkbox(&mut settings.windowing, "Windowing")
            .on_hover_text("Only build the rows inside the scroll window");
        ui.checkbox(&mut settings.use_animation, "Animation");

        if state.document.document().is_some() {
            ui.separator();

            if ui.button("⊞ Expand all").clicked() {
                interaction = Some(HeaderInteraction::ExpandAll);
            }
            if ui.button("⊟ Collapse all").clicked() {
                interaction = Some(HeaderInteraction::CollapseAll);
            }
        }
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
