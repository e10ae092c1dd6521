//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying document metadata.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::{format_count, format_memory_mb, format_window, get_current_memory_mb};
use rlistview::{BlockDocument, DocumentMetadata};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Application state; mutable for the cached row count
pub fn render_status_bar(ui: &mut egui::Ui, state: &mut AppState) {
    let total_rows = state.global_row_count();

    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        let Some(doc) = state.document.document() else {
            ui.label(RichText::new("| No document loaded").strong());
            return;
        };

        ui.label(RichText::new("|").strong());

        let metadata = doc.metadata();
        ui.label(RichText::new(format!(
            "{} | Version: {} | Blocks: {} | Roots: {}",
            state.document.source_label(),
            metadata.version(),
            format_count(doc.block_count()),
            format_count(doc.root_ids().len()),
        )).strong());

        if let Some(declared) = metadata.declared_blocks() {
            if declared != doc.block_count() {
                ui.label(RichText::new(format!("(footer declares {})", format_count(declared)))
                    .color(egui::Color32::YELLOW));
            }
        }

        ui.label(RichText::new("|").strong());
        let window = state.viewport.window(state.settings.windowing);
        ui.label(RichText::new(format_window(window, total_rows)).strong());

        if let Some(id) = state.store.dragging_id() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Dragging #{}", id)).color(egui::Color32::YELLOW));
        }
    });
}
