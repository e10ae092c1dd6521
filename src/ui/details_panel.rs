//! Details panel UI rendering
//!
//! Shows the primary selected block: identity, position in the tree and
//! attributes.

use eframe::egui;
use egui::{Color32, RichText, ScrollArea};
use crate::app::AppState;
use rlistview::{BlockDocument, BlockNode};

/// Renders the details panel for the primary selection
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_details_panel(ui: &mut egui::Ui, state: &AppState) {
    let Some(doc) = state.document.document() else {
        ui.label("No document loaded");
        return;
    };
    let Some(block) = state.store.selection().primary().and_then(|id| doc.get_block(id)) else {
        ui.colored_label(Color32::GRAY, "Select a block to see its details");
        return;
    };

    ui.label(RichText::new(format!("Block #{}", block.id())).strong());
    if state.store.selection().len() > 1 {
        ui.colored_label(Color32::GRAY, format!("{} blocks selected", state.store.selection().len()));
    }
    ui.separator();

    let available_height = ui.available_height();

    ScrollArea::vertical()
        .id_salt("details_scroll_area")
        .max_height(available_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("block_details_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.monospace(block.name());
                    ui.end_row();

                    ui.label("Parent");
                    match block.parent_id() {
                        Some(parent) => ui.monospace(format!("#{}", parent)),
                        None => ui.colored_label(Color32::GRAY, "(top level)"),
                    };
                    ui.end_row();

                    ui.label("Inner blocks");
                    ui.monospace(block.num_children().to_string());
                    ui.end_row();

                    ui.label("Expanded");
                    ui.monospace(state.store.expansion().is_expanded(block.id()).to_string());
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.label(RichText::new("Attributes:").strong());

            match block.attributes() {
                serde_json::Value::Object(map) if !map.is_empty() => {
                    for (key, value) in map {
                        let text = serde_json::to_string_pretty(value)
                            .unwrap_or_else(|_| value.to_string());
                        ui.horizontal_wrapped(|ui| {
                            ui.monospace(RichText::new(format!("{}:", key)).strong());
                            ui.monospace(text);
                        });
                    }
                }
                _ => {
                    ui.colored_label(Color32::GRAY, "(no attributes)");
                }
            }
        });
}
