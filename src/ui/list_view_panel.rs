//! List view panel UI rendering
//!
//! Shows the document as a flat, windowed list of block rows. Only rows in
//! the scroll window are materialized; the rest of the scroll height comes
//! from the padding carried by the boundary rows.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::rendering::row_renderer::{self, RowAction};
use egui::ScrollArea;
use rlistview::{render_document, BlockDocument, BranchProps, HostIntent, ListRow};

/// Everything the rows reported during one frame.
#[derive(Debug, Default)]
pub struct ListViewOutput {
    pub intents: Vec<HostIntent>,
    pub actions: Vec<RowAction>,
}

/// Renders the list view panel.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Application state; scroll geometry is recorded back into it
/// * `loader` - Used to show progress while a document loads
///
/// # Returns
/// Intents and actions to apply once the frame is drawn.
pub fn render_list_view_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loader: &AsyncLoader,
) -> ListViewOutput {
    let mut output = ListViewOutput::default();

    if loader.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            match loader.pending_path() {
                Some(path) => ui.label(format!("Loading {}…", path.display())),
                None => ui.label("Loading…"),
            };
        });
        return output;
    }

    let global_row_count = state.global_row_count();

    let Some(doc) = state.document.document() else {
        ui.label("No document to display");
        return output;
    };
    if doc.root_ids().is_empty() {
        ui.label("Document has no blocks");
        return output;
    }

    let window = state.viewport.window(state.settings.windowing);
    let props = BranchProps {
        context: state.store.context(state.tree_grid_mounted, state.settings.use_animation),
        options: state.settings.options,
        window,
        global_row_count,
        dragging_id: state.store.dragging_id(),
    };

    let scroll_area = ScrollArea::vertical()
        .id_salt("list_view_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;

            for row in render_document(doc, props) {
                let padding = row.padding();
                if padding.top > 0.0 {
                    ui.add_space(padding.top);
                }

                match &row {
                    ListRow::Block(block_row) => row_renderer::render_block_row(
                        ui,
                        block_row,
                        &mut output.intents,
                        &mut output.actions,
                    ),
                    ListRow::Appender(appender) => {
                        row_renderer::render_appender_row(ui, appender, &mut output.actions)
                    }
                }

                if padding.bottom > 0.0 {
                    ui.add_space(padding.bottom);
                }
            }
        });

    // A drag ends wherever the pointer is released.
    if let Some(id) = state.store.dragging_id() {
        if ui.input(|i| i.pointer.any_released()) {
            output.intents.push(HostIntent::DragEnd(id));
        }
    }

    state.viewport.record(scroll_area.state.offset.y, scroll_area.inner_rect.height());
    if state.viewport.window(state.settings.windowing) != window {
        ui.ctx().request_repaint();
    }
    state.tree_grid_mounted = true;

    output
}
