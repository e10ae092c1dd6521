//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, list view, details, status) and
//! tracks the split between the list and the details panel.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::rendering::row_renderer::RowAction;
use crate::ui::{details_panel, header, list_view_panel, status_bar};
use rlistview::HostIntent;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(std::path::PathBuf),
    /// User requested to open a virtual document
    OpenVirtualDocumentRequested,
    ExpandAll,
    CollapseAll,
    /// A row called one of the host notifiers
    Host(HostIntent),
    /// A row requested a document edit
    Row(RowAction),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from `eframe::App::update()`. Header requests come first,
    /// followed by row intents and then row actions.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interactions.push(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenVirtualDocumentRequested => {
                        PanelInteraction::OpenVirtualDocumentRequested
                    }
                    header::HeaderInteraction::ExpandAll => PanelInteraction::ExpandAll,
                    header::HeaderInteraction::CollapseAll => PanelInteraction::CollapseAll,
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let total_width = ctx.content_rect().width();

        // Right panel: details
        let details = egui::SidePanel::right("details_panel")
            .default_width(state.layout.details_width(total_width))
            .resizable(true)
            .show(ctx, |ui| {
                egui::Frame::default().inner_margin(4.0).show(ui, |ui| {
                    details_panel::render_details_panel(ui, state);
                });
            });

        // Central panel: list view
        let list_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(list_frame)
            .show(ctx, |ui| {
                ui.heading("List View");
                ui.separator();

                let output = list_view_panel::render_list_view_panel(ui, state, loader);
                interactions.extend(output.intents.into_iter().map(PanelInteraction::Host));
                interactions.extend(output.actions.into_iter().map(PanelInteraction::Row));
            });

        let details_width = details.response.rect.width();
        state.layout.update_from_widths(total_width - details_width, total_width);

        interactions
    }
}
