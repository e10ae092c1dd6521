//! List row rendering.
//!
//! Paints block rows and appender rows with egui's painter API. Notifier
//! calls go into a `Vec<HostIntent>` and document edits into a
//! `Vec<RowAction>`; both are applied after the render pass.

use eframe::egui;
use rlistview::{
    AppenderDescriptor, BlockNode, BlockRef, HostIntent, MoveDirection, RowDescriptor, RowEvent,
    ITEM_HEIGHT,
};

use crate::rendering::text_utils::elide_to_width;

/// Horizontal space per nesting level.
pub const INDENT_WIDTH: f32 = 20.0;
const TOGGLE_SIZE: f32 = 16.0;
const MOVER_WIDTH: f32 = 22.0;
const HANDLE_WIDTH: f32 = 18.0;
const TOGGLE_ANIMATION_SECS: f32 = 0.15;

/// Document edits requested from a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Move { id: u64, direction: MoveDirection },
    Append { parent_id: u64 },
    ToggleSelection(u64),
}

/// Center of the guide column for rows at `level`. Root rows have none.
fn guide_x(left: f32, level: usize) -> Option<f32> {
    (level >= 2).then(|| left + (level - 2) as f32 * INDENT_WIDTH + INDENT_WIDTH / 2.0)
}

fn content_x(left: f32, level: usize) -> f32 {
    left + level.saturating_sub(1) as f32 * INDENT_WIDTH
}

/// Draws ancestor continuation lines and this row's elbow.
fn paint_guides(
    painter: &egui::Painter,
    rect: egui::Rect,
    level: usize,
    terminated_levels: &[usize],
    has_following_sibling: bool,
    stroke: egui::Stroke,
) {
    for ancestor in 2..level {
        if terminated_levels.contains(&ancestor) {
            continue;
        }
        if let Some(x) = guide_x(rect.left(), ancestor) {
            painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
        }
    }

    if let Some(x) = guide_x(rect.left(), level) {
        let mid = rect.center().y;
        let bottom = if has_following_sibling { rect.bottom() } else { mid };
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, bottom)], stroke);
        painter.line_segment([egui::pos2(x, mid), egui::pos2(x + INDENT_WIDTH / 2.0, mid)], stroke);
    }
}

/// Short preview of the block's main attribute, if it has one.
fn attribute_preview(attributes: &serde_json::Value) -> Option<String> {
    ["content", "text", "alt", "url"]
        .iter()
        .find_map(|key| attributes.get(*key).and_then(|v| v.as_str()))
        .map(|s| s.to_owned())
}

/// Renders one block row.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `row` - Descriptor produced by the branch renderer
/// * `intents` - Receives select/toggle/drag notifications
/// * `actions` - Receives document edits (move, ctrl-click selection)
pub fn render_block_row(
    ui: &mut egui::Ui,
    row: &RowDescriptor<BlockRef<'_>>,
    intents: &mut Vec<HostIntent>,
    actions: &mut Vec<RowAction>,
) {
    let (row_rect, row_response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), ITEM_HEIGHT),
        egui::Sense::click(),
    );
    let row_id = ui.id().with(("block_row", row.id));
    let mut event = RowEvent::new();

    let selection_fill = ui.visuals().selection.bg_fill;
    let text_color = ui.visuals().text_color();
    let weak_color = ui.visuals().weak_text_color();
    let guide_stroke = egui::Stroke::new(1.0, text_color.gamma_multiply(0.4));

    // Backgrounds
    if row.is_selected {
        ui.painter().rect_filled(row_rect, 0.0, selection_fill);
    } else if row.is_branch_selected {
        ui.painter().rect_filled(row_rect, 0.0, selection_fill.gamma_multiply(0.35));
    } else if row_response.hovered() {
        ui.painter().rect_filled(row_rect, 0.0, ui.visuals().widgets.hovered.weak_bg_fill);
    }
    if row.is_last_of_selected_branch {
        ui.painter().line_segment(
            [row_rect.left_bottom(), row_rect.right_bottom()],
            egui::Stroke::new(2.0, selection_fill),
        );
    }

    paint_guides(
        ui.painter(),
        row_rect,
        row.level,
        &row.terminated_levels,
        row.has_following_sibling(),
        guide_stroke,
    );

    let mut x = content_x(row_rect.left(), row.level);

    // Expander
    let toggle_rect = egui::Rect::from_center_size(
        egui::pos2(x + INDENT_WIDTH / 2.0, row_rect.center().y),
        egui::vec2(TOGGLE_SIZE, TOGGLE_SIZE),
    );
    if let Some(expanded) = row.is_expanded {
        let toggle_response = ui.interact(toggle_rect, row_id.with("toggle"), egui::Sense::click());
        let openness = if row.animate_toggle {
            ui.ctx().animate_bool_with_time(row_id.with("openness"), expanded, TOGGLE_ANIMATION_SECS)
        } else if expanded {
            1.0
        } else {
            0.0
        };
        egui::collapsing_header::paint_default_icon(ui, openness, &toggle_response);

        if toggle_response.clicked() {
            row.toggle_expanded(&mut event, intents);
        }
    }
    x += INDENT_WIDTH;

    // Right-hand controls
    let mut right = row_rect.right();
    if row.show_block_movers {
        let movers = [
            (MoveDirection::Down, "▼", row.position < row.sibling_count),
            (MoveDirection::Up, "▲", row.position > 1),
        ];
        for (direction, symbol, enabled) in movers {
            right -= MOVER_WIDTH;
            let rect = egui::Rect::from_min_size(
                egui::pos2(right, row_rect.top()),
                egui::vec2(MOVER_WIDTH, ITEM_HEIGHT),
            );
            let sense = if enabled { egui::Sense::click() } else { egui::Sense::hover() };
            let response = ui.interact(rect, row_id.with(("mover", symbol)), sense);
            let color = if !enabled {
                weak_color.gamma_multiply(0.5)
            } else if response.hovered() {
                text_color
            } else {
                weak_color
            };
            ui.painter().text(rect.center(), egui::Align2::CENTER_CENTER, symbol, egui::FontId::proportional(11.0), color);

            if enabled && response.clicked() {
                event.stop_propagation();
                actions.push(RowAction::Move { id: row.id, direction });
            }
        }
    }

    right -= HANDLE_WIDTH;
    let handle_rect = egui::Rect::from_min_size(
        egui::pos2(right, row_rect.top()),
        egui::vec2(HANDLE_WIDTH, ITEM_HEIGHT),
    );
    let handle_response = ui
        .interact(handle_rect, row_id.with("drag"), egui::Sense::drag())
        .on_hover_cursor(egui::CursorIcon::Grab);
    ui.painter().text(handle_rect.center(), egui::Align2::CENTER_CENTER, "≡", egui::FontId::proportional(14.0), weak_color);
    if handle_response.drag_started() {
        row.drag_start(intents);
    }

    // Name, id and preview
    let painter = ui.painter();
    let font_id = egui::FontId::proportional(13.0);
    let small_font = egui::FontId::proportional(11.0);
    let name_width = (right - x).max(0.0);

    let label = format!("{}  #{}", row.block.name(), row.id);
    let label = elide_to_width(&label, name_width * 0.5, &font_id, painter);
    let label_rect = painter.text(
        egui::pos2(x + 4.0, row_rect.center().y),
        egui::Align2::LEFT_CENTER,
        label,
        font_id.clone(),
        text_color,
    );

    if let Some(preview) = attribute_preview(row.block.attributes()) {
        let preview_x = label_rect.right() + 8.0;
        let preview = elide_to_width(&preview, (right - preview_x).max(0.0), &small_font, painter);
        painter.text(
            egui::pos2(preview_x, row_rect.center().y),
            egui::Align2::LEFT_CENTER,
            preview,
            small_font,
            weak_color,
        );
    }

    // Row click goes last so inner controls can claim the event first.
    if row_response.clicked() && !event.is_propagation_stopped() {
        if ui.input(|i| i.modifiers.command) {
            actions.push(RowAction::ToggleSelection(row.id));
        } else {
            row.select(&mut event, intents);
        }
    }
}

/// Renders the trailing "add block" row of a selected parent.
pub fn render_appender_row(
    ui: &mut egui::Ui,
    appender: &AppenderDescriptor,
    actions: &mut Vec<RowAction>,
) {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), ITEM_HEIGHT),
        egui::Sense::click(),
    );
    let text_color = ui.visuals().text_color();
    let guide_stroke = egui::Stroke::new(1.0, text_color.gamma_multiply(0.4));

    paint_guides(ui.painter(), rect, appender.level, &appender.terminated_levels, false, guide_stroke);

    let x = content_x(rect.left(), appender.level) + INDENT_WIDTH;
    let color = if response.hovered() {
        ui.visuals().hyperlink_color
    } else {
        ui.visuals().weak_text_color()
    };
    ui.painter().text(
        egui::pos2(x + 4.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        "+ Add block",
        egui::FontId::proportional(13.0),
        color,
    );

    if response.clicked() {
        actions.push(RowAction::Append { parent_id: appender.parent_id });
    }
}
