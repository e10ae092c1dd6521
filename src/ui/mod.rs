//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the list viewer:
//! - Header panel (document controls, list view options)
//! - List view panel (windowed block rows)
//! - Details panel (selected block attributes)
//! - Status bar (document summary and row window)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod list_view_panel;
pub mod details_panel;
pub mod status_bar;
pub mod panel_manager;
