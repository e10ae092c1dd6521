//! Settings persistence coordination.
//!
//! List view options and the panel layout are stored in eframe's persistent
//! storage as JSON strings, one key per settings type.

use serde::{de::DeserializeOwned, Serialize};
use rlistview::ListViewSettings;
use crate::state::LayoutState;

const LIST_VIEW_SETTINGS_KEY: &str = "list_view_settings";
const LAYOUT_KEY: &str = "layout";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads list view settings, falling back to defaults.
    pub fn load_list_view_settings(storage: Option<&dyn eframe::Storage>) -> ListViewSettings {
        Self::try_load_setting(storage, LIST_VIEW_SETTINGS_KEY).unwrap_or_default()
    }

    /// Loads the panel layout, falling back to defaults.
    pub fn load_layout(storage: Option<&dyn eframe::Storage>) -> LayoutState {
        Self::try_load_setting(storage, LAYOUT_KEY).unwrap_or_default()
    }

    /// Saves list view settings and layout.
    pub fn save_all(storage: &mut dyn eframe::Storage, settings: &ListViewSettings, layout: &LayoutState) {
        Self::save_setting(storage, LIST_VIEW_SETTINGS_KEY, settings);
        Self::save_setting(storage, LAYOUT_KEY, layout);
        storage.flush();
    }

    /// Serializes `value` under `key`. Serialization failures are logged and
    /// leave the stored value untouched.
    pub fn save_setting<T: Serialize>(storage: &mut dyn eframe::Storage, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(e) => log::warn!("Failed to serialize setting {}: {}", key, e),
        }
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T: DeserializeOwned>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T> {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring stored setting {}: {}", key, e);
                None
            }
        }
    }
}
