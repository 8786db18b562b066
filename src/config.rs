use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::model::ServerSettings;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UiThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SavedWindow {
    pub outer_pos: [f32; 2],
    pub inner_size: [f32; 2],
    #[serde(default)]
    pub maximized: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    /// Last directory a download was saved into; seeds the save dialog.
    #[serde(default)]
    pub download_dir: Option<String>,
    #[serde(default)]
    pub ui_theme_mode: UiThemeMode,
    #[serde(default)]
    pub saved_window: Option<SavedWindow>,
}

/// Tracks unsaved config edits so a write happens once a burst of edits has
/// settled (e.g. while typing the server URL), not on every keystroke.
#[derive(Default)]
pub struct DirtyTracker {
    changed_at: Option<Instant>,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit; restarts the settle window.
    pub fn mark(&mut self) {
        self.changed_at = Some(Instant::now());
    }

    pub fn is_dirty(&self) -> bool {
        self.changed_at.is_some()
    }

    /// Consume the dirty state if the last edit is at least `settle` old.
    /// Returns whether the caller should persist now.
    pub fn take_if_settled(&mut self, settle: Duration) -> bool {
        match self.changed_at {
            Some(changed_at) if changed_at.elapsed() >= settle => {
                self.changed_at = None;
                true
            }
            _ => false,
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Some(appdata) = std::env::var_os("APPDATA") {
        return Some(PathBuf::from(appdata).join("Remdir"));
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("remdir"));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config").join("remdir"))
}

pub fn config_path() -> PathBuf {
    if let Some(dir) = config_dir() {
        return dir.join("config.json");
    }
    PathBuf::from("config.json")
}

/// Missing or unreadable config falls back to defaults; the app must always
/// come up navigable.
pub fn load() -> AppConfig {
    let Ok(bytes) = fs::read(config_path()) else {
        return AppConfig::default();
    };
    serde_json::from_slice(&bytes).unwrap_or_default()
}

pub fn save(cfg: &AppConfig) {
    let path = config_path();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let Ok(json) = serde_json::to_vec_pretty(cfg) else {
        return;
    };

    // Best-effort atomic write.
    let tmp = path.with_extension("json.tmp");
    if fs::write(&tmp, json).is_ok() {
        let _ = fs::rename(&tmp, &path).or_else(|_| {
            // If rename fails (e.g. cross-device), fall back.
            match fs::read(&tmp) {
                Ok(bytes) => fs::write(&path, bytes).and_then(|_| fs::remove_file(&tmp)),
                Err(_) => fs::remove_file(&tmp),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_starts_clean() {
        let mut tracker = DirtyTracker::new();
        assert!(!tracker.is_dirty());
        assert!(!tracker.take_if_settled(Duration::ZERO));
    }

    #[test]
    fn settled_edit_is_consumed_exactly_once() {
        let mut tracker = DirtyTracker::new();
        tracker.mark();
        assert!(tracker.is_dirty());
        assert!(tracker.take_if_settled(Duration::ZERO));
        assert!(!tracker.is_dirty());
        assert!(!tracker.take_if_settled(Duration::ZERO));
    }

    #[test]
    fn edits_within_the_settle_window_are_held_back() {
        let mut tracker = DirtyTracker::new();
        tracker.mark();
        assert!(!tracker.take_if_settled(Duration::from_secs(3600)));
        // Still dirty; the pending edit is not lost.
        assert!(tracker.is_dirty());
    }
}
