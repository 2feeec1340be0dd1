//! Generator state and its persistence
//!
//! [`GeneratorState`] holds everything the application remembers between
//! runs: the current color, recently generated colors, favorites and the
//! auto mode settings. It is a plain value owned by the caller; nothing in
//! the color engine reads or writes it.
//!
//! [`StateStore`] loads and saves that value as a JSON file:
//!
//! ```rust,no_run
//! use color_generator::core::config::StateConfig;
//! use color_generator::core::state::StateStore;
//! use color_generator::color::generate_random_hex;
//!
//! let mut store = StateStore::new(&StateConfig::default());
//! store.load_or_default();
//! store.update(|state| state.update_current_color(generate_random_hex(), 12));
//! store.save()?;
//! # Ok::<(), color_generator::core::error::GeneratorError>(())
//! ```

use crate::color::{DisplayFormat, HexColor};
use crate::core::config::StateConfig;
use crate::core::error::{GeneratorError, Result};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Current version of the state file format
pub const STATE_VERSION: u32 = 1;

/// Shortest allowed auto mode interval
pub const MIN_AUTO_INTERVAL_MS: u64 = 1000;

/// Everything remembered between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorState {
    /// Version of the state file format
    pub version: u32,

    /// Color currently on display
    pub current_color: HexColor,

    /// Recently generated colors, most recent first, without duplicates
    pub recent_colors: Vec<HexColor>,

    /// Favorite colors in the order they were added
    pub favorites: Vec<HexColor>,

    /// Whether auto mode was running
    pub auto_mode: bool,

    /// Delay between auto generated colors in milliseconds
    pub auto_interval_ms: u64,

    /// Number of colors generated so far
    pub generated_count: u64,

    /// Preferred representation for display
    pub display_format: DisplayFormat,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            current_color: HexColor::WHITE,
            recent_colors: Vec::new(),
            favorites: Vec::new(),
            auto_mode: false,
            auto_interval_ms: 3000,
            generated_count: 0,
            display_format: DisplayFormat::Hex,
        }
    }
}

impl GeneratorState {
    /// Make `color` the current color and record it
    ///
    /// The color is pushed to the front of the recent list unless it is
    /// already there; the list is then trimmed to `recent_limit`.
    pub fn update_current_color(&mut self, color: HexColor, recent_limit: usize) {
        self.current_color = color;
        self.generated_count += 1;

        if !self.recent_colors.contains(&color) {
            self.recent_colors.insert(0, color);
        }
        self.recent_colors.truncate(recent_limit);
    }

    /// Add `color` to favorites, or remove it if already present
    ///
    /// Returns `true` when the color is a favorite afterwards.
    pub fn toggle_favorite(&mut self, color: HexColor) -> bool {
        match self.favorites.iter().position(|c| *c == color) {
            Some(index) => {
                self.favorites.remove(index);
                false
            }
            None => {
                self.favorites.push(color);
                true
            }
        }
    }

    pub fn is_favorite(&self, color: HexColor) -> bool {
        self.favorites.contains(&color)
    }

    pub fn clear_recent(&mut self) {
        self.recent_colors.clear();
    }

    /// Forget recent colors and favorites
    pub fn clear_history(&mut self) {
        self.recent_colors.clear();
        self.favorites.clear();
    }

    pub fn set_display_format(&mut self, format: DisplayFormat) {
        self.display_format = format;
    }

    /// Set the auto mode interval in whole seconds (at least one)
    pub fn set_auto_interval_secs(&mut self, seconds: u64) {
        self.auto_interval_ms = seconds.saturating_mul(1000).max(MIN_AUTO_INTERVAL_MS);
    }
}

/// Loads, tracks and saves the generator state file
#[derive(Debug)]
pub struct StateStore {
    /// Whether persistence is enabled at all
    enabled: bool,

    /// Path to the state file
    state_file_path: PathBuf,

    /// Current state
    state: GeneratorState,

    /// Whether the state has been modified since the last save
    dirty: bool,
}

impl StateStore {
    /// Create a store for the configured state file
    pub fn new(config: &StateConfig) -> Self {
        Self {
            enabled: config.enabled,
            state_file_path: config.effective_state_file(),
            state: GeneratorState::default(),
            dirty: false,
        }
    }

    /// Create a store for an explicit state file
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            enabled: true,
            state_file_path: path.as_ref().to_path_buf(),
            state: GeneratorState::default(),
            dirty: false,
        }
    }

    /// Load the saved state, falling back to defaults
    ///
    /// A missing file yields defaults silently; an unreadable or corrupt one
    /// is logged and replaced.
    pub fn load_or_default(&mut self) {
        if !self.enabled {
            debug!("State persistence disabled, starting fresh");
            self.state = GeneratorState::default();
            return;
        }

        if !self.state_file_path.exists() {
            debug!(
                "No state file at {}, starting fresh",
                self.state_file_path.display()
            );
            self.state = GeneratorState::default();
            return;
        }

        match self.load_state() {
            Ok(state) => {
                debug!(
                    "Loaded state: current {}, {} recent, {} favorites",
                    state.current_color,
                    state.recent_colors.len(),
                    state.favorites.len()
                );
                self.state = state;
            }
            Err(e) => {
                warn!("Failed to load state: {}. Starting fresh.", e);
                self.state = GeneratorState::default();
                self.dirty = true;
            }
        }
    }

    fn load_state(&self) -> Result<GeneratorState> {
        let file = File::open(&self.state_file_path).map_err(|e| {
            GeneratorError::StateError(format!("Failed to open state file: {}", e))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| GeneratorError::StateError(format!("Failed to parse state file: {}", e)))
    }

    /// Save state to the state file if it changed
    pub fn save(&mut self) -> Result<()> {
        if !self.enabled {
            trace!("State persistence disabled, skipping save");
            return Ok(());
        }

        if !self.dirty {
            trace!("State not modified, skipping save");
            return Ok(());
        }

        if let Some(parent) = self.state_file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                GeneratorError::StateError(format!("Failed to create state directory: {}", e))
            })?;
        }

        let file = File::create(&self.state_file_path).map_err(|e| {
            GeneratorError::StateError(format!("Failed to create state file: {}", e))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.state).map_err(|e| {
            GeneratorError::StateError(format!("Failed to write state file: {}", e))
        })?;

        debug!("Saved state to: {}", self.state_file_path.display());
        self.dirty = false;
        Ok(())
    }

    /// Modify the state; the change is written on the next [`save`](Self::save)
    pub fn update<T>(&mut self, f: impl FnOnce(&mut GeneratorState) -> T) -> T {
        self.dirty = true;
        f(&mut self.state)
    }

    /// Discard everything and start from defaults
    pub fn reset(&mut self) {
        self.state = GeneratorState::default();
        self.dirty = true;
    }

    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    pub fn path(&self) -> &Path {
        &self.state_file_path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
