//! Game settings
//!
//! Persisted as JSON next to the executable's working directory. Any field
//! left out of the file takes its default; an unreadable file means all
//! defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::platform::storage;
use crate::tuning::{DodgeTuning, JumperTuning};

/// Which game to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    /// Vertical platform jumper
    #[default]
    Jumper,
    /// Lane-dodging driving game
    Dodge,
}

impl GameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Jumper => "Jumper",
            GameKind::Dodge => "Dodge",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameKind,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
    /// Frames the attract-mode runner plays before exiting
    pub demo_frames: u32,
    /// Directory holding textures and fonts; asset checks are skipped when absent
    pub asset_dir: Option<PathBuf>,

    // === High scores ===
    pub jumper_high_score: PathBuf,
    pub dodge_high_score: PathBuf,

    // === Balance ===
    pub jumper: JumperTuning,
    pub dodge: DodgeTuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: GameKind::Jumper,
            seed: None,
            demo_frames: 60 * 30,
            asset_dir: None,
            jumper_high_score: PathBuf::from("jumper_highscore.txt"),
            dodge_high_score: PathBuf::from("dodge_highscore.txt"),
            jumper: JumperTuning::default(),
            dodge: DodgeTuning::default(),
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "sky-dodge.json";

    /// High score file for the selected game
    pub fn high_score_path(&self) -> &Path {
        match self.game {
            GameKind::Jumper => &self.jumper_high_score,
            GameKind::Dodge => &self.dodge_high_score,
        }
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match storage::read_text(path) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        storage::write_text(path, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
