//! Asset manifest verification
//!
//! The window layer loads textures and fonts itself; this only checks up front
//! that the files exist. A missing required asset aborts startup, a missing
//! optional one degrades with a warning.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::settings::GameKind;

/// One asset file relative to the asset directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetEntry {
    pub path: &'static str,
    pub required: bool,
}

const fn required(path: &'static str) -> AssetEntry {
    AssetEntry {
        path,
        required: true,
    }
}

const JUMPER_ASSETS: &[AssetEntry] = &[
    required("background.png"),
    required("platform.png"),
    required("doodle.png"),
    required("resume.png"),
    required("font.otf"),
];

const DODGE_ASSETS: &[AssetEntry] = &[
    required("player.png"),
    required("enemy.png"),
    // Without a font the HUD is not drawn
    AssetEntry {
        path: "arial.ttf",
        required: false,
    },
];

pub fn manifest(game: GameKind) -> &'static [AssetEntry] {
    match game {
        GameKind::Jumper => JUMPER_ASSETS,
        GameKind::Dodge => DODGE_ASSETS,
    }
}

/// Check every manifest entry under `dir`. Returns the optional assets that
/// are missing; fails on the first missing required one.
pub fn verify(dir: &Path, game: GameKind) -> Result<Vec<PathBuf>> {
    let mut missing_optional = Vec::new();
    for entry in manifest(game) {
        let path = dir.join(entry.path);
        if path.is_file() {
            continue;
        }
        if entry.required {
            bail!("missing required asset: {}", path.display());
        }
        log::warn!("Optional asset not found: {}", path.display());
        missing_optional.push(path);
    }
    log::info!("Assets verified in {}", dir.display());
    Ok(missing_optional)
}
