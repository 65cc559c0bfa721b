//! Asset manifest
//!
//! Front ends load images, sounds and the score font from an asset root.
//! Everything is checked up front: a missing file aborts startup instead of
//! running with holes in the scene.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::audio::SoundEffect;
use crate::renderer::Sprite;

/// What an asset file is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image(Sprite),
    Sound(SoundEffect),
    /// Digits used for the score
    Font,
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset root {} is not a directory", .0.display())]
    MissingRoot(PathBuf),
    #[error("missing {kind:?} asset: {}", .path.display())]
    Missing { kind: AssetKind, path: PathBuf },
}

/// Relative path of the image for `sprite`
pub fn sprite_path(sprite: Sprite) -> &'static str {
    match sprite {
        Sprite::Sky => "img/bg.png",
        Sprite::Ground => "img/ground.png",
        Sprite::UpperTube => "img/up_tube.png",
        Sprite::LowerTube => "img/down_tube.png",
        Sprite::Bird => "img/bird.png",
    }
}

/// Relative path of the clip for `effect`
pub fn sound_path(effect: SoundEffect) -> &'static str {
    match effect {
        SoundEffect::Swoosh => "sound/swooshing.wav",
        SoundEffect::Wing => "sound/wing.wav",
        SoundEffect::Point => "sound/point.wav",
        SoundEffect::Hit => "sound/hit.wav",
        SoundEffect::Die => "sound/die.wav",
    }
}

pub const FONT_PATH: &str = "font/numbers.ttf";

/// Every asset the game needs, resolved against a root directory
#[derive(Debug, Clone)]
pub struct AssetManifest {
    root: PathBuf,
    entries: Vec<(AssetKind, PathBuf)>,
}

impl AssetManifest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut entries = Vec::new();
        for sprite in Sprite::ALL {
            entries.push((AssetKind::Image(sprite), root.join(sprite_path(sprite))));
        }
        for effect in SoundEffect::ALL {
            entries.push((AssetKind::Sound(effect), root.join(sound_path(effect))));
        }
        entries.push((AssetKind::Font, root.join(FONT_PATH)));
        Self { root, entries }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[(AssetKind, PathBuf)] {
        &self.entries
    }

    /// Resolved path for an asset kind
    pub fn path_of(&self, kind: AssetKind) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, p)| p.as_path())
    }

    /// Fail on the first missing file
    pub fn verify(&self) -> Result<(), AssetError> {
        if !self.root.is_dir() {
            return Err(AssetError::MissingRoot(self.root.clone()));
        }
        for (kind, path) in &self.entries {
            if !path.is_file() {
                return Err(AssetError::Missing {
                    kind: *kind,
                    path: path.clone(),
                });
            }
        }
        log::info!(
            "Verified {} assets under {}",
            self.entries.len(),
            self.root.display()
        );
        Ok(())
    }
}
