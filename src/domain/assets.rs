//! Catalog of the downloadable game assets.
//!
//! Serving the files is out of scope; the app only renders the names and
//! where they live relative to the learner's project folder.

use strum::Display;

pub const SPRITE_PREFIX: &str = "assets/sprites";
pub const AUDIO_PREFIX: &str = "assets/audio";

pub const SPRITES: &[&str] = &[
    "0.png",
    "1.png",
    "2.png",
    "3.png",
    "4.png",
    "5.png",
    "6.png",
    "7.png",
    "8.png",
    "9.png",
    "background-day.png",
    "background-night.png",
    "base.png",
    "bluebird-downflap.png",
    "bluebird-midflap.png",
    "bluebird-upflap.png",
    "redbird-downflap.png",
    "redbird-midflap.png",
    "redbird-upflap.png",
    "yellowbird-downflap.png",
    "yellowbird-midflap.png",
    "yellowbird-upflap.png",
    "gameover.png",
    "message.png",
    "pipe-green.png",
    "pipe-red.png",
];

pub const AUDIO: &[&str] = &[
    "die.ogg",
    "die.wav",
    "hit.ogg",
    "hit.wav",
    "point.ogg",
    "point.wav",
    "swoosh.ogg",
    "swoosh.wav",
    "wing.ogg",
    "wing.wav",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AssetCategory {
    Sprites,
    Audio,
}

impl AssetCategory {
    pub fn prefix(self) -> &'static str {
        match self {
            AssetCategory::Sprites => SPRITE_PREFIX,
            AssetCategory::Audio => AUDIO_PREFIX,
        }
    }

    pub fn files(self) -> &'static [&'static str] {
        match self {
            AssetCategory::Sprites => SPRITES,
            AssetCategory::Audio => AUDIO,
        }
    }

    /// Download path for one file in this category.
    pub fn path(self, file: &str) -> String {
        format!("{}/{file}", self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_non_empty_and_well_formed() {
        assert!(!SPRITES.is_empty());
        assert!(!AUDIO.is_empty());
        assert!(SPRITES.iter().all(|f| f.ends_with(".png")));
        assert!(AUDIO.iter().all(|f| f.ends_with(".ogg") || f.ends_with(".wav")));
    }

    #[test]
    fn test_download_paths_use_category_prefix() {
        assert_eq!(
            AssetCategory::Sprites.path("base.png"),
            "assets/sprites/base.png"
        );
        assert_eq!(AssetCategory::Audio.path("wing.wav"), "assets/audio/wing.wav");
    }
}
