use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::session::Verse;

#[derive(Embed)]
#[folder = "assets/verses/"]
struct VerseAssets;

#[derive(Debug, Error)]
pub enum VersePackError {
    #[error("failed to read verse file {path}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse verse file {path}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("verse file {path} contains no verses")]
    Empty { path: String },
}

#[derive(Debug, Deserialize)]
struct VersePackFile {
    #[serde(default)]
    verse: Vec<Verse>,
}

/// The verses available to practice. User verses (from
/// `<config_dir>/versed/verses.toml`) come before the bundled pack, so the
/// user's first verse becomes the verse of the week when the file exists.
#[derive(Debug, Clone)]
pub struct VersePack {
    verses: Vec<Verse>,
}

impl VersePack {
    /// Load the user pack (if any) merged in front of the bundled pack.
    pub fn load() -> Self {
        let mut verses = Vec::new();

        if let Some(path) = Self::user_pack_path() {
            if let Ok(pack) = Self::from_path(&path) {
                verses.extend(pack.verses);
            }
        }

        for filename in VerseAssets::iter() {
            if let Some(file) = VerseAssets::get(&filename) {
                if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                    if let Ok(pack) = parse_pack(content, &filename) {
                        verses.extend(pack);
                    }
                }
            }
        }

        Self { verses }
    }

    pub fn from_path(path: &Path) -> Result<Self, VersePackError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| VersePackError::Read {
            path: display.clone(),
            source,
        })?;
        let verses = parse_pack(&content, &display)?;
        Ok(Self { verses })
    }

    fn user_pack_path() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("versed").join("verses.toml");
        path.exists().then_some(path)
    }

    /// The verse of the week: the first entry of the pack.
    pub fn weekly(&self) -> Option<&Verse> {
        self.verses.first()
    }

    pub fn find(&self, reference: &str) -> Option<&Verse> {
        self.verses.iter().find(|v| v.reference == reference)
    }

    /// Resolve a config/CLI selection: "weekly" (or an unknown reference)
    /// falls back to the verse of the week.
    pub fn select(&self, key: &str) -> Option<&Verse> {
        if key == "weekly" {
            return self.weekly();
        }
        self.find(key).or_else(|| self.weekly())
    }

    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.verses.iter().map(|v| v.reference.as_str())
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

fn parse_pack(content: &str, path: &str) -> Result<Vec<Verse>, VersePackError> {
    let file: VersePackFile = toml::from_str(content).map_err(|source| VersePackError::Parse {
        path: path.to_string(),
        source,
    })?;
    if file.verse.is_empty() {
        return Err(VersePackError::Empty {
            path: path.to_string(),
        });
    }
    Ok(file.verse)
}
