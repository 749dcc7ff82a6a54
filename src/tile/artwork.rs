use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::tile::set::{create_tile_set, SET_SIZE};
use crate::tile::types::Tile;

#[derive(Error, Debug)]
pub enum ArtworkError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Artwork files found for the tile set, keyed by tile identity
pub struct ArtworkIndex {
    root: PathBuf,
    paths: BTreeMap<Tile, PathBuf>,
}

impl ArtworkIndex {
    /// Scan `dir` for `{low}-{high}.png` files
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ArtworkError> {
        let root = dir.as_ref().to_path_buf();
        let meta = std::fs::metadata(&root).map_err(|source| ArtworkError::Io {
            path: root.clone(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(ArtworkError::NotADirectory(root));
        }

        let mut paths = BTreeMap::new();
        for tile in create_tile_set() {
            let path = root.join(tile.artwork_name());
            if path.is_file() {
                paths.insert(tile, path);
            } else {
                warn!("Image not found: {}", path.display());
            }
        }

        Ok(ArtworkIndex { root, paths })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the tile's artwork, if the file was found
    pub fn path_for(&self, tile: Tile) -> Option<&Path> {
        self.paths.get(&tile).map(PathBuf::as_path)
    }

    /// Tiles with no artwork file, in set order
    pub fn missing(&self) -> Vec<Tile> {
        create_tile_set()
            .into_iter()
            .filter(|tile| !self.paths.contains_key(tile))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.paths.len() == SET_SIZE
    }
}
