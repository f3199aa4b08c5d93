mod standard;

use crate::error::Error;
use rand::Rng;
use std::borrow::Cow;

/// letter, draw weight, damage points
pub type TileInfo = (char, u32, u32);

/// The tile table for a game: how likely each letter is to be drawn onto
/// the rack, and how many damage points it is worth in an attack word.
/// Draw weights are relative; the standard table uses hundredths of a
/// percent.
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: Cow<'static, [TileInfo]>,
    total_weight: u32,
}

impl Default for TileSet {
    fn default() -> TileSet {
        TileSet::standard()
    }
}

impl TileSet {
    /// Return the built-in standard tile table.
    #[must_use]
    pub fn standard() -> TileSet {
        let tiles = Cow::Borrowed(standard::TILESET);
        let total_weight = standard::TILESET.iter().map(|tile| tile.1).sum();
        TileSet {
            tiles,
            total_weight,
        }
    }

    /// Build a tileset from a custom table. Letters are upper-cased.
    /// ## Errors
    /// Fails with [`Error::InvalidTileData`] when the table has no draw
    /// weight at all, since such a table can never fill a rack.
    pub fn from_tiles(tiles: Vec<TileInfo>) -> Result<TileSet, Error> {
        let tiles: Vec<TileInfo> = tiles
            .into_iter()
            .map(|(letter, weight, damage)| (letter.to_ascii_uppercase(), weight, damage))
            .collect();
        let total_weight = tiles.iter().map(|tile| tile.1).sum();
        if total_weight == 0 {
            return Err(Error::InvalidTileData(String::from(
                "total draw weight is zero",
            )));
        }
        Ok(TileSet {
            tiles: Cow::Owned(tiles),
            total_weight,
        })
    }

    #[cfg(feature = "serde_json")]
    /// Build a tileset from a JSON object keyed by letter:
    /// `{"A": {"probability": 780, "damage": 1}, ...}`.
    /// ## Errors
    /// Fails with [`Error::InvalidTileData`] when the JSON does not parse,
    /// has a key that is not a single letter, lacks a `probability` or
    /// `damage` number, or carries no draw weight at all.
    pub fn from_json_str(data: &str) -> Result<TileSet, Error> {
        let value: serde_json::Value =
            serde_json::from_str(data).map_err(|e| Error::InvalidTileData(e.to_string()))?;
        let entries = value.as_object().ok_or_else(|| {
            Error::InvalidTileData(String::from("expected a JSON object keyed by letter"))
        })?;
        let mut tiles = Vec::with_capacity(entries.len());
        for (key, entry) in entries {
            let mut chars = key.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(letter), None) => letter,
                _ => {
                    return Err(Error::InvalidTileData(format!(
                        "key \"{}\" is not a single letter",
                        key
                    )))
                }
            };
            let weight = entry
                .get("probability")
                .and_then(serde_json::Value::as_u64)
                .ok_or_else(|| {
                    Error::InvalidTileData(format!("missing probability for '{}'", letter))
                })?;
            let damage = entry
                .get("damage")
                .and_then(serde_json::Value::as_u64)
                .ok_or_else(|| {
                    Error::InvalidTileData(format!("missing damage for '{}'", letter))
                })?;
            tiles.push((letter, weight as u32, damage as u32));
        }
        TileSet::from_tiles(tiles)
    }

    /// Return the damage points for `letter`, or 0 if not in the table.
    pub fn damage(&self, letter: char) -> u32 {
        let letter = letter.to_ascii_uppercase();
        self.tiles
            .iter()
            .find(|tile| tile.0 == letter)
            .map_or(0, |tile| tile.2)
    }

    /// Return the draw weight for `letter`, or 0 if not in the table.
    pub fn weight(&self, letter: char) -> u32 {
        let letter = letter.to_ascii_uppercase();
        self.tiles
            .iter()
            .find(|tile| tile.0 == letter)
            .map_or(0, |tile| tile.1)
    }

    /// Draw a random letter according to the table's weights.
    pub fn random_tile<R: Rng>(&self, rng: &mut R) -> char {
        let mut remaining = i64::from(rng.gen_range(0..self.total_weight));
        for &(letter, weight, _) in self.tiles.iter() {
            remaining -= i64::from(weight);
            if remaining < 0 {
                return letter;
            }
        }
        // total_weight is the sum of all weights, so the walk ends above
        self.tiles[self.tiles.len() - 1].0
    }
}
