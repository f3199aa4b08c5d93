use crate::attack::{AttackModifiers, Score};
use crate::error::Error;
use crate::lexicon::Lexicon;
use crate::tileset::TileSet;
use multiset::HashMultiSet;
use rand::Rng;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::fmt;
use tinyvec::ArrayVec;

/// The most tiles any rack can hold.
const RACK_CAPACITY: usize = 16;

const DEFAULT_WIDTH: usize = 4;
const DEFAULT_HEIGHT: usize = 4;

/// A letter rack for a word-attack game.
///
/// The board owns the tile distribution, the dictionary and the metal-word
/// dictionary for its game variant; variant differences are carried by that
/// data, not by board subtypes. Tiles are upper-case letters plus the
/// wildcard `?`. A new board starts with an empty rack; fill it with
/// [`randomize`](Board::randomize) or [`set_tiles`](Board::set_tiles).
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: ArrayVec<[u8; RACK_CAPACITY]>,
    tileset: TileSet,
    lexicon: Lexicon,
    metal_words: Lexicon,
}

/// Display the rack as a letter grid, one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows: Vec<String> = self
            .tiles
            .as_slice()
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|&tile| (tile as char).to_string())
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect();
        write!(f, "{}", rows.join("\n"))
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(TileSet::standard())
    }
}

impl Board {
    /// Create a new 4x4 board with an empty rack and empty dictionaries.
    ///
    /// Additional builder functions set the dictionaries and rack shape:
    /// - [`with_words`](Board::with_words) /
    ///   [`with_words_from_file`](Board::with_words_from_file)
    /// - [`with_metal_words`](Board::with_metal_words) /
    ///   [`with_metal_words_from_file`](Board::with_metal_words_from_file)
    /// - [`with_dimensions`](Board::with_dimensions)
    #[must_use]
    pub fn new(tileset: TileSet) -> Board {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tiles: ArrayVec::new(),
            tileset,
            lexicon: Lexicon::new(),
            metal_words: Lexicon::new(),
        }
    }

    /// Change the rack shape, clearing any tiles on it.
    /// ## Errors
    /// Fails with [`Error::InvalidDimensions`] when either side is zero or
    /// the rack would exceed 16 tiles.
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Result<Board, Error> {
        if width == 0 || height == 0 || width * height > RACK_CAPACITY {
            return Err(Error::InvalidDimensions { width, height });
        }
        self.width = width;
        self.height = height;
        self.tiles.clear();
        Ok(self)
    }

    /// Specify the dictionary by a list of words, and return the modified
    /// board.
    pub fn with_words(mut self, words: &[&str]) -> Board {
        self.lexicon = Lexicon::from_words(words);
        self
    }

    /// Specify the dictionary by reading it from `path`, one word per line.
    /// ## Errors
    /// Fails with [`Error::ReadError`] if the file can not be read.
    pub fn with_words_from_file(mut self, path: &str) -> Result<Board, Error> {
        self.lexicon = Lexicon::from_file(path)?;
        Ok(self)
    }

    /// Use an existing lexicon as the dictionary.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Board {
        self.lexicon = lexicon;
        self
    }

    /// Specify the metal words: the subset of words the hammer boosts.
    pub fn with_metal_words(mut self, words: &[&str]) -> Board {
        self.metal_words = Lexicon::from_words(words);
        self
    }

    /// Specify the metal words by reading them from `path`.
    /// ## Errors
    /// Fails with [`Error::ReadError`] if the file can not be read.
    pub fn with_metal_words_from_file(mut self, path: &str) -> Result<Board, Error> {
        self.metal_words = Lexicon::from_file(path)?;
        Ok(self)
    }

    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Mutable access to the dictionary, for adding or removing words in
    /// play.
    pub fn lexicon_mut(&mut self) -> &mut Lexicon {
        &mut self.lexicon
    }

    pub fn metal_words(&self) -> &Lexicon {
        &self.metal_words
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The rack contents in row order, as a string.
    pub fn letters(&self) -> String {
        self.tiles.iter().map(|&tile| tile as char).collect()
    }

    /// Fill the whole rack with random tiles drawn from the tileset, then
    /// scatter the letters of `required` over distinct random cells so each
    /// is guaranteed to appear.
    /// ## Errors
    /// - [`Error::TooManyTiles`] when `required` has more letters than the
    ///   rack has cells.
    /// - [`Error::InvalidTile`] when `required` holds anything but letters
    ///   and `?`.
    pub fn randomize<R: Rng>(&mut self, required: &str, rng: &mut R) -> Result<(), Error> {
        let required = required.to_ascii_uppercase();
        let size = self.width * self.height;
        if required.chars().count() > size {
            return Err(Error::TooManyTiles {
                supplied: required.chars().count(),
                capacity: size,
            });
        }
        for tile in required.chars() {
            if !tile.is_ascii_uppercase() && tile != '?' {
                return Err(Error::InvalidTile(tile));
            }
        }
        self.tiles.clear();
        for _ in 0..size {
            self.tiles.push(self.tileset.random_tile(rng) as u8);
        }
        // random cell, then probe forward for a free one
        let mut used = vec![false; size];
        for tile in required.bytes() {
            let mut cell = rng.gen_range(0..size);
            while used[cell] {
                cell = (cell + 1) % size;
            }
            used[cell] = true;
            self.tiles[cell] = tile;
        }
        Ok(())
    }

    /// Set the rack to exactly the given letters, in row order.
    /// ## Errors
    /// - [`Error::WrongTileCount`] unless one letter per cell is given.
    /// - [`Error::InvalidTile`] when `letters` holds anything but letters
    ///   and `?`.
    pub fn set_tiles(&mut self, letters: &str) -> Result<(), Error> {
        let letters = letters.to_ascii_uppercase();
        let size = self.width * self.height;
        if letters.chars().count() != size {
            return Err(Error::WrongTileCount {
                expected: size,
                got: letters.chars().count(),
            });
        }
        for tile in letters.chars() {
            if !tile.is_ascii_uppercase() && tile != '?' {
                return Err(Error::InvalidTile(tile));
            }
        }
        self.tiles.clear();
        for tile in letters.bytes() {
            self.tiles.push(tile);
        }
        Ok(())
    }

    /// Test whether `word` can be assembled from the rack.
    ///
    /// This is rack containment, not dictionary membership. The word is
    /// upper-cased; anything outside `A`..`Z` fails, as does a `Q` not
    /// followed by `U`. A `Q` tile supplies its own `U`, and each `?` tile
    /// can stand in for one missing letter.
    pub fn contains_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let word = word.to_ascii_uppercase();
        let letters = word.as_bytes();
        for (i, &letter) in letters.iter().enumerate() {
            if !letter.is_ascii_uppercase() {
                return false;
            }
            if letter == b'Q' && letters.get(i + 1) != Some(&b'U') {
                return false;
            }
        }

        let mut rack: HashMultiSet<u8> = HashMultiSet::new();
        let mut wildcards = 0;
        for &tile in self.tiles.iter() {
            if tile == b'?' {
                wildcards += 1;
                continue;
            }
            if tile == b'Q' {
                rack.insert(b'U');
            }
            rack.insert(tile);
        }
        let mut needed: HashMultiSet<u8> = HashMultiSet::new();
        for &letter in letters {
            needed.insert(letter);
        }
        let mut wildcards_needed = 0;
        for &letter in needed.distinct_elements() {
            wildcards_needed += needed
                .count_of(&letter)
                .saturating_sub(rack.count_of(&letter));
        }
        wildcards_needed <= wildcards
    }

    /// List every dictionary word that can be assembled from the rack,
    /// scored with the default loadout, strongest first and alphabetical
    /// within equal strength.
    pub fn best_words(&self) -> Vec<Score> {
        let words: Vec<String> = self.lexicon.iter().collect();
        let modifiers = AttackModifiers::default();

        #[cfg(feature = "rayon")]
        let mut scores: Vec<Score> = words
            .par_iter()
            .filter(|word| self.contains_word(word))
            .map(|word| Score {
                damage: self.attack_power(word, &modifiers),
                word: word.clone(),
            })
            .collect();

        #[cfg(not(feature = "rayon"))]
        let mut scores: Vec<Score> = words
            .iter()
            .filter(|word| self.contains_word(word))
            .map(|word| Score {
                damage: self.attack_power(word, &modifiers),
                word: word.clone(),
            })
            .collect();

        scores.sort_by(|a, b| {
            b.damage
                .base_quarter_hearts
                .cmp(&a.damage.base_quarter_hearts)
                .then_with(|| a.word.cmp(&b.word))
        });
        scores
    }
}
