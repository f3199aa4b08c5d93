//! A Bookworm Adventures style solver library for Rust.
//! <br>
//! This crate keeps a game dictionary in a [`Lexicon`], a prefix tree that
//! supports adding and removing words, ordered iteration, random word
//! selection, regex pattern search and close-match suggestions. On top of it
//! sits a [`Board`]: a rack of letter tiles drawn from a weighted
//! [`TileSet`], with rack-containment tests and an attack damage formula for
//! ranking the words hiding in the rack.
//!
//! # How to use `bookworm_solver`
//! Start by creating a board, give it a wordlist, and put tiles on the rack.
//! By default a 4x4 rack and the standard tile table are used. The wordlist
//! must be in utf-8 and contain one word per line; it is lower-cased as it
//! loads.
//!
//! # Basic usage
//! ```
//! # use bookworm_solver::{Board, Error};
//! let mut board = Board::default().with_words(&["bean", "nab"]);
//! board.set_tiles("BEAN??TSRLIOPXYD")?;
//! assert!(board.contains_word("bean"));
//! let best = board.best_words();
//! assert_eq!(best[0].word, "bean");
//! # Ok::<(), Error>(())
//! ```
//!
//! The lexicon can also be used on its own:
//! ```
//! # use bookworm_solver::{Error, Lexicon};
//! let mut lexicon = Lexicon::from_words(&["bee", "bear", "ant"]);
//! lexicon.insert("wasp");
//! assert!(lexicon.contains_prefix("be"));
//! let words: Vec<String> = lexicon.iter().collect();
//! assert_eq!(words, vec!["ant", "bear", "bee", "wasp"]);
//! # Ok::<(), Error>(())
//! ```
mod attack;
mod board;
mod error;
mod lexicon;
mod tileset;

pub use crate::attack::{AttackDamage, AttackModifiers, PowerState, Score};
pub use crate::board::Board;
pub use crate::error::Error;
pub use crate::lexicon::{Lexicon, WordIter};
pub use crate::tileset::{TileInfo, TileSet};
