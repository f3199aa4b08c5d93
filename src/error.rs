use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// A random word was requested but no words are stored
    #[error("Lexicon contains no words")]
    EmptyLexicon,

    /// The search pattern is not valid regex syntax
    #[error("Invalid pattern \"{pattern}\"")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// A tile that is not a letter `A`..`Z` or the wildcard `?`
    #[error("Invalid tile '{0}'")]
    InvalidTile(char),

    /// More guaranteed letters than the rack has cells
    #[error("Too many tiles: {supplied} supplied, rack holds {capacity}")]
    TooManyTiles { supplied: usize, capacity: usize },

    /// Setting the rack needs one letter per cell
    #[error("Expected {expected} tiles, got {got}")]
    WrongTileCount { expected: usize, got: usize },

    /// Rack dimensions outside the supported range
    #[error("Unsupported rack dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Tile table is empty, has no draw weight, or is malformed
    #[error("Invalid tile data: {0}")]
    InvalidTileData(String),
}
