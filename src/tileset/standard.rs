use super::TileInfo;

/// The standard tile table: draw weight (hundredths of a percent) and
/// damage points per letter.
pub(super) const TILESET: &[TileInfo] = &[
    ('A', 780, 1),
    ('B', 200, 3),
    ('C', 400, 3),
    ('D', 380, 2),
    ('E', 1100, 1),
    ('F', 140, 4),
    ('G', 300, 2),
    ('H', 230, 4),
    ('I', 860, 1),
    ('J', 21, 8),
    ('K', 97, 5),
    ('L', 530, 1),
    ('M', 270, 3),
    ('N', 720, 1),
    ('O', 610, 1),
    ('P', 280, 3),
    ('Q', 19, 10),
    ('R', 730, 4),
    ('S', 870, 1),
    ('T', 670, 1),
    ('U', 330, 1),
    ('V', 100, 4),
    ('W', 91, 4),
    ('X', 27, 8),
    ('Y', 160, 4),
    ('Z', 44, 10),
];
