use crate::board::Board;
use std::fmt;

/// Base quarter-hearts by letter-point bracket (one bracket per 4 points).
/// Words at 58 points or more skip to the cap.
const QUARTER_HEARTS: [u32; 17] = [1, 1, 1, 2, 3, 4, 6, 8, 11, 14, 18, 22, 27, 32, 38, 44, 52];
const MAX_QUARTER_HEARTS: u32 = 52;

/// Whether the attacker is under a power effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Neutral,
    Up,
    Down,
}

/// The treasure loadout applied to an attack.
///
/// One game variant differs from another only in numbers, so variants are
/// expressed as data: a [`TileSet`](crate::TileSet) on the board plus a
/// modifier set per attack, not as separate board types.
#[derive(Debug, Clone)]
pub struct AttackModifiers {
    /// Bow upgrade: 0 = none, 1 doubles `X`/`Y`/`Z` to 10, 2 or more to 12
    pub bow_level: u8,
    /// Adds a flat 4 damage, and boosts metal words by half again
    pub hammer: bool,
    /// Doubles the letter points of `R` from 4 to 8
    pub parrot: bool,
    /// Gem bonus as a fraction (0.2 = 20%), rounded up per word
    pub gem_boost: f64,
    /// Attack bonus as a fraction (0.2 = 20%)
    pub attack_boost: f64,
    pub power: PowerState,
    /// Each armour level soaks 6 final damage
    pub armour_level: u32,
}

impl Default for AttackModifiers {
    fn default() -> AttackModifiers {
        AttackModifiers {
            bow_level: 2,
            hammer: true,
            parrot: true,
            gem_boost: 0.0,
            attack_boost: 0.0,
            power: PowerState::Neutral,
            armour_level: 0,
        }
    }
}

/// Damage dealt by one attack word.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackDamage {
    /// Damage before boosts, in quarter-hearts
    pub base_quarter_hearts: u32,
    /// Damage after boosts, flat bonuses and armour
    pub final_damage: i32,
}

impl AttackDamage {
    /// The base damage in hearts, formatted in quarter steps ("1.75").
    pub fn hearts(&self) -> String {
        let whole = self.base_quarter_hearts / 4;
        match self.base_quarter_hearts % 4 {
            0 => format!("{}", whole),
            1 => format!("{}.25", whole),
            2 => format!("{}.5", whole),
            _ => format!("{}.75", whole),
        }
    }
}

impl fmt::Display for AttackDamage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}BH ({} final)", self.hearts(), self.final_damage)
    }
}

/// A scored word, as returned by [`Board::best_words`].
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct Score {
    pub word: String,
    pub damage: AttackDamage,
}

impl Board {
    /// Calculate the damage `word` deals under `modifiers`.
    ///
    /// The word does not have to be in the dictionary or on the rack; `?`
    /// counts one letter point, and metal words (see
    /// [`with_metal_words`](Board::with_metal_words)) hit half again as hard
    /// when the hammer is in play.
    pub fn attack_power(&self, word: &str, modifiers: &AttackModifiers) -> AttackDamage {
        let mut letter_points = 0u32;
        for letter in word.chars().map(|c| c.to_ascii_uppercase()) {
            letter_points += match letter {
                '?' => 1,
                'R' if modifiers.parrot => 8,
                'R' => 4,
                'X' | 'Y' | 'Z' if modifiers.bow_level == 1 => 10,
                'X' | 'Y' | 'Z' if modifiers.bow_level >= 2 => 12,
                _ => self.tileset().damage(letter),
            };
        }
        let mut base_quarter_hearts = if letter_points < 58 {
            QUARTER_HEARTS[(letter_points / 4) as usize]
        } else {
            MAX_QUARTER_HEARTS
        };

        let base_hearts = f64::from(base_quarter_hearts) / 4.0;
        let partial = base_hearts * (1.0 + modifiers.attack_boost)
            + (base_hearts * modifiers.gem_boost).ceil();
        let mut boost = 1.0;
        match modifiers.power {
            PowerState::Up => boost *= 1.25,
            PowerState::Down => boost *= 0.66,
            PowerState::Neutral => {}
        }
        if modifiers.hammer && self.metal_words().contains_word(&word.to_lowercase()) {
            boost *= 1.5;
            base_quarter_hearts = (f64::from(base_quarter_hearts) * 1.5) as u32;
        }

        let mut final_damage =
            (boost * partial).floor() as i32 - 6 * modifiers.armour_level as i32;
        if modifiers.hammer {
            final_damage += 4;
        }
        AttackDamage {
            base_quarter_hearts,
            final_damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::default()
    }

    #[test]
    fn test_default_loadout() {
        let damage = board().attack_power("cat", &AttackModifiers::default());
        // c + a + t = 5 letter points, first bracket
        assert_eq!(damage.base_quarter_hearts, 1);
        // floor(0.25) = 0, plus the hammer's flat 4
        assert_eq!(damage.final_damage, 4);
    }

    #[test]
    fn test_parrot_doubles_r() {
        let with_parrot = board().attack_power("rr", &AttackModifiers::default());
        let without = board().attack_power(
            "rr",
            &AttackModifiers {
                parrot: false,
                ..AttackModifiers::default()
            },
        );
        assert_eq!(with_parrot.base_quarter_hearts, 3);
        assert_eq!(without.base_quarter_hearts, 1);
    }

    #[test]
    fn test_bow_levels() {
        let at_level = |bow_level| {
            board()
                .attack_power(
                    "xyz",
                    &AttackModifiers {
                        bow_level,
                        ..AttackModifiers::default()
                    },
                )
                .base_quarter_hearts
        };
        // 22, 30 and 36 letter points
        assert_eq!(at_level(0), 4);
        assert_eq!(at_level(1), 8);
        assert_eq!(at_level(2), 14);
    }

    #[test]
    fn test_bracket_cap() {
        let modifiers = AttackModifiers {
            bow_level: 0,
            ..AttackModifiers::default()
        };
        // 5 z's + f + b = 57 points: last bracket below the cap
        assert_eq!(
            board().attack_power("zzzzzfb", &modifiers).base_quarter_hearts,
            38
        );
        // 5 z's + j = 58 points: capped
        assert_eq!(
            board().attack_power("zzzzzj", &modifiers).base_quarter_hearts,
            52
        );
    }

    #[test]
    fn test_wildcard_scores_one_point() {
        let damage = board().attack_power("???????", &AttackModifiers::default());
        assert_eq!(damage.base_quarter_hearts, 1);
    }

    #[test]
    fn test_boosts() {
        // "quiz" = 22 points, 4 quarter-hearts, 1.0 base hearts
        let quiz = |modifiers: &AttackModifiers| board().attack_power("quiz", modifiers);
        let base = quiz(&AttackModifiers::default());
        assert_eq!(base.base_quarter_hearts, 4);
        assert_eq!(base.final_damage, 5);

        let gem = quiz(&AttackModifiers {
            gem_boost: 0.5,
            ..AttackModifiers::default()
        });
        assert_eq!(gem.final_damage, 6);

        let attack = quiz(&AttackModifiers {
            attack_boost: 1.0,
            ..AttackModifiers::default()
        });
        assert_eq!(attack.final_damage, 6);

        let down = quiz(&AttackModifiers {
            power: PowerState::Down,
            ..AttackModifiers::default()
        });
        assert_eq!(down.final_damage, 4);
    }

    #[test]
    fn test_armour_soaks_damage() {
        let damage = board().attack_power(
            "quiz",
            &AttackModifiers {
                armour_level: 2,
                ..AttackModifiers::default()
            },
        );
        assert_eq!(damage.final_damage, 5 - 12);
    }

    #[test]
    fn test_metal_word_hammer_boost() {
        let board = Board::default().with_metal_words(&["quiz"]);
        let metal = board.attack_power("quiz", &AttackModifiers::default());
        assert_eq!(metal.base_quarter_hearts, 6);
        assert_eq!(metal.final_damage, 5);

        let no_hammer = board.attack_power(
            "quiz",
            &AttackModifiers {
                hammer: false,
                ..AttackModifiers::default()
            },
        );
        assert_eq!(no_hammer.base_quarter_hearts, 4);
        assert_eq!(no_hammer.final_damage, 1);
    }

    #[test]
    fn test_hearts_formatting() {
        let damage = |base_quarter_hearts| AttackDamage {
            base_quarter_hearts,
            final_damage: 0,
        };
        assert_eq!(damage(4).hearts(), "1");
        assert_eq!(damage(5).hearts(), "1.25");
        assert_eq!(damage(2).hearts(), "0.5");
        assert_eq!(damage(7).hearts(), "1.75");
        assert_eq!(format!("{}", damage(5)), "1.25BH (0 final)");
    }
}
