//! Game mode and side selection
//!
//! Settings store the player's preferences ([`PlayMode`], [`PlayerSide`]);
//! when a game starts they are resolved into a concrete [`GameMode`] that
//! names the computer's colour, if there is a computer at all.
//!
//! | Mode         | Side   | Result                                   |
//! |--------------|--------|------------------------------------------|
//! | `VsHuman`    | any    | Both colours take input                  |
//! | `VsComputer` | White  | Computer plays Black                     |
//! | `VsComputer` | Black  | Computer plays White and moves first     |
//! | `VsComputer` | Random | Colour drawn with `rand` at game start   |

use chess_engine::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opponent preference as stored in settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum PlayMode {
    /// Two humans sharing the board
    VsHuman,
    /// One human against the search engine
    #[default]
    VsComputer,
}

impl PlayMode {
    pub fn description(&self) -> &'static str {
        match self {
            PlayMode::VsHuman => "Human vs Human",
            PlayMode::VsComputer => "Human vs Computer",
        }
    }
}

/// The colour the local player wants against the computer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum PlayerSide {
    #[default]
    White,
    Black,
    /// Coin flip at game start
    Random,
}

impl PlayerSide {
    /// Resolve to a colour, flipping a coin for [`PlayerSide::Random`]
    pub fn resolve(self) -> Color {
        self.resolve_with(&mut rand::rng())
    }

    pub fn resolve_with<R: Rng + ?Sized>(self, rng: &mut R) -> Color {
        match self {
            PlayerSide::White => Color::White,
            PlayerSide::Black => Color::Black,
            PlayerSide::Random => {
                if rng.random_bool(0.5) {
                    Color::White
                } else {
                    Color::Black
                }
            }
        }
    }
}

/// Resolved game mode for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    VsHuman,
    /// The named colour is played by the search engine
    VsComputer { computer: Color },
}

impl GameMode {
    /// Build the mode for a game, resolving a random side with `rng`
    pub fn resolve_with<R: Rng + ?Sized>(mode: PlayMode, side: PlayerSide, rng: &mut R) -> Self {
        match mode {
            PlayMode::VsHuman => GameMode::VsHuman,
            PlayMode::VsComputer => GameMode::VsComputer {
                computer: side.resolve_with(rng).other(),
            },
        }
    }

    pub fn resolve(mode: PlayMode, side: PlayerSide) -> Self {
        Self::resolve_with(mode, side, &mut rand::rng())
    }

    /// The computer's colour, if the computer plays
    pub fn computer_color(self) -> Option<Color> {
        match self {
            GameMode::VsHuman => None,
            GameMode::VsComputer { computer } => Some(computer),
        }
    }

    pub fn is_computer(self, color: Color) -> bool {
        self.computer_color() == Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_sides() {
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(
            GameMode::resolve_with(PlayMode::VsComputer, PlayerSide::White, &mut rng),
            GameMode::VsComputer {
                computer: Color::Black
            }
        );
        assert_eq!(
            GameMode::resolve_with(PlayMode::VsComputer, PlayerSide::Black, &mut rng),
            GameMode::VsComputer {
                computer: Color::White
            }
        );
    }

    #[test]
    fn test_vs_human_has_no_computer() {
        let mode = GameMode::resolve(PlayMode::VsHuman, PlayerSide::Random);

        assert_eq!(mode, GameMode::VsHuman);
        assert_eq!(mode.computer_color(), None);
        assert!(!mode.is_computer(Color::White));
        assert!(!mode.is_computer(Color::Black));
    }

    #[test]
    fn test_random_side_produces_both_colors() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<Color> = (0..64)
            .map(|_| PlayerSide::Random.resolve_with(&mut rng))
            .collect();

        assert!(draws.contains(&Color::White));
        assert!(draws.contains(&Color::Black));
    }

    #[test]
    fn test_is_computer() {
        let mode = GameMode::VsComputer {
            computer: Color::Black,
        };

        assert!(mode.is_computer(Color::Black));
        assert!(!mode.is_computer(Color::White));
    }
}
