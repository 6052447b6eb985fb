//! Core Integration Tests
//!
//! Settings as the binary uses them: defaults, persistence and turning them
//! into a game.

use chess_engine::Color;
use chessduel::core::settings_persistence::{load_settings_or_default, save_settings_to};
use chessduel::core::GameSettings;
use chessduel::game::{GameConfig, GameMode, PlayMode, PlayerSide, TurnController, TurnPhase};
use std::fs;

#[test]
fn test_default_settings_start_a_computer_game() {
    let settings = GameSettings::default();

    let config = GameConfig::from_settings(&settings, None);

    assert_eq!(
        config.mode,
        GameMode::VsComputer {
            computer: Color::Black
        }
    );
    assert_eq!(config.search_depth, 3);
    assert_eq!(config.clock_seconds, 600);
}

#[test]
fn test_playing_black_lets_computer_open() {
    let settings = GameSettings {
        player_side: PlayerSide::Black,
        search_depth: 1,
        ..GameSettings::default()
    };

    let mut controller =
        TurnController::new(GameConfig::from_settings(&settings, None)).expect("standard start");
    assert_eq!(controller.phase(), TurnPhase::ComputerThinking);

    controller.play_computer_move();

    assert_eq!(controller.side_to_move(), Color::Black);
    assert_eq!(controller.phase(), TurnPhase::AwaitingSelection);
}

#[test]
fn test_human_mode_ignores_side() {
    let settings = GameSettings {
        mode: PlayMode::VsHuman,
        player_side: PlayerSide::Random,
        ..GameSettings::default()
    };

    let config = GameConfig::from_settings(&settings, Some("8/8/8/4k3/8/8/8/4K2R w - - 0 1".into()));

    assert_eq!(config.mode, GameMode::VsHuman);
    assert!(TurnController::new(config).is_ok());
}

#[test]
fn test_settings_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("chessduel-core-tests-{}", std::process::id()));
    let path = dir.join("settings.json");
    let settings = GameSettings {
        clock_seconds: 300,
        increment_seconds: 3,
        search_depth: 2,
        think_delay_ms: 100,
        mode: PlayMode::VsHuman,
        player_side: PlayerSide::Black,
    };

    save_settings_to(&settings, &path).expect("save should succeed");
    let json = fs::read_to_string(&path).expect("file written");
    let loaded = load_settings_or_default(&path);

    assert!(json.contains("\"clock_seconds\": 300"));
    assert_eq!(loaded, settings);
    let _ = fs::remove_dir_all(dir);
}
