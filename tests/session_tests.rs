//! Session and rendering tests.
//!
//! These tests run full sessions against in-memory output:
//! - Quick play writes narration, the board and final results
//! - Interactive play stops cleanly when cancelled

use snakes_ladders::render::{board_snapshot, final_report};
use snakes_ladders::{
    AlwaysReady, Board, GameConfig, GameResult, LoadedDie, NullRenderer, PlayMode, Player,
    Session, SessionConfig, SessionEnd, TextRenderer, TurnEngine, TurnPhase,
};

fn two_player_game(rolls: &[u32]) -> TurnEngine<LoadedDie> {
    let players = vec![Player::new("Alice"), Player::new("Bob")];
    TurnEngine::new(players, Board::standard(), LoadedDie::new(rolls.to_vec())).unwrap()
}

/// A quick session prints every turn and the final report.
#[test]
fn test_quick_session_output() {
    // Alice climbs 4 -> 56, Bob walks to 3, and so on.
    let engine = two_player_game(&[4, 3]);
    let renderer = TextRenderer::new(Vec::new()).narration_only();
    let mut session = Session::new(engine, renderer, AlwaysReady, SessionConfig::new());

    let end = session.run();
    let (engine, renderer) = session.into_parts();
    let text = String::from_utf8(renderer.into_inner()).unwrap();

    assert!(matches!(end, SessionEnd::Finished(_)));
    assert!(text.contains("=== Board Status ==="));
    assert!(text.contains("Turn 1: Alice's turn!"));
    assert!(text.contains("🪜 Great! Alice climbed a ladder to position 56"));
    assert!(text.contains("Turn 2: Bob's turn!"));
    assert!(text.contains("=== FINAL RESULTS ==="));
    assert!(engine.is_over());
}

/// Cancelling in interactive play keeps the game resumable.
#[test]
fn test_interactive_cancel_then_resume() {
    let mut rolls_allowed = 3;
    let gate = move |_: &Player| {
        if rolls_allowed == 0 {
            return false;
        }
        rolls_allowed -= 1;
        true
    };
    let config = SessionConfig::new().with_mode(PlayMode::Interactive);
    let mut session = Session::new(two_player_game(&[2]), NullRenderer, gate, config);

    assert_eq!(session.run(), SessionEnd::Cancelled);
    let (engine, _) = session.into_parts();
    assert_eq!(engine.turns_played(), 3);
    assert_eq!(engine.phase(), TurnPhase::AwaitingRoll);
    assert_eq!(engine.current_index(), 1);
    assert!(engine.result().is_none());

    // Pick the same game up in quick mode.
    let mut resumed = Session::new(engine, NullRenderer, AlwaysReady, SessionConfig::new());
    let result = resumed.run_auto();
    assert!(resumed.engine().is_over());
    assert_eq!(resumed.engine().result(), Some(result));
}

/// A session built from config reports the configured board.
#[test]
fn test_session_from_config() {
    let setup = GameConfig::new(["Ann", "Ben", "Cy"])
        .with_board_size(30)
        .with_snake(27, 3)
        .with_ladder(2, 21)
        .with_seed(11)
        .build()
        .unwrap();
    let engine = TurnEngine::from_setup(setup).unwrap();
    let renderer = TextRenderer::new(Vec::new()).narration_only();
    let mut session = Session::new(engine, renderer, AlwaysReady, SessionConfig::new());

    let result = session.run_auto();
    let (engine, renderer) = session.into_parts();
    let text = String::from_utf8(renderer.into_inner()).unwrap();

    assert!(text.contains("Positions 1 to 30"));
    assert!(text.contains("- Total players: 3"));
    assert!(text.contains("- Snakes on board: 1"));
    assert!(text.contains("- Ladders on board: 1"));
    assert!(text.contains("- Trigger cells: 2"));
    assert!(engine.players()[result.winner().index()].is_winner());
}

/// Snapshot shows each player's symbol and status line.
#[test]
fn test_snapshot_status_lines() {
    let engine = two_player_game(&[1]);
    let text = board_snapshot(engine.board(), engine.players());

    assert!(text.contains("Alice (1) at position 0"));
    assert!(text.contains("Bob (2) at position 0"));
    assert!(text.contains("(2 not yet on the board)"));
}

/// The report notes when the game ended on the turn cap.
#[test]
fn test_report_turn_limit() {
    let mut engine = TurnEngine::new(
        vec![Player::new("Alice"), Player::new("Bob")],
        Board::new(1000).unwrap(),
        LoadedDie::always(1),
    )
    .unwrap();
    let result = engine.autoplay(5);
    assert!(matches!(result, GameResult::TurnLimit(_)));

    let text = final_report(&result, engine.board(), engine.players());
    assert!(text.contains("Game ended due to maximum turn limit reached."));
    assert!(text.contains("1. Alice 🏆 WINNER!"));
    assert!(text.contains("2. Bob (Position: 2)"));
}
