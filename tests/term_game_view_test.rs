use tui_lawn::core::{Defender, GameState};
use tui_lawn::term::{FrameBuffer, GameView, Viewport, FOOTER_ROW, GRID_ORIGIN_ROW};
use tui_lawn::types::{DefenderKind, EnemyKind, GameAction};

fn screen(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

fn quiet_state() -> GameState {
    let mut state = GameState::new(1);
    state.set_spawning(false);
    state
}

#[test]
fn term_view_puts_status_line_on_top() {
    let state = quiet_state();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(100, 10));
    let rows = screen(&fb);

    assert!(rows[0].starts_with(
        "Sun:300 | Score:0 | Sel:P | 1:P 2:S 3:W 4:C | WASD move, Space plant, R dig, P pause, Q quit"
    ));
}

#[test]
fn term_view_draws_entities_three_columns_wide() {
    let mut state = quiet_state();
    state
        .insert_defender(Defender::new(DefenderKind::WallNut, 0, 0, 0))
        .unwrap();
    state.spawn_enemy_at(EnemyKind::Cone, 0, 8).unwrap();
    state.spawn_enemy_at(EnemyKind::Bucket, 4, 3).unwrap();

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(100, 10));
    let rows = screen(&fb);

    assert!(rows[GRID_ORIGIN_ROW as usize].starts_with(" W  .  .  .  .  .  .  .  Z "));
    assert!(rows[GRID_ORIGIN_ROW as usize + 4].starts_with(" .  .  .  B  . "));
    assert!(rows[GRID_ORIGIN_ROW as usize + 2].starts_with(" . [.] . "));
}

#[test]
fn term_view_footer_shows_message_and_pause() {
    let mut state = quiet_state();
    state.set_sun(0);
    state.apply_action(GameAction::Place).unwrap();
    state.apply_action(GameAction::Pause).unwrap();

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(100, 10));
    let rows = screen(&fb);

    assert_eq!(rows[FOOTER_ROW as usize - 1].trim(), "");
    assert!(rows[FOOTER_ROW as usize].starts_with("insufficient sun [Paused]"));
}

#[test]
fn term_view_final_frame_has_score_and_no_cursor() {
    let mut state = quiet_state();
    state.apply_action(GameAction::Quit).unwrap();

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(100, 10));
    let rows = screen(&fb);

    assert!(rows[FOOTER_ROW as usize].starts_with("Quit! Final score: 0"));
    assert!(rows[1..=5].iter().all(|r| !r.contains('[')));
}

#[test]
fn term_view_clips_to_small_viewport() {
    let state = quiet_state();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(10, 3));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 3);
    assert_eq!(fb.row_text(0), "Sun:300 | ");
}
