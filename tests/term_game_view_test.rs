use tui_flappy::core::GameState;
use tui_flappy::term::{FrameBuffer, GameView, Rgb, Viewport, HALF_BLOCK};
use tui_flappy::types::GameAction;

const BIRD_YELLOW: Rgb = Rgb::new(255, 235, 59);
const PIPE_GREEN: Rgb = Rgb::new(115, 190, 46);

fn has_color(fb: &FrameBuffer, color: Rgb) -> bool {
    fb.cells()
        .iter()
        .any(|c| c.ch == HALF_BLOCK && (c.style.fg == color || c.style.bg == color))
}

#[test]
fn term_view_scales_world_into_half_blocks() {
    let mut view = GameView::new();
    let fb = view.render(&GameState::new(1), Viewport::new(80, 24));

    // 1080x566 at 80 px wide is 80x41 px, i.e. 21 cell rows centred in 23.
    assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
    assert_eq!(fb.get(0, 1).unwrap().ch, HALF_BLOCK);
    assert_eq!(fb.get(79, 21).unwrap().ch, HALF_BLOCK);
    assert_eq!(fb.get(0, 22).unwrap().ch, 'S');
}

#[test]
fn term_view_draws_bird_but_not_offscreen_pipes() {
    let mut view = GameView::new();
    let fb = view.render(&GameState::new(1), Viewport::new(80, 24));

    assert!(has_color(&fb, BIRD_YELLOW));
    assert!(!has_color(&fb, PIPE_GREEN));
}

#[test]
fn term_view_draws_pipe_once_on_screen() {
    let mut gs = GameState::new(1);
    gs.pipes_mut()[0].x = 500;

    let mut view = GameView::new();
    let fb = view.render(&gs, Viewport::new(80, 24));
    assert!(has_color(&fb, PIPE_GREEN));
}

#[test]
fn term_view_hud_shows_score_best_and_power() {
    let mut gs = GameState::new(1);
    gs.grant_power_up();

    let mut view = GameView::new();
    let text = view.render(&gs, Viewport::new(80, 24)).to_text();
    assert!(text.contains("SCORE 0  BEST 0  POWER 1"));
    assert!(text.contains("PRESS SPACE TO FLAP"));
}

#[test]
fn term_view_shows_frozen_inputs_left() {
    let mut gs = GameState::new(1);
    gs.grant_power_up();
    gs.start();
    assert!(gs.apply_action(GameAction::PowerUp));
    gs.apply_action(GameAction::Flap);

    let mut view = GameView::new();
    let text = view.render(&gs, Viewport::new(80, 24)).to_text();
    assert!(text.contains("POWER 0  FROZEN 2"));
}

#[test]
fn term_view_overlays_pause_and_game_over() {
    let mut view = GameView::new();
    let vp = Viewport::new(80, 24);

    let mut gs = GameState::new(1);
    gs.start();
    gs.apply_action(GameAction::Pause);
    assert!(view.render(&gs, vp).to_text().contains("PAUSED"));

    gs.apply_action(GameAction::Pause);
    while !gs.game_over() {
        gs.tick();
    }
    let text = view.render(&gs, vp).to_text();
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("PRESS R TO RESTART"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn term_view_tracks_viewport_resizes() {
    let mut view = GameView::new();
    let gs = GameState::new(1);
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&gs, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    view.render_into(&gs, Viewport::new(120, 40), &mut fb);
    assert_eq!((fb.width(), fb.height()), (120, 40));
    assert!(has_color(&fb, BIRD_YELLOW));
}
