//! Bird physics integration tests

use tui_flappy::core::Bird;
use tui_flappy::types::*;

#[test]
fn falling_follows_capped_gravity() {
    let mut bird = Bird::new();
    bird.set_velocity(-9.0);

    for _ in 0..60 {
        let (v0, y0) = (bird.velocity(), bird.y);
        bird.update();
        let expected_v = (v0 + GRAVITY).min(TERMINAL_VELOCITY);
        assert_eq!(bird.velocity(), expected_v);
        assert_eq!(bird.y, y0 + expected_v);
    }
}

#[test]
fn one_tick_from_rest() {
    let mut bird = Bird::new();
    assert_eq!(bird.y, 200.0);
    assert_eq!(bird.velocity(), 0.0);

    bird.update();
    assert_eq!(bird.velocity(), 0.5);
    assert_eq!(bird.y, 200.5);
}

#[test]
fn velocity_caps_after_twenty_five_ticks_and_stays_capped() {
    let mut bird = Bird::new();
    for _ in 0..25 {
        bird.update();
    }
    assert_eq!(bird.velocity(), TERMINAL_VELOCITY);

    for _ in 0..10 {
        bird.update();
        assert_eq!(bird.velocity(), TERMINAL_VELOCITY);
    }
}

#[test]
fn jump_overrides_any_prior_velocity() {
    for prior in [-20.0, -9.0, 0.0, 3.5, TERMINAL_VELOCITY] {
        let mut bird = Bird::new();
        bird.set_velocity(prior);
        assert!(bird.jump());
        assert_eq!(bird.velocity(), JUMP_VELOCITY);
    }
}

#[test]
fn frozen_bird_holds_height_whatever_its_velocity() {
    let mut bird = Bird::at(150.0, 320.25);
    bird.set_velocity(11.0);
    bird.activate_no_gravity();

    for v in [11.0, -9.0, 4.0] {
        bird.set_velocity(v);
        bird.update();
        assert_eq!(bird.velocity(), 0.0);
        assert_eq!(bird.y, 320.25);
        assert_eq!(bird.y, bird.frozen_y());
    }
}

#[test]
fn power_up_ends_on_last_input_without_a_jump() {
    let mut bird = Bird::new();
    bird.activate_no_gravity();

    for remaining in (0..NO_GRAVITY_INPUTS).rev() {
        bird.update();
        assert!(!bird.jump(), "no impulse while frozen");
        assert_eq!(bird.frozen_inputs_remaining(), remaining);
        assert_eq!(bird.no_gravity(), remaining > 0);
        assert_eq!(bird.velocity(), 0.0);
    }

    // Next input is a normal flap.
    assert!(bird.jump());
    assert_eq!(bird.velocity(), JUMP_VELOCITY);
}

#[test]
fn power_up_does_not_expire_from_ticks_alone() {
    let mut bird = Bird::new();
    bird.activate_no_gravity();
    for _ in 0..1_000 {
        bird.update();
    }
    assert!(bird.no_gravity());
    assert_eq!(bird.frozen_inputs_remaining(), NO_GRAVITY_INPUTS);
    assert_eq!(bird.y, BIRD_SPAWN_Y);
}

#[test]
fn gravity_resumes_from_frozen_height() {
    let mut bird = Bird::new();
    for _ in 0..10 {
        bird.update();
    }
    bird.activate_no_gravity();
    bird.update();
    let frozen = bird.y;

    for _ in 0..NO_GRAVITY_INPUTS {
        bird.jump();
    }
    assert!(!bird.no_gravity());

    bird.update();
    assert_eq!(bird.velocity(), GRAVITY);
    assert_eq!(bird.y, frozen + GRAVITY);
}
