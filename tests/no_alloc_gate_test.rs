use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_flappy::core::GameState;
use tui_flappy::types::GameAction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Drive one scripted run: flap on a fixed cadence, spend charges, restart on death.
fn play(gs: &mut GameState, ticks: u32) {
    for t in 0..ticks {
        if t % 17 == 0 {
            let _ = gs.apply_action(GameAction::Flap);
        }
        if t % 50 == 0 {
            gs.grant_power_up();
            let _ = gs.apply_action(GameAction::PowerUp);
        }
        let _ = gs.tick();
        if gs.game_over() {
            let _ = gs.apply_action(GameAction::Restart);
        }
    }
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);

    // Warm-up covers every branch once (start, freeze, death, restart).
    play(&mut gs, 600);
    let _ = gs.apply_action(GameAction::Pause);
    let _ = gs.apply_action(GameAction::Pause);

    let allocs = with_alloc_counting(|| {
        play(&mut gs, 2_000);

        for _ in 0..50 {
            let _ = gs.apply_action(GameAction::Pause);
            let _ = gs.tick();
            let _ = gs.apply_action(GameAction::Pause);
        }
    });

    assert!(allocs == 0);
}
