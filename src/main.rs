//! Headless demo: drives the dungeon player through a scripted key sequence
//! at 60 frames per second and logs what the controller does.
//!
//! Usage: `delve [config.json]`

use delve::dungeon::{DungeonPlayer, DungeonPlayerController, InputEvent};
use delve::{logging, DelveConfig, StateId};
use std::error::Error;
use tracing::info;

const FRAME_DELTA: f32 = 1.0 / 60.0;
const FRAMES: u64 = 120;

/// Key events delivered at the start of the given frame.
fn script(frame: u64) -> Vec<InputEvent> {
    let down = |key: &str| InputEvent::KeyDown(key.to_string());
    let up = |key: &str| InputEvent::KeyUp(key.to_string());
    match frame {
        0 => vec![down("ArrowLeft")],
        5 => vec![up("ArrowLeft"), down("ArrowRight")],
        10 => vec![up("ArrowRight")],
        40 => vec![down("a"), down("d")],
        42 => vec![InputEvent::FocusLost],
        70 => vec![down("d")],
        90 => vec![up("d")],
        _ => Vec::new(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => DelveConfig::load(path)?,
        None => DelveConfig::default(),
    };
    info!(
        rotation_duration = config.controller.rotation_duration,
        "starting dungeon session"
    );

    let mut player = DungeonPlayer::new(config.bindings.clone());
    let mut controller = DungeonPlayerController::<DungeonPlayer>::new(&config.controller)?;

    for frame in 0..FRAMES {
        for event in script(frame) {
            player.input.process_event(&event);
        }

        if let Some(state) = controller.tick(&mut player, FRAME_DELTA) {
            let facing = player.transform.facing();
            info!(
                frame,
                state = state.name(),
                facing = %format!("({:.2}, {:.2}, {:.2})", facing.x, facing.y, facing.z),
                "entered state"
            );
        }

        player.input.end_frame();
    }

    let facing = player.transform.facing();
    info!(
        transitions = controller.history().len(),
        path = ?controller.history().get_path(),
        facing = %format!("({:.2}, {:.2}, {:.2})", facing.x, facing.y, facing.z),
        "session finished"
    );
    Ok(())
}
