//! Deja Bounce entry point

mod game;

use mini_arcade::prelude::Engine;

use game::settings::GameState;

fn main() {
    let engine = Engine::new(
        game::engine_config(),
        GameState::default(),
        game::registry(),
        "menu",
    );

    if let Err(e) = engine.run() {
        eprintln!("engine error: {e}");
        std::process::exit(1);
    }
}
