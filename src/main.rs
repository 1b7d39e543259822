use macroquad::prelude::*;
use cellular_automata::{Session, SimConfig, input, rendering};

fn window_conf() -> Conf {
    let config = SimConfig::from_env();
    let (width, height) = rendering::window_size(config.width, config.height, config.cell_pixels);
    Conf {
        window_title: "Cellular Automata".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = SimConfig::from_env();
    let mut session = Session::new(&config);

    loop {
        session = input::process_keyboard_input(session);

        // Update simulation
        session = session.tick(get_frame_time());

        clear_background(BLACK);
        let lattice = session.kind().lattice();
        rendering::draw_grid(session.surface.shown(), lattice, config.cell_pixels);
        rendering::draw_controls(&session, screen_width() - rendering::PANEL_WIDTH);

        next_frame().await;
    }
}
