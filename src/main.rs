use std::time::{Duration, Instant};

use clap::Parser;
use macroquad::prelude::*;
use pixel_life::{
    Config, FixedRate, Renderer, Session, draw_hud,
    input::{FrameInput, InputState},
};

/// How often the population readout is recounted
const LIVE_COUNT_REFRESH: Duration = Duration::from_millis(500);

fn window_conf() -> Conf {
    let config = Config::parse();
    Conf {
        window_title: "Pixel Life".to_owned(),
        window_width: config.viewport_width as i32,
        window_height: config.viewport_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let mut session = match Session::from_config(&config) {
        Ok(session) => session,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };

    let mut renderer = Renderer::new(session.buffer());
    let mut input = InputState::new(
        (config.viewport_width as f32, config.viewport_height as f32),
        config.seed_size,
    );

    // Simulation and render ticks are scheduled independently
    let start = Instant::now();
    let mut sim_rate = FixedRate::new(config.sim_hz, start);
    let mut render_rate = FixedRate::new(config.render_hz, start);

    let mut live_cells = session.generation().live_count();
    let mut last_count = start;

    loop {
        let frame = FrameInput::capture();
        for command in input.translate(&frame) {
            session.apply(command);
        }

        let now = Instant::now();
        sim_rate.run_if_due(now, || {
            session.simulation_tick();
        });
        render_rate.run_if_due(now, || renderer.sync(session.buffer()));

        if last_count.elapsed() >= LIVE_COUNT_REFRESH {
            live_cells = session.generation().live_count();
            last_count = Instant::now();
        }

        renderer.present(&session);
        draw_hud(&session, live_cells);

        next_frame().await;
    }
}
