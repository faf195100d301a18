use life::rendering::Surface;
use life::{Config, Controller, Engine, ColorLut, input};
use macroquad::prelude::*;

/// Seconds between generations; independent of the render cadence
const STEP_INTERVAL: f32 = 0.1;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        fullscreen: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("life: {err}");
            return;
        }
    };

    let (width, height) = config.grid_dimensions(screen_width(), screen_height());
    let mut engine = Engine::new();
    if let Err(err) = engine.initialize(width, height) {
        eprintln!("life: {err}");
        return;
    }

    let lut = ColorLut::new(config.dead_color, config.alive_color);
    let mut surface = Surface::new(width, height);
    let mut controller = Controller::new(config.cell_size);
    let mut step_timer = 0.0_f32;

    loop {
        let mut failure = None;

        // 1. Drain pending input before anything touches the grid, so the
        //    rendered frame reflects every event handled this iteration.
        for event in input::poll() {
            if let Err(err) = controller.apply(event, &mut engine) {
                failure = Some(err);
                break;
            }
        }

        // 2. Advance the simulation on its own cadence
        if failure.is_none() && !controller.paused() {
            step_timer += get_frame_time();
            if step_timer >= STEP_INTERVAL {
                if let Err(err) = engine.step() {
                    failure = Some(err);
                }
                step_timer = 0.0;
            }
        }

        // 3. Render and present the current generation
        match engine.current() {
            Ok(grid) => surface.present(grid, &lut),
            Err(err) => failure = Some(err),
        }

        if let Some(err) = failure {
            eprintln!("life: {err}");
            break;
        }

        // 4. Wait for the display
        next_frame().await;

        // Quit is honored only after the iteration's render and present
        if controller.quit_requested() {
            break;
        }
    }

    if let Ok(generation) = engine.generation() {
        println!("\nExiting Game of Life after {generation} generations. Goodbye!");
    }
    if let Err(err) = engine.release() {
        eprintln!("life: {err}");
    }
}
