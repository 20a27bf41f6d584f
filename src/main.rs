use macroquad::prelude::*;
use life_viewer::{
    application::{Controller, Flow, FrameLimiter, SimulationSession, Viewport},
    audio::ClipPlayer,
    config::Config,
    input::WindowInput,
    persistence::FileStore,
    rendering,
};

fn window_conf() -> Conf {
    Conf {
        window_title: Config::WINDOW_TITLE.to_owned(),
        window_width: Config::WINDOW_WIDTH,
        window_height: Config::WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut input = WindowInput::new();
    let (width, height) = input.size();

    let mut rng = ::rand::rng();
    let session = SimulationSession::new(Viewport::new(width, height), &mut rng);
    let audio = ClipPlayer::load().await;
    let mut controller = Controller::new(session, rng, FileStore::new(Config::SAVE_PATH), audio);
    let mut limiter = FrameLimiter::default();

    log::info!(
        "Starting with a {}x{} grid",
        controller.session().grid.rows(),
        controller.session().grid.cols()
    );

    loop {
        if controller.frame(input.poll()) == Flow::Quit {
            break;
        }

        rendering::paint(&rendering::describe(controller.session()));
        limiter.sleep(controller.session().speed);

        next_frame().await;
    }

    log::info!("Quit after {} generations", controller.session().generation);
}
