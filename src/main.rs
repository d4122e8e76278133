//! Binary entry point: set up logging, build the app state over the built-in
//! catalog, and drive the Ratatui event loop until the user exits.
use log::info;
use movie_browser::logging::init_logging;
use movie_browser::{catalog, run_app, App, Config, SystemViewer};

fn main() -> anyhow::Result<()> {
    let config = Config::load();
    if let Err(err) = init_logging(&config.logging) {
        eprintln!("warning: logging disabled: {err}");
    }

    let movies = catalog();
    info!("starting movie browser with {} movies", movies.len());

    let mut app = App::new(config, movies, Box::new(SystemViewer));
    let result = run_app(&mut app);
    info!("movie browser closed");
    result
}
