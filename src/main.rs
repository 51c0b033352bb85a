use connect4::{
    config::DEFAULT_LOG_LEVEL,
    console::{self, Keyboard, Screen},
    RandomAgent,
};

fn main() {
    env_logger::builder()
        .filter_level(DEFAULT_LOG_LEVEL)
        .parse_default_env()
        .init();

    let mut keyboard = Keyboard::stdin();
    let mut screen = Screen::stdout();
    let mut agent = RandomAgent::new();

    match console::run(&mut keyboard, &mut screen, &mut agent) {
        Ok(tally) => log::info!("session finished after {} games", tally.games()),
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
