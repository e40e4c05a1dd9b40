use ReynoldsFilm::cli::cli_main::run_interactive_menu;
use ReynoldsFilm::cli::cli_reynolds::{report, run_from_file};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    //
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    match std::env::args().nth(1) {
        Some(file_path) => report(run_from_file(&file_path)),
        None => run_interactive_menu(),
    }
}
