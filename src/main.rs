use std::io;
use std::process::ExitCode;

use crossterm::style::Stylize;

use cricket_terminal::config::AppConfig;
use cricket_terminal::credentials::JsonFileStore;
use cricket_terminal::menu;
use cricket_terminal::prompt::TerminalPrompter;

fn main() -> ExitCode {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cfg = AppConfig::from_env();
    let store = JsonFileStore::new(cfg.config_path.clone());
    let mut prompter = TerminalPrompter::stdio();
    let mut stdout = io::stdout();

    if let Err(err) = menu::run(&cfg, &store, &mut prompter, &mut stdout) {
        eprintln!("{} {err:#}", "Error:".red().bold());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
