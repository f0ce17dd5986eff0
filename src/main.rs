mod animate;
mod app;
mod compose;
mod config;
mod grid;
mod mask;
mod quote;
mod style;

use clap::Parser;
use config::Args;
use log::warn;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    // the banner is decoration; a broken terminal is not worth a failing exit code
    if let Err(err) = app::run(args) {
        warn!("banner: {err:#}");
    }
}
