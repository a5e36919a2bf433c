//! Arcade Binary
//!
//! Opens the light controller and the webcam detector, then plays one game.
//! Type "q" + Enter to quit early.

use clap::Parser;
use gesture_arcade::*;

fn main() {
    let args = cli::Args::parse();
    if let Err(e) = play(&args) {
        eprintln!("[ERROR] {:#}", e);
        std::process::exit(1);
    }
}

fn play(args: &cli::Args) -> anyhow::Result<()> {
    log()?;
    let settings = args.settings()?;
    let link = args.link()?;
    let camera = args.camera()?;
    brb();
    let session = game::Session::new(settings, camera, link);
    let ref mut session = match args.seed {
        Some(seed) => session.with_seed(seed),
        None => session,
    };
    session.run();
    Ok(())
}
