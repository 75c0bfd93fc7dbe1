extern crate funnelbot;

use funnelbot::{logger, runner};
use funnelbot::strategy::FunnelStrategy;

use std::io;
use std::process;

fn main() {
    logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut algo = FunnelStrategy::new();

    match runner::run(&mut algo, stdin.lock(), &mut stdout.lock()) {
        Ok(()) => {}
        Err(error) => {
            eprintln!("Error while running game loop: {}", error);
            process::exit(1);
        }
    }
}
