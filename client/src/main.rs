use std::{
    env,
    sync::{Arc, RwLock},
};

use libdish::{
    dish::{DEFAULT_COLS, DEFAULT_ROWS},
    PetriDish, RngStateSource,
};
use ticker::TickerHost;

mod cli;
mod render;
mod ticker;

pub struct State {
    dish: PetriDish,
    ticker: Option<TickerHost>,
}

fn main() {
    let mut args = env::args().skip(1);
    let rows = parse_dimension(args.next(), DEFAULT_ROWS);
    let cols = parse_dimension(args.next(), DEFAULT_COLS);

    let mut dish = PetriDish::new(rows, cols);
    dish.randomize(&mut RngStateSource(rand::rng()));

    // The original dish always started with a blinker; keep it when it fits.
    if rows > 5 && cols > 7 {
        dish.blinker([5, 5]);
    }

    render::draw(&dish);

    let state_arc = Arc::new(RwLock::new(State { dish, ticker: None }));

    cli::run_cli(state_arc);
}

fn parse_dimension(arg: Option<String>, default: usize) -> usize {
    let Some(arg) = arg else {
        return default;
    };

    let parsed: usize = arg.parse().expect("dish dimensions must be integers");
    assert!(parsed >= 1, "dish dimensions must be at least 1");
    parsed
}
