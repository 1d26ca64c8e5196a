use std::{
    io,
    process::exit,
    sync::{Arc, RwLock},
    time::Duration,
};

use anyhow::{bail, ensure, Context};
use libdish::{Position, RngStateSource, VirusState};

use crate::{render, ticker::TickerHost, State};

pub fn run_cli(state_arc: Arc<RwLock<State>>) {
    for line_res in io::stdin().lines() {
        let line = line_res.unwrap();
        let args = line.split_whitespace();

        if let Err(e) = handle_cmd(state_arc.clone(), args) {
            eprintln!("! {e:?}");
        }
    }
}

fn handle_cmd<'a, I>(state_arc: Arc<RwLock<State>>, mut args: I) -> anyhow::Result<()>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            let mut state = state_arc.write().unwrap();
            for _ in 0..times {
                state.dish.step();
            }
            render::draw(&state.dish);
        }

        "run" => {
            let rate = args.next().unwrap_or("500").parse::<u64>()?;

            let mut state = state_arc.write().unwrap();

            match &state.ticker {
                Some(ticker) => ticker.set_rate(rate),
                None => {
                    // The spawned thread blocks on the lock until we
                    // return and release it.
                    state.ticker = Some(TickerHost::start(
                        state_arc.clone(),
                        Duration::from_millis(rate),
                    ));
                }
            }
        }

        "stop" => {
            let mut state = state_arc.write().unwrap();

            match state.ticker.take() {
                Some(ticker) => ticker.stop(),
                None => bail!("Not running"),
            }
        }

        "reset" => {
            let mut state = state_arc.write().unwrap();
            state.dish.reset();
            render::draw(&state.dish);
        }

        "random" => {
            let mut state = state_arc.write().unwrap();
            state.dish.randomize(&mut RngStateSource(rand::rng()));
            render::draw(&state.dish);
        }

        "set" => {
            let row = args.next().context("missing row")?.parse::<usize>()?;
            let col = args.next().context("missing col")?.parse::<usize>()?;
            let state_name = args.next().context("missing state (alive|dead)")?;

            let virus_state = match state_name {
                "alive" => VirusState::Alive,
                "dead" => VirusState::Dead,
                _ => bail!("Unknown state {state_name:?}"),
            };

            let mut state = state_arc.write().unwrap();
            ensure!(
                row < state.dish.rows() && col < state.dish.cols(),
                "({row}, {col}) is outside the dish"
            );

            state.dish.set_virus_state(Position { row, col }, virus_state);
            render::draw(&state.dish);
        }

        "blinker" => {
            let row = args.next().unwrap_or("5").parse::<usize>()?;
            let col = args.next().unwrap_or("5").parse::<usize>()?;

            let mut state = state_arc.write().unwrap();
            ensure!(
                row < state.dish.rows() && col + 2 < state.dish.cols(),
                "blinker at ({row}, {col}) does not fit in the dish"
            );

            state.dish.blinker(Position { row, col });
            render::draw(&state.dish);
        }

        "show" => {
            render::draw(&state_arc.read().unwrap().dish);
        }

        "exit" => {
            exit(0);
        }

        _ => bail!("Unknown command"),
    }

    println!("OK");
    Ok(())
}
