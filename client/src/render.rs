use colored::Colorize;
use libdish::{PetriDish, VirusState};

/// Print the dish to the terminal, one line per row.
pub fn draw(dish: &PetriDish) {
    for (pos, virus) in dish.enumerate_viruses() {
        let tile = match virus.state() {
            VirusState::Alive => "██".green(),
            VirusState::Dead => "··".bright_black(),
        };

        print!("{tile}");

        if pos.col == dish.cols() - 1 {
            println!();
        }
    }

    println!();
}
