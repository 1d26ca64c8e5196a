pub mod dish;
pub mod pos;
pub mod source;
pub mod virus;

pub use dish::PetriDish;
pub use pos::Position;
pub use source::{RngStateSource, StateSource};
pub use virus::{Virus, VirusState};
