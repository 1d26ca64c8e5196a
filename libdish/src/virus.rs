use strum::VariantArray;

/// The possible states of a virus. A reduced two-state form of Brian's
/// Brain: the canonical third "dying" state is collapsed away, but the
/// birth/survival thresholds are kept as documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, VariantArray)]
pub enum VirusState {
    Alive,

    #[default]
    Dead,
}

/// One cell of the petri dish. Holds its own state plus the flat indices
/// of its neighbors within the dish's storage; the indices are assigned
/// once during topology setup and never change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Virus {
    state: VirusState,
    neighbors: Vec<usize>,
}

impl Virus {
    pub fn state(&self) -> VirusState {
        self.state
    }

    pub fn set_state(&mut self, state: VirusState) {
        self.state = state;
    }

    /// Receive the list of neighboring viruses and take a copy, so the
    /// caller's sequence stays independently reusable.
    pub fn set_neighbors(&mut self, neighbors: &[usize]) {
        self.neighbors = neighbors.to_vec();
    }

    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Determine this virus's next state from the states of its neighbors,
    /// resolved against the dish storage the indices point into. Mutates
    /// nothing; an empty neighbor list counts zero alive neighbors.
    pub fn next_state(&self, viruses: &[Virus]) -> VirusState {
        let alive_count = self
            .neighbors
            .iter()
            .filter(|&&index| viruses[index].state == VirusState::Alive)
            .count();

        match self.state {
            VirusState::Dead => {
                if alive_count == 3 {
                    VirusState::Alive
                } else {
                    VirusState::Dead
                }
            }
            VirusState::Alive => {
                if alive_count < 2 || alive_count > 3 {
                    VirusState::Dead
                } else {
                    VirusState::Alive
                }
            }
        }
    }
}
