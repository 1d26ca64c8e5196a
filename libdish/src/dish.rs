use itertools::Itertools;
use strum::VariantArray;

use super::pos::Position;
use super::source::StateSource;
use super::virus::{Virus, VirusState};

/// Default size for the petri dish.
pub const DEFAULT_ROWS: usize = 50;
pub const DEFAULT_COLS: usize = 50;

/// A fixed-size rectangular dish of viruses. The dish owns all cells in a
/// flat row-major vector; each cell's neighbor topology is computed once at
/// construction and frozen. Grid edges clip the Moore neighborhood, they
/// never wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetriDish {
    rows: usize,
    cols: usize,
    viruses: Vec<Virus>,
}

impl PetriDish {
    /// Create a dish of the given size with every virus `Dead` and the
    /// neighbor topology built. Both dimensions must be at least 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows >= 1 && cols >= 1,
            "petri dish needs at least one row and one column"
        );

        let viruses = vec![Virus::default(); rows * cols];
        let mut dish = Self {
            rows,
            cols,
            viruses,
        };

        dish.setup_neighbors();
        dish
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn virus<P>(&self, pos: P) -> Option<&Virus>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.viruses.get(index)
    }

    /// Read access to the whole grid, for the view. State changes go
    /// through `step`, `reset`, `randomize` or `set_virus_state` only.
    pub fn viruses(&self) -> &[Virus] {
        &self.viruses
    }

    pub fn enumerate_viruses(&self) -> impl Iterator<Item = (Position, &Virus)> {
        self.viruses
            .iter()
            .enumerate()
            .map(|(index, virus)| (self.index_to_pos(index), virus))
    }

    /// Run the automaton for one generation. Two phases: first every next
    /// state is computed from the untouched current snapshot, then all of
    /// them are committed. A single in-place sweep would let an
    /// already-updated virus leak into a neighbor's count.
    pub fn step(&mut self) {
        let next_states: Vec<VirusState> = self
            .viruses
            .iter()
            .map(|virus| virus.next_state(&self.viruses))
            .collect();

        for (virus, next_state) in self.viruses.iter_mut().zip(next_states) {
            virus.set_state(next_state);
        }
    }

    /// Reset every virus to `Dead`.
    pub fn reset(&mut self) {
        for virus in &mut self.viruses {
            virus.set_state(VirusState::Dead);
        }
    }

    /// Set every virus to a uniformly drawn state, independently per cell.
    pub fn randomize<S>(&mut self, source: &mut S)
    where
        S: StateSource,
    {
        for virus in &mut self.viruses {
            let choice = source.pick(VirusState::VARIANTS.len());
            virus.set_state(VirusState::VARIANTS[choice]);
        }
    }

    /// Set the state of one virus. The position must be inside the dish;
    /// out-of-bounds coordinates are a caller error and panic rather than
    /// clamp.
    pub fn set_virus_state<P>(&mut self, pos: P, state: VirusState)
    where
        P: Into<Position>,
    {
        let index = self
            .pos_to_index(pos)
            .expect("position outside the petri dish");
        self.viruses[index].set_state(state);
    }

    /// Seed a blinker: three horizontally adjacent alive viruses starting
    /// at `pos` and extending along its row.
    pub fn blinker<P>(&mut self, pos: P)
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        for offset in 0..3 {
            self.set_virus_state([row, col + offset], VirusState::Alive);
        }
    }

    /// Give each virus the flat indices of its in-bounds Moore neighbors.
    /// Runs once, right after allocation.
    fn setup_neighbors(&mut self) {
        for index in 0..self.viruses.len() {
            let Position { row, col } = self.index_to_pos(index);

            let neighbors = (-1isize..=1)
                .cartesian_product(-1isize..=1)
                .filter(|&offset| offset != (0, 0))
                .filter_map(|(row_offset, col_offset)| {
                    // Offsets falling before row/col 0 or past the far
                    // edge are dropped, never wrapped to the other side.
                    let pos = Position {
                        row: row.checked_add_signed(row_offset)?,
                        col: col.checked_add_signed(col_offset)?,
                    };

                    self.pos_to_index(pos)
                })
                .collect_vec();

            self.viruses[index].set_neighbors(&neighbors);
        }
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.cols {
            return None;
        }

        Some(col + (row * self.cols))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.cols;
        let col = index % self.cols;
        Position { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_positions(dish: &PetriDish) -> Vec<Position> {
        dish.enumerate_viruses()
            .filter(|(_, virus)| virus.state() == VirusState::Alive)
            .map(|(pos, _)| pos)
            .collect()
    }

    #[test]
    fn new_dish_is_all_dead() {
        let dish = PetriDish::new(4, 6);

        assert_eq!(dish.viruses().len(), 24);
        assert!(alive_positions(&dish).is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one row")]
    fn zero_dimension_is_rejected() {
        PetriDish::new(0, 5);
    }

    #[test]
    fn neighbor_counts_by_location() {
        let dish = PetriDish::new(5, 5);

        // Interior, edge (non-corner), corner.
        assert_eq!(dish.virus([2, 2]).unwrap().neighbors().len(), 8);
        assert_eq!(dish.virus([0, 2]).unwrap().neighbors().len(), 5);
        assert_eq!(dish.virus([2, 4]).unwrap().neighbors().len(), 5);
        assert_eq!(dish.virus([0, 0]).unwrap().neighbors().len(), 3);
        assert_eq!(dish.virus([4, 4]).unwrap().neighbors().len(), 3);
    }

    #[test]
    fn single_cell_dish_has_no_neighbors() {
        let dish = PetriDish::new(1, 1);

        assert!(dish.virus([0, 0]).unwrap().neighbors().is_empty());
    }

    #[test]
    fn no_virus_neighbors_itself() {
        let dish = PetriDish::new(4, 7);

        for (index, virus) in dish.viruses().iter().enumerate() {
            assert!(!virus.neighbors().contains(&index));
        }
    }

    #[test]
    fn borders_do_not_wrap() {
        let dish = PetriDish::new(3, 4);

        for (pos, virus) in dish.enumerate_viruses() {
            for &neighbor_index in virus.neighbors() {
                let neighbor_pos = dish.index_to_pos(neighbor_index);

                if pos.col == 0 {
                    assert_ne!(neighbor_pos.col, dish.cols() - 1);
                }
                if pos.col == dish.cols() - 1 {
                    assert_ne!(neighbor_pos.col, 0);
                }
                if pos.row == 0 {
                    assert_ne!(neighbor_pos.row, dish.rows() - 1);
                }
                if pos.row == dish.rows() - 1 {
                    assert_ne!(neighbor_pos.row, 0);
                }
            }
        }
    }

    #[test]
    fn step_is_synchronous_over_the_prior_snapshot() {
        // A horizontal triple in the middle row of a 3x3 dish. A naive
        // in-place sweep would kill (1,0) before (1,1) counts it; the
        // two-phase step must produce the vertical triple instead.
        let mut dish = PetriDish::new(3, 3);
        dish.blinker([1, 0]);

        dish.step();

        assert_eq!(
            alive_positions(&dish),
            vec![
                Position { row: 0, col: 1 },
                Position { row: 1, col: 1 },
                Position { row: 2, col: 1 },
            ]
        );
    }

    #[test]
    fn blinker_scenario_matches_hand_computed_grid() {
        let mut dish = PetriDish::new(10, 10);
        dish.blinker([5, 5]);

        assert_eq!(
            alive_positions(&dish),
            vec![
                Position { row: 5, col: 5 },
                Position { row: 5, col: 6 },
                Position { row: 5, col: 7 },
            ]
        );

        dish.step();

        // Ends of the triple die (one alive neighbor each), the center
        // survives on two, and the cells directly above and below the
        // center are born on exactly three.
        assert_eq!(
            alive_positions(&dish),
            vec![
                Position { row: 4, col: 6 },
                Position { row: 5, col: 6 },
                Position { row: 6, col: 6 },
            ]
        );

        dish.step();

        // One more generation flips it back to the horizontal triple.
        assert_eq!(
            alive_positions(&dish),
            vec![
                Position { row: 5, col: 5 },
                Position { row: 5, col: 6 },
                Position { row: 5, col: 7 },
            ]
        );
    }

    #[test]
    fn reset_is_idempotent() {
        let mut dish = PetriDish::new(6, 6);
        dish.blinker([2, 1]);

        dish.reset();
        let once = dish.clone();
        dish.reset();

        assert_eq!(dish, once);
        assert!(alive_positions(&dish).is_empty());
    }

    #[test]
    fn randomize_follows_the_injected_source() {
        struct Alternating(usize);

        impl StateSource for Alternating {
            fn pick(&mut self, num_states: usize) -> usize {
                let choice = self.0 % num_states;
                self.0 += 1;
                choice
            }
        }

        let mut dish = PetriDish::new(2, 2);
        dish.randomize(&mut Alternating(0));

        let states: Vec<VirusState> = dish.viruses().iter().map(Virus::state).collect();
        assert_eq!(
            states,
            vec![
                VirusState::Alive,
                VirusState::Dead,
                VirusState::Alive,
                VirusState::Dead,
            ]
        );
    }

    #[test]
    #[should_panic(expected = "outside the petri dish")]
    fn set_virus_state_rejects_out_of_bounds() {
        let mut dish = PetriDish::new(3, 3);
        dish.set_virus_state([3, 0], VirusState::Alive);
    }
}
