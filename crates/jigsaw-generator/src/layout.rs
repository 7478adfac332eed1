use jigsaw_core::{GridSize, Position};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::ShuffleSeed;

/// A shuffled starting layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLayout {
    /// Grid the layout was generated for.
    pub grid_size: GridSize,
    /// `placements[i]` is the starting cell of the tile whose home is the
    /// row-major cell `i`. Every cell appears exactly once.
    pub placements: Vec<Position>,
    /// Seed that reproduces this layout.
    pub seed: ShuffleSeed,
}

impl GeneratedLayout {
    /// Returns `true` if every tile starts on its home cell.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.grid_size
            .positions()
            .zip(&self.placements)
            .all(|(home, placed)| home == *placed)
    }
}

/// Produces shuffled layouts for a fixed grid size.
#[derive(Debug, Clone, Copy)]
pub struct LayoutGenerator {
    grid_size: GridSize,
}

impl LayoutGenerator {
    /// Creates a generator for `grid_size`.
    #[must_use]
    pub const fn new(grid_size: GridSize) -> Self {
        Self { grid_size }
    }

    /// Generates a layout from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedLayout {
        self.generate_with_seed(ShuffleSeed::random())
    }

    /// Generates the layout determined by `seed`.
    ///
    /// The identity permutation is rejected and reshuffled so a new puzzle always
    /// starts with at least one tile out of place. A one-cell grid has no other
    /// permutation and is returned as is.
    #[must_use]
    pub fn generate_with_seed(&self, seed: ShuffleSeed) -> GeneratedLayout {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let mut layout = GeneratedLayout {
            grid_size: self.grid_size,
            placements: self.grid_size.positions().collect(),
            seed,
        };
        if self.grid_size.cell_count() < 2 {
            return layout;
        }
        loop {
            layout.placements.shuffle(&mut rng);
            if !layout.is_identity() {
                break;
            }
            log::debug!("seed {seed} produced the identity layout, reshuffling");
        }
        layout
    }
}
