//! Square per-cell matrices shared by the track stages.
//!
//! One generic [`Grid`] backs the usage counts, the turn mask and the
//! waypoint proximity mask. Storage is a flat row-major `Vec`.

use crate::geometry::Cell;

/// A `size x size` matrix indexed by [`Cell`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    data: Vec<T>,
}

/// Per-cell count of how many times the track passes through a cell.
pub type UsageGrid = Grid<u8>;

/// Per-cell boolean flag.
pub type Mask = Grid<bool>;

impl<T: Clone + Default> Grid<T> {
    /// Create a grid filled with `T::default()`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![T::default(); size * size],
        }
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `cell` lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.size && (cell.y as usize) < self.size
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.x as usize * self.size + cell.y as usize)
        } else {
            None
        }
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.index(cell).map(|i| &self.data[i])
    }

    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        self.index(cell).map(move |i| &mut self.data[i])
    }

    /// Iterate over all cells with their values, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> + '_ {
        let size = self.size;
        self.data.iter().enumerate().map(move |(i, v)| {
            (Cell::new((i / size) as i32, (i % size) as i32), v)
        })
    }
}

impl<T: Copy + Default> Grid<T> {
    /// Value at `cell`, or the default outside the grid.
    #[inline]
    pub fn at(&self, cell: Cell) -> T {
        self.get(cell).copied().unwrap_or_default()
    }
}

impl UsageGrid {
    /// Record one more pass through `cell`.
    pub fn increment(&mut self, cell: Cell) {
        if let Some(count) = self.get_mut(cell) {
            *count = count.saturating_add(1);
        }
    }
}

impl Mask {
    pub fn mark(&mut self, cell: Cell) {
        if let Some(flag) = self.get_mut(cell) {
            *flag = true;
        }
    }

    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}

/// Mark the 8-connected neighborhood of every waypoint, clipped to the grid.
pub fn nearby_mask(size: usize, waypoints: &[Cell]) -> Mask {
    let mut mask = Mask::new(size);
    for &point in waypoints {
        for dx in -1..=1 {
            for dy in -1..=1 {
                mask.mark(point + Cell::new(dx, dy));
            }
        }
    }
    mask
}
