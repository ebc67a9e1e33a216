// grid.rs - Flat cell grid for the snake board

// Compile-time board configuration
pub const CELL_SIZE: usize = 40;                        // Logical units per cell
pub const SURFACE_SIZE: usize = 840 + CELL_SIZE * 2;    // Window edge including the border ring
pub const GRID_WIDTH: usize = SURFACE_SIZE / CELL_SIZE; // Cells per row (23)
pub const GRID_HEIGHT: usize = SURFACE_SIZE / CELL_SIZE;
pub const FOOD_MARGIN: usize = 3;                       // Food never spawns in the 3 outermost cells

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Border,
    Head,
    Body,
    Food,
}

/// Row-major board: `x = index % width`, `y = index / width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    pub fn is_border(&self, index: usize) -> bool {
        let (x, y) = self.coords(index);
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    /// True when `index` is at least `margin` cells away from every edge.
    pub fn is_inside_margin(&self, index: usize, margin: usize) -> bool {
        let (x, y) = self.coords(index);
        x >= margin && y >= margin && x + margin < self.width && y + margin < self.height
    }

    /// Rebuilds every cell from the logical state. Precedence is
    /// border, head, food, body, then empty.
    pub fn materialize(&mut self, head: usize, food: Option<usize>, body: &[usize]) {
        for index in 0..self.cells.len() {
            self.cells[index] = if self.is_border(index) {
                Cell::Border
            } else if index == head {
                Cell::Head
            } else if Some(index) == food {
                Cell::Food
            } else if body.contains(&index) {
                Cell::Body
            } else {
                Cell::Empty
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_matches_surface() {
        let grid = Grid::default();
        assert_eq!(grid.width(), 23);
        assert_eq!(grid.height(), 23);
        assert_eq!(grid.len(), 529);
        assert!(grid.cells().iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn index_and_coords_agree() {
        let grid = Grid::default();
        let index = grid.index(7, 11);
        assert_eq!(index, 11 * 23 + 7);
        assert_eq!(grid.coords(index), (7, 11));
    }

    #[test]
    fn margin_excludes_three_outer_cells() {
        let grid = Grid::default();
        assert!(!grid.is_inside_margin(grid.index(2, 10), FOOD_MARGIN));
        assert!(grid.is_inside_margin(grid.index(3, 10), FOOD_MARGIN));
        assert!(grid.is_inside_margin(grid.index(19, 19), FOOD_MARGIN));
        assert!(!grid.is_inside_margin(grid.index(20, 10), FOOD_MARGIN));
        assert!(!grid.is_inside_margin(grid.index(10, 20), FOOD_MARGIN));
    }

    #[test]
    fn materialize_paints_border_over_everything() {
        let mut grid = Grid::new(6, 6);
        let corner = grid.index(0, 0);
        grid.materialize(corner, None, &[]);
        assert_eq!(grid.get(corner), Some(Cell::Border));
        assert!(!grid.cells().contains(&Cell::Head));

        let head = grid.index(2, 2);
        let food = grid.index(3, 3);
        let body = [grid.index(2, 3), grid.index(1, 3)];
        grid.materialize(head, Some(food), &body);
        assert_eq!(grid.get(head), Some(Cell::Head));
        assert_eq!(grid.get(food), Some(Cell::Food));
        assert_eq!(grid.get(body[0]), Some(Cell::Body));
        assert_eq!(grid.get(body[1]), Some(Cell::Body));
        assert_eq!(grid.cells().iter().filter(|&&c| c == Cell::Border).count(), 20);
    }
}
