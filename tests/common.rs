use algoviz::grid::Grid;

/// Build a grid from an ASCII sketch: `#` is a wall, anything else is
/// open
#[allow(dead_code)]
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    let mut grid = Grid::new(rows.len(), rows[0].len()).unwrap();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch == '#' {
                grid.set_wall(row, col, true).unwrap();
            }
        }
    }
    grid
}

/// Shortest path length in edges by brute-force enumeration of simple
/// paths; None when unreachable
#[allow(dead_code)]
pub fn brute_force_shortest(grid: &Grid, start: usize, end: usize) -> Option<usize> {
    let mut visited = vec![false; grid.len()];
    visited[start] = true;
    let mut best = None;
    explore(grid, start, end, 0, &mut visited, &mut best);
    best
}

fn explore(
    grid: &Grid,
    current: usize,
    end: usize,
    depth: usize,
    visited: &mut Vec<bool>,
    best: &mut Option<usize>,
) {
    if current == end {
        *best = Some(best.map_or(depth, |b: usize| b.min(depth)));
        return;
    }
    for neighbor in grid.neighbors(current) {
        if !visited[neighbor] {
            visited[neighbor] = true;
            explore(grid, neighbor, end, depth + 1, visited, best);
            visited[neighbor] = false;
        }
    }
}
