/// Fuzzes the solvers by checking on many random grids that a path is found exactly when
/// the goal is part of the same connected component, that found paths are legal, and that
/// on small grids they are as short as the best of all simple paths.
use grid_astar::{
    grid::Grid,
    solver::{astar::AstarSolver, dijkstra::DijkstraSolver, is_valid_path, path_cost, GridSolver},
    verify::{Verifier, COST_EPSILON},
    Point,
};
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng, keep_open: &[Point]) -> Grid {
    let mut matrix = vec![vec![0u8; h]; w];
    for column in matrix.iter_mut() {
        for cell in column.iter_mut() {
            *cell = u8::from(rng.gen_bool(0.4));
        }
    }
    for p in keep_open {
        matrix[p.x as usize][p.y as usize] = 0;
    }
    Grid::from_matrix(&matrix).unwrap()
}

fn visualize_grid(grid: &Grid, start: &Point, end: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !grid.can_move_to_simple(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    let solver = AstarSolver::new();
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng, &[start, end]);
        let reachable = grid.reachable(&start, &end);
        let path = solver.find_path(&grid, start, end).unwrap();
        // Show the grid if a path is not found
        if path.is_some() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(path.is_some(), reachable);
        if let Some(path) = path {
            assert!(is_valid_path(&grid, &path));
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
        }
    }
}

#[test]
fn fuzz_dijkstra_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let astar_solver = AstarSolver::new();
    for _ in 0..N_GRIDS {
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let grid = random_grid(N, N, &mut rng, &[start, end]);
        let astar_path = astar_solver.find_path(&grid, start, end).unwrap();
        let dijkstra_path = DijkstraSolver.find_path(&grid, start, end).unwrap();
        assert_eq!(astar_path.is_some(), dijkstra_path.is_some());
        if let (Some(astar_path), Some(dijkstra_path)) = (astar_path, dijkstra_path) {
            let astar_cost = path_cost(&astar_path);
            let dijkstra_cost = path_cost(&dijkstra_path);
            if (astar_cost - dijkstra_cost).abs() >= COST_EPSILON {
                println!("Astar distance: {astar_cost}; Dijkstra distance: {dijkstra_cost}");
                visualize_grid(&grid, &start, &end);
            }
            assert!((astar_cost - dijkstra_cost).abs() < COST_EPSILON);
        }
    }
}

#[test]
fn fuzz_against_enumeration() {
    const N: usize = 4;
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(2);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    let solver = AstarSolver::new();
    let verifier = Verifier::new();
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng, &[start, end]);
        let path = solver.find_path(&grid, start, end).unwrap();
        let verification = verifier.verify(&grid, path.as_deref()).unwrap();
        match path {
            Some(path) => {
                assert!(verification.path_count > 0);
                assert_eq!(verification.shortest_len, Some(path.len()));
                assert!(verification.hop_optimal);
                assert!(verification.cost_optimal);
            }
            None => assert!(verifier
                .enumerator
                .find_all_paths(&grid, start, end)
                .unwrap()
                .is_empty()),
        }
    }
}

// Wall density grows with the grid so the number of simple paths stays tractable.
fn wall_density(cells: usize) -> f64 {
    match cells {
        0..=12 => 0.3,
        13..=30 => 0.45,
        _ => 0.6,
    }
}

#[test]
fn fuzz_optimal_on_small_grids() {
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(3);
    let solver = AstarSolver::new();
    let mut verifier = Verifier::new();
    verifier.enumerator.max_cells = 64;
    for _ in 0..N_GRIDS {
        let w = rng.gen_range(1..=8);
        let h = rng.gen_range(1..=8);
        let density = wall_density(w * h);
        let matrix: Vec<Vec<u8>> = (0..w)
            .map(|_| (0..h).map(|_| u8::from(rng.gen_bool(density))).collect())
            .collect();
        let grid = Grid::from_matrix(&matrix).unwrap();
        let start = Point::new(rng.gen_range(0..w as i32), rng.gen_range(0..h as i32));
        let end = Point::new(rng.gen_range(0..w as i32), rng.gen_range(0..h as i32));
        if !grid.can_move_to_simple(start) {
            continue;
        }
        let path = solver.find_path(&grid, start, end).unwrap();
        if let Some(path) = &path {
            assert!(is_valid_path(&grid, path));
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
        }
        let optimal = verifier.is_optimal(&grid, path.as_deref()).unwrap();
        if !optimal {
            visualize_grid(&grid, &start, &end);
        }
        assert!(optimal);
    }
}

#[test]
fn degenerate_shapes() {
    let solver = AstarSolver::new();
    let verifier = Verifier::new();
    for (w, h) in [(1, 8), (8, 1), (1, 1)] {
        let grid = Grid::new(w, h).unwrap();
        let end = Point::new(w as i32 - 1, h as i32 - 1);
        let path = solver
            .find_path(&grid, Point::new(0, 0), end)
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), w.max(h));
        assert!(verifier.is_optimal(&grid, Some(&path)).unwrap());
        let all = verifier
            .enumerator
            .find_all_paths(&grid, Point::new(0, 0), end)
            .unwrap();
        assert_eq!(all, vec![path]);
    }
}
