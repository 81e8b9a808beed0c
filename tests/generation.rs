use std::collections::HashSet;

use pixel_life::{Algorithm, Generation, GridSpec};
use rand::{Rng, SeedableRng, rngs::StdRng};

const SIDE: u32 = 48;

fn live(generation: &Generation) -> HashSet<(i64, i64)> {
    generation.live_cells().map(|c| (c.x as i64, c.y as i64)).collect()
}

/// Reference stepper on a bounded board, cells beyond the edge are dead
fn step_naive(cells: &HashSet<(i64, i64)>) -> HashSet<(i64, i64)> {
    let on_board = |x: i64, y: i64| x >= 0 && y >= 0 && x < SIDE as i64 && y < SIDE as i64;
    let mut next = HashSet::new();
    for y in 0..SIDE as i64 {
        for x in 0..SIDE as i64 {
            let mut neighbors = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) != (0, 0) && on_board(x + dx, y + dy) && cells.contains(&(x + dx, y + dy)) {
                        neighbors += 1;
                    }
                }
            }
            let alive = cells.contains(&(x, y));
            if neighbors == 3 || (alive && neighbors == 2) {
                next.insert((x, y));
            }
        }
    }
    next
}

fn random_board(rng: &mut StdRng, density: f64) -> Generation {
    let mut generation = Generation::new(GridSpec::new(SIDE));
    for y in 0..SIDE as i64 {
        for x in 0..SIDE as i64 {
            if rng.random_bool(density) {
                generation.add_life(x, y);
            }
        }
    }
    generation
}

#[test]
fn matches_reference_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(2024);
    for density in [0.1, 0.3, 0.5, 0.8] {
        let mut generation = random_board(&mut rng, density);
        let mut expected = live(&generation);
        for _ in 0..12 {
            generation = generation.step();
            expected = step_naive(&expected);
            assert_eq!(live(&generation), expected);
        }
    }
}

#[test]
fn parallel_matches_reference() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut generation = random_board(&mut rng, 0.35);
    let mut expected = live(&generation);
    for _ in 0..12 {
        generation = generation.step_with(Algorithm::SparseParallel);
        expected = step_naive(&expected);
        assert_eq!(live(&generation), expected);
    }
}

#[test]
fn result_does_not_depend_on_insertion_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut coords: Vec<(i64, i64)> = live(&random_board(&mut rng, 0.4)).into_iter().collect();
    coords.sort();

    let mut forward = Generation::new(GridSpec::new(SIDE));
    coords.iter().for_each(|&(x, y)| { forward.add_life(x, y); });
    let mut backward = Generation::new(GridSpec::new(SIDE));
    coords.iter().rev().for_each(|&(x, y)| { backward.add_life(x, y); });

    assert_eq!(forward.step(), backward.step());
}

#[test]
fn tracked_cells_are_live_or_touched() {
    let mut rng = StdRng::seed_from_u64(11);
    let previous = random_board(&mut rng, 0.2);
    let previous_live = live(&previous);
    let next = previous.step();

    for cell in next.iter() {
        let (x, y) = (cell.x as i64, cell.y as i64);
        let touched = (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&d| d != (0, 0))
            .any(|(dx, dy)| previous_live.contains(&(x + dx, y + dy)));
        assert!(previous_live.contains(&(x, y)) || touched, "({x}, {y}) tracked without cause");
        assert!(cell.alive || cell.neighbors != 3);
    }
}
