//! End-to-end: algorithm output flowing through the replay controller.

use std::time::Duration;

use algoviz_core::{Cell, Coord, Grid, Trace, TraversalResult};
use algoviz_paths::{TraversalKind, run_traversal};
use algoviz_replay::{Playback, Replay, ReplayEvent};
use algoviz_sort::{SortKind, run_sort};

fn open_grid(rows: i32, cols: i32, start: Coord, goal: Coord) -> Grid {
    let mut g = Grid::new(rows, cols).unwrap();
    g.set(start, Cell::start());
    g.set(goal, Cell::goal());
    g
}

#[test]
fn traversal_result_replays_as_two_phases() {
    let start = Coord::new(0, 0);
    let goal = Coord::new(2, 2);
    let grid = open_grid(3, 3, start, goal);
    let result = run_traversal(TraversalKind::Bfs, &grid, start, goal).unwrap();
    let expected_visits = result.visit_order.clone();
    let expected_path = result.path.clone();

    let replay = Replay::new();
    let mut visits = Vec::new();
    let mut path = Vec::new();
    let outcome = replay
        .start(&Trace::from(result), Duration::ZERO, |ev| match ev {
            ReplayEvent::Visited(c) => {
                assert!(path.is_empty(), "visited events must precede path events");
                visits.push(c);
            }
            ReplayEvent::Path(c) => path.push(c),
            ReplayEvent::Step(_) => panic!("sort step from a traversal trace"),
        })
        .unwrap();

    assert_eq!(outcome, Playback::Completed);
    assert_eq!(visits, expected_visits);
    assert_eq!(path, expected_path);
    assert_eq!(path.len(), 5);
}

#[test]
fn sort_run_replays_every_recorded_step() {
    let steps = run_sort(SortKind::Quick, &[5, 3, 4, 1, 2]).unwrap();
    let expected = steps.clone();

    let replay = Replay::new();
    let mut seen = Vec::new();
    let outcome = replay
        .start(&Trace::from(steps), Duration::ZERO, |ev| match ev {
            ReplayEvent::Step(s) => seen.push(s),
            other => panic!("unexpected event {other:?}"),
        })
        .unwrap();

    assert_eq!(outcome, Playback::Completed);
    assert_eq!(seen, expected);
    assert_eq!(seen.last().unwrap().snapshot, [1, 2, 3, 4, 5]);
}

#[test]
fn predicted_path_replays_interchangeably_with_native_output() {
    // An externally computed path (e.g. the ML demo) wrapped into the
    // common trace shape.
    let predicted = vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)];
    let trace = Trace::from(TraversalResult::from_predicted(predicted.clone()));

    let replay = Replay::new();
    let mut visits = Vec::new();
    let mut path = Vec::new();
    let outcome = replay
        .start(&trace, Duration::ZERO, |ev| match ev {
            ReplayEvent::Visited(c) => visits.push(c),
            ReplayEvent::Path(c) => path.push(c),
            ReplayEvent::Step(_) => panic!("sort step from a traversal trace"),
        })
        .unwrap();

    assert_eq!(outcome, Playback::Completed);
    assert_eq!(visits, predicted);
    assert_eq!(path, predicted);
}

#[test]
fn one_controller_serves_successive_runs() {
    let start = Coord::new(0, 0);
    let goal = Coord::new(1, 1);
    let grid = open_grid(2, 2, start, goal);
    let replay = Replay::new();

    for kind in [TraversalKind::Bfs, TraversalKind::Dfs, TraversalKind::Dijkstra] {
        let result = run_traversal(kind, &grid, start, goal).unwrap();
        let mut count = 0;
        let outcome = replay
            .start(&Trace::from(result), Duration::ZERO, |_| count += 1)
            .unwrap();
        assert_eq!(outcome, Playback::Completed);
        assert!(count > 0, "{kind:?} produced an empty replay");
        assert!(!replay.is_playing());
    }
}
