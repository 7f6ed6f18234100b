//! Randomised edits keep a line a single simple path

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use subway_graph::models::{Line, StationId};

fn assert_single_path(line: &Line) {
    let segments = line.segments();
    for pair in segments.windows(2) {
        assert_eq!(pair[0].down_station(), pair[1].up_station());
    }
    assert!(segments.iter().all(|segment| segment.distance() > 0));

    let stations = line.stations();
    assert_eq!(stations.len(), segments.len() + 1);
    let unique: HashSet<StationId> = stations.iter().copied().collect();
    assert_eq!(unique.len(), stations.len());
}

/// Test random additions, including rejected ones, against the expected
/// line length
#[test]
fn test_random_additions_keep_line_consistent() {
    let mut rng = StdRng::seed_from_u64(7);

    for round in 0..25 {
        let mut line = Line::with_seed(round, "Line", "bg-gray-600", 1, 2, 20).expect("seed");
        let mut expected_total = 20;
        let mut next_station: StationId = 3;

        for _ in 0..30 {
            let stations = line.stations();
            let anchor = stations[rng.gen_range(0..stations.len())];
            // Occasionally reuse a station already on the line
            let other = if rng.gen_bool(0.1) {
                stations[rng.gen_range(0..stations.len())]
            } else {
                next_station
            };
            let distance = rng.gen_range(0..=25);
            let downstream = rng.gen_bool(0.5);
            let (up, down) = if downstream { (anchor, other) } else { (other, anchor) };

            let before = line.clone();
            let extends_end = if downstream {
                stations.last() == Some(&anchor)
            } else {
                stations.first() == Some(&anchor)
            };

            match line.add_segment(up, down, distance) {
                Ok(()) => {
                    assert!(distance > 0);
                    assert_eq!(other, next_station);
                    if extends_end {
                        expected_total += u64::from(distance);
                    }
                    next_station += 1;
                }
                Err(_) => assert_eq!(line.segments(), before.segments()),
            }

            assert_single_path(&line);
            assert_eq!(line.topology().total_distance(), expected_total);
        }
    }
}

/// Test that removals merge interior stations and trim the ends
#[test]
fn test_random_removals_keep_line_consistent() {
    let mut rng = StdRng::seed_from_u64(11);

    for round in 0..25 {
        let mut line = Line::with_seed(round, "Line", "bg-gray-600", 1, 2, 4).expect("seed");
        for station in 3..=8 {
            line.add_segment(station - 1, station, rng.gen_range(1..=9)).expect("extend");
        }

        while line.segments().len() > 1 {
            let stations = line.stations();
            let target = stations[rng.gen_range(0..stations.len())];
            let total_before = line.topology().total_distance();
            let trimmed = if stations.first() == Some(&target) {
                Some(line.segments()[0].distance())
            } else if stations.last() == Some(&target) {
                line.segments().last().map(|segment| segment.distance())
            } else {
                None
            };

            line.remove_station(target).expect("more than one segment");
            assert!(!line.serves(target));
            assert_single_path(&line);

            let expected = total_before - trimmed.map_or(0, u64::from);
            assert_eq!(line.topology().total_distance(), expected);
        }

        let last = line.stations()[0];
        assert!(line.remove_station(last).is_err());
        assert_eq!(line.segments().len(), 1);
    }
}
