use criterion::{black_box, criterion_group, criterion_main, Criterion};
use subway_graph::config::FarePolicy;
use subway_graph::models::{Line, Network, RailwayGraph, Station};
use subway_graph::path::{PathEngine, PathService};

/// A grid of `size` x `size` stations with one line per row and per column
fn build_grid_network(size: u64) -> Network {
    let id = |row: u64, column: u64| row * size + column + 1;
    let stations = (0..size * size)
        .map(|index| Station::new(index + 1, format!("Station {}", index + 1)))
        .collect();

    let mut lines = Vec::new();
    for row in 0..size {
        let mut line = Line::with_seed(row + 1, format!("Row {row}"), "bg-blue-600", id(row, 0), id(row, 1), 2)
            .expect("Failed to seed row line");
        for column in 1..size - 1 {
            line.add_segment(id(row, column), id(row, column + 1), 2 + (column % 3) as u32)
                .expect("Failed to extend row line");
        }
        lines.push(line);
    }
    for column in 0..size {
        let mut line = Line::with_seed(size + column + 1, format!("Column {column}"), "bg-green-600", id(0, column), id(1, column), 3)
            .expect("Failed to seed column line")
            .with_surcharge(100 * (column % 4) as u32);
        for row in 1..size - 1 {
            line.add_segment(id(row, column), id(row + 1, column), 1 + (row % 4) as u32)
                .expect("Failed to extend column line");
        }
        lines.push(line);
    }

    Network::new(stations, lines)
}

fn benchmark_path_query(c: &mut Criterion) {
    let network = build_grid_network(20);
    let last = 20 * 20;

    // Graph construction happens on every query
    c.bench_function("build_railway_graph", |b| {
        b.iter(|| RailwayGraph::from_lines(black_box(&network.lines)));
    });

    let railway = RailwayGraph::from_lines(&network.lines);
    c.bench_function("shortest_path_corner_to_corner", |b| {
        b.iter(|| PathEngine::new(&railway).shortest_path(black_box(1), black_box(last)));
    });

    // The full pipeline a caller pays for
    let service = PathService::new(&network, &network, FarePolicy::default());
    c.bench_function("find_shortest_path_with_fare", |b| {
        b.iter(|| service.find_shortest_path(black_box(1), black_box(last)));
    });
}

criterion_group!(benches, benchmark_path_query);
criterion_main!(benches);
