use subway_graph::config::FarePolicy;
use subway_graph::models::{Line, Network, Station};
use subway_graph::path::{AgeDiscount, PathService};

fn main() {
    // Show the debug_log! trace with RUST_LOG=debug
    env_logger::init();

    let mut network = Network::new(
        vec![
            Station::new(1, "Gangnam"),
            Station::new(2, "Yangjae"),
            Station::new(3, "Gyodae"),
            Station::new(4, "Nambu Bus Terminal"),
        ],
        vec![
            Line::with_seed(1, "Sinbundang", "bg-red-600", 1, 2, 10)
                .expect("Failed to create Sinbundang")
                .with_surcharge(900),
            Line::with_seed(2, "Line 2", "bg-green-600", 3, 1, 10).expect("Failed to create Line 2"),
            Line::with_seed(3, "Line 3", "bg-orange-600", 3, 2, 5).expect("Failed to create Line 3"),
        ],
    );
    network.add_segment(3, 3, 4, 3).expect("Failed to split Line 3");

    println!("=== Lines ===");
    for line in &network.lines {
        let names: Vec<&str> = line
            .stations()
            .iter()
            .filter_map(|id| network.station(*id))
            .map(|station| station.name.as_str())
            .collect();
        println!("  {} (surcharge {}): {}", line.name, line.surcharge, names.join(" - "));
    }
    println!();

    let service = PathService::new(&network, &network, FarePolicy::default());
    for (source, target) in [(1, 4), (3, 2), (4, 1)] {
        match service.find_shortest_path(source, target) {
            Ok(response) => {
                let names: Vec<&str> = response.stations.iter().map(|station| station.name.as_str()).collect();
                println!("=== {source} -> {target} ===");
                println!("  Path: {}", names.join(" -> "));
                println!("  Distance: {} km", response.distance);
                println!("  Fare: {}", response.fare);
                println!("  Child fare: {}", response.with_discount(&AgeDiscount::for_age(9)).fare);
                println!("  Teen fare: {}", response.with_discount(&AgeDiscount::for_age(15)).fare);
            }
            Err(e) => println!("=== {source} -> {target} ===\n  Error: {e}"),
        }
        println!();
    }
}
