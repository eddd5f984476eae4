use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flight_search::{Flight, FlightCatalog, FlightSearchEngine};
use rand::{seq::SliceRandom, thread_rng, Rng};

const CITIES: [&str; 6] = ["Dhaka", "Cox's Bazar", "Chittagong", "Sylhet", "Jessore", "Barisal"];

// Random catalog of `size` flights spread across the city list
fn random_catalog(size: usize) -> FlightCatalog {
    let mut rng = thread_rng();

    let flights = (0..size)
        .map(|i| Flight {
            id: format!("RN{i:04}"),
            airline: "Bench Air".to_string(),
            departure_time: "08:00".to_string(),
            arrival_time: "09:15".to_string(),
            price: rng.gen_range(3000..12000) as f64,
            departure_city: CITIES.choose(&mut rng).unwrap().to_string(),
            arrival_city: CITIES.choose(&mut rng).unwrap().to_string(),
            duration: "1h 15m".to_string(),
        })
        .collect();

    FlightCatalog::from_flights(flights).unwrap()
}

pub fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("flight_search");

    let builtin = FlightSearchEngine::default();
    group.bench_function("builtin_cheapest", |b| {
        b.iter(|| {
            black_box(builtin.find_minimum_cost_flight(black_box("dhaka"), black_box("cox's bazar")))
        })
    });

    for size in [100, 1_000, 10_000].iter() {
        let engine = FlightSearchEngine::new(random_catalog(*size));

        group.bench_with_input(BenchmarkId::new("search", size), size, |b, _| {
            b.iter(|| black_box(engine.search_flights("Dhaka", "Sylhet").len()))
        });
        group.bench_with_input(BenchmarkId::new("cheapest", size), size, |b, _| {
            b.iter(|| black_box(engine.find_minimum_cost_flight("Dhaka", "Sylhet")))
        });
        group.bench_with_input(BenchmarkId::new("sorted", size), size, |b, _| {
            b.iter(|| black_box(engine.get_all_flights_sorted_by_price("Dhaka", "Sylhet").len()))
        });
    }

    group.finish();
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
