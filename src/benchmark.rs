use clap::Parser;
use minheap::heap::{MinHeap, Mode};
use minheap::source::RandomValues;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "heap-benchmark")]
#[command(about = "A min-heap performance testing tool")]
struct Args {
    #[arg(long, default_value = "10000")]
    size: usize,

    #[arg(long, default_value = "hardened")]
    mode: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mode = match args.mode.as_str() {
        "faithful" => Mode::Faithful,
        "hardened" => Mode::Hardened,
        _ => panic!("Unexpected value for mode: {}", args.mode),
    };

    println!(
        "Running with {} mode and {} element count",
        args.mode, args.size
    );

    let size = args.size;
    let mut heap = MinHeap::with_mode(mode);
    let mut source = RandomValues::new();

    let start = Instant::now();
    heap.fill_random(size, &mut source);
    assert_eq!(heap.len(), size);
    let filled = Instant::now();

    let mut previous = None;
    let mut misordered = 0usize;
    while !heap.is_empty() {
        let value = heap.extract_min().expect("non-empty heap has a minimum");
        if previous.is_some_and(|p| p > value) {
            misordered += 1;
        }
        previous = Some(value);
    }
    let drained = Instant::now();

    if mode == Mode::Hardened {
        assert_eq!(misordered, 0);
    } else if misordered > 0 {
        println!("Faithful extraction left {} values out of order", misordered);
    }

    println!(
        "Fill took {} seconds",
        filled.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Draining took {} seconds",
        drained.saturating_duration_since(filled).as_secs_f32()
    );
    println!(
        "Total {} seconds",
        drained.saturating_duration_since(start).as_secs_f32()
    );
}
