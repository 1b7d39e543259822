//! Step throughput per automaton kind, serial vs parallel

use std::time::Instant;
use cellular_automata::domain::{AutomatonKind, CellularAutomata, StepStrategy, Surface, presets};
use log::info;

const SEED: u64 = 0x5EED;

/// Average milliseconds per step over `iterations` steps
fn benchmark_kind(kind: AutomatonKind, strategy: StepStrategy, size: usize, iterations: u64) -> f64 {
    let mut engine = CellularAutomata::new(SEED, strategy);
    let mut surface = Surface::new(size, size);
    engine.set_type(kind);
    if kind == AutomatonKind::ConwayLife {
        presets::pulsar_field().apply(surface.front_mut());
    }
    engine.initialize(&mut surface);

    let start = Instant::now();
    let mut taken: u64 = 0;
    for _ in 0..iterations {
        match engine.next_step(&mut surface) {
            Ok(_) if !engine.has_finished() => taken += 1,
            Ok(_) => {
                taken += 1;
                break;
            }
            Err(err) => {
                eprintln!("{kind}: {err}");
                return 0.0;
            }
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / taken.max(1) as f64
}

fn main() {
    env_logger::init();
    println!("=== Cellular Automata Step Benchmark ===\n");

    let sizes = [256, 512, 1024, 2048];
    let iterations = 20;
    info!("{} iterations per measurement, seed {:#x}", iterations, SEED);

    for size in sizes {
        println!("{}x{}", size, size);
        println!("{:>22} {:>12} {:>12} {:>10}", "Kind", "Serial", "Parallel", "Speedup");
        println!("{:-<60}", "");

        for kind in AutomatonKind::all() {
            let serial_ms = benchmark_kind(kind, StepStrategy::Serial, size, iterations);
            let parallel_ms = benchmark_kind(kind, StepStrategy::Parallel, size, iterations);
            let speedup_str = if parallel_ms > 0.0 {
                format!("{:>9.1}x", serial_ms / parallel_ms)
            } else {
                format!("{:>10}", "-")
            };
            println!(
                "{:>22} {:>12.3} {:>12.3} {}",
                kind.name(),
                serial_ms,
                parallel_ms,
                speedup_str
            );
        }
        println!();
    }

    println!("=== Throughput at 2048x2048 ===\n");
    let cells = 2048 * 2048;
    for kind in [AutomatonKind::ConwayLife, AutomatonKind::BmlTraffic, AutomatonKind::CyclicCA] {
        let ms = benchmark_kind(kind, StepStrategy::Parallel, 2048, 10);
        println!(
            "{:>22}: {:.2} ms/step, {:.1}M cells/sec",
            kind.name(),
            ms,
            (cells as f64) / (ms / 1000.0) / 1_000_000.0
        );
    }
}
