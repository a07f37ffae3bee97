//! docgate Benchmark Binary
//!
//! Measures index search latency at different index sizes (1,000, 10,000, 100,000 lines).
//! Run with: `cargo run --bin docgate-bench --release`

use std::time::Instant;

use docgate_core::search::search;

// ---------------------------------------------------------------------------
// Synthetic index generation
// ---------------------------------------------------------------------------

const SECTIONS: &[&str] = &["Guides", "Reference", "Tutorials", "Concepts", "API"];

const TOPICS: &[&str] = &[
    "tools",
    "prompts",
    "resources",
    "transports",
    "sampling",
    "streaming",
    "agents",
    "memory",
    "checkpoints",
    "middleware",
    "providers",
    "embeddings",
    "authorization",
    "lifecycle",
    "elicitation",
    "roots",
];

/// An llms.txt-shaped index: a header per section followed by link lines.
fn generate_index(lines: usize) -> String {
    let mut out = String::with_capacity(lines * 80);
    for i in 0..lines {
        if i % 50 == 0 {
            out.push_str(&format!("## {}\n", SECTIONS[(i / 50) % SECTIONS.len()]));
            continue;
        }
        let topic = TOPICS[i % TOPICS.len()];
        out.push_str(&format!(
            "- [{} {}](https://docs.example.com/docs/{}/{}): How {} work in practice\n",
            topic, i, topic, i, topic
        ));
    }
    out
}

// ---------------------------------------------------------------------------
// Percentile computation
// ---------------------------------------------------------------------------

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((p / 100.0) * sorted.len() as f64).ceil() as usize;
    let idx = if idx == 0 { 0 } else { idx - 1 };
    sorted[idx.min(sorted.len() - 1)]
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

fn format_duration_us(us: f64) -> String {
    if us >= 1_000_000.0 {
        format!("{:.1} s", us / 1_000_000.0)
    } else if us >= 1_000.0 {
        format!("{:.1} ms", us / 1_000.0)
    } else {
        format!("{:.0} us", us)
    }
}

fn format_scale(n: usize) -> String {
    if n >= 1_000 {
        format!("{}K", n / 1_000)
    } else {
        n.to_string()
    }
}

// ---------------------------------------------------------------------------
// Benchmark results
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Latencies {
    p50_us: f64,
    p95_us: f64,
    p99_us: f64,
}

#[derive(Default)]
struct ScaleResult {
    insensitive: Latencies,
    sensitive: Latencies,
    match_all: Latencies,
    matches_per_query: usize,
}

fn measure(samples: usize, mut run: impl FnMut(usize) -> usize) -> (Latencies, usize) {
    let mut latencies: Vec<f64> = Vec::with_capacity(samples);
    let mut matched = 0;
    for i in 0..samples {
        let start = Instant::now();
        matched += run(i);
        latencies.push(start.elapsed().as_micros() as f64);
    }
    latencies.sort_by(f64::total_cmp);
    let stats = Latencies {
        p50_us: percentile(&latencies, 50.0),
        p95_us: percentile(&latencies, 95.0),
        p99_us: percentile(&latencies, 99.0),
    };
    (stats, matched / samples.max(1))
}

// ---------------------------------------------------------------------------
// Benchmark runner for a single scale
// ---------------------------------------------------------------------------

fn run_benchmark(lines: usize) -> ScaleResult {
    let index = generate_index(lines);
    let samples = 30;

    let (insensitive, matches_per_query) = measure(samples, |i| {
        search(&index, &TOPICS[i % TOPICS.len()].to_uppercase(), true).len()
    });
    let (sensitive, _) = measure(samples, |i| {
        search(&index, TOPICS[i % TOPICS.len()], false).len()
    });
    let (match_all, _) = measure(samples.min(10), |_| search(&index, "", false).len());

    ScaleResult {
        insensitive,
        sensitive,
        match_all,
        matches_per_query,
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let scales: &[usize] = &[1_000, 10_000, 100_000];

    println!();
    println!("docgate Search Benchmark");
    println!("========================");
    println!(
        "Platform: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    println!();

    eprint!("Warming up... ");
    let _ = run_benchmark(100);
    eprintln!("done.");

    let mut results: Vec<(usize, ScaleResult)> = Vec::new();
    for &n in scales {
        eprint!("Benchmarking {} lines... ", n);
        let start = Instant::now();
        let result = run_benchmark(n);
        eprintln!("done in {:.1}s", start.elapsed().as_secs_f64());
        results.push((n, result));
    }

    println!();

    let col0 = 26;
    let colw = 14;

    print!("| {:col0$}", "Operation");
    for &n in scales {
        print!("| {:>colw$}", format!("{} lines", format_scale(n)));
    }
    println!("|");

    print!("|{}", "-".repeat(col0 + 1));
    for _ in scales {
        print!("|{}", "-".repeat(colw + 1));
    }
    println!("|");

    type Row = (&'static str, fn(&ScaleResult) -> f64);
    let rows: &[Row] = &[
        ("Search (ci) p50", |r| r.insensitive.p50_us),
        ("Search (ci) p95", |r| r.insensitive.p95_us),
        ("Search (ci) p99", |r| r.insensitive.p99_us),
        ("Search (exact) p50", |r| r.sensitive.p50_us),
        ("Search (exact) p95", |r| r.sensitive.p95_us),
        ("Search (exact) p99", |r| r.sensitive.p99_us),
        ("Empty query p50", |r| r.match_all.p50_us),
        ("Empty query p99", |r| r.match_all.p99_us),
    ];

    for (label, metric) in rows {
        print!("| {:col0$}", label);
        for (_, r) in &results {
            print!("| {:>colw$}", format_duration_us(metric(r)));
        }
        println!("|");
    }

    print!("| {:col0$}", "Matches per query");
    for (_, r) in &results {
        print!("| {:>colw$}", r.matches_per_query);
    }
    println!("|");
    println!();
}
