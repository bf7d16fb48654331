//! Benchmarks for script and dialogue parsing
//!
//! Generates synthetic scripts and dialogue lines of increasing tag density so
//! the backtracking cost of the ordered tag alternatives shows up separately
//! from plain text scanning.

use ass_parser::{parse_dialogue_parts, parse_script};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write;

/// Dialogue line complexity levels
#[derive(Debug, Clone, Copy)]
enum ComplexityLevel {
    /// Plain text only
    Simple,
    /// A few styling tags per line
    Moderate,
    /// Karaoke, transforms and clipping in every line
    Complex,
}

impl ComplexityLevel {
    const ALL: [Self; 3] = [Self::Simple, Self::Moderate, Self::Complex];

    const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }

    /// Dialogue text for event number `index`
    fn line(self, index: usize) -> String {
        match self {
            Self::Simple => format!("Line {index} of plain dialogue text"),
            Self::Moderate => {
                format!(r"{{\b1\i1\c&H00FFFF&}}Line {index}{{\b0}} with\Nstyling")
            }
            Self::Complex => format!(
                r"{{\an8\pos(960,{y})\fad(200,200)\t(0,500,\fscx120\frz{index})}}{{\k20}}Ka{{\kf35}}ra{{\ko40}}o\h{{\clip(m 0 0 l 100 0 100 100)}}ke",
                y = index % 1080
            ),
        }
    }
}

/// Build a script with `events` dialogue lines of the given complexity
fn generate_script(events: usize, complexity: ComplexityLevel) -> String {
    let mut script = String::from(
        "[Script Info]\nTitle: Benchmark\nScriptType: v4.00+\n\n\
         [V4+ Styles]\nFormat: Name, Fontname, Fontsize\nStyle: Default,Arial,48\n\n\
         [Events]\nFormat: Layer, Start, End, Style, Text\n",
    );

    for index in 0..events {
        let _ = writeln!(
            script,
            "Dialogue: 0,0:00:{:02}.00,0:00:{:02}.00,Default,{}",
            index % 60,
            (index + 2) % 60,
            complexity.line(index)
        );
    }

    script
}

fn bench_script_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("script_parsing");

    for events in [10, 100, 1000] {
        let script = generate_script(events, ComplexityLevel::Moderate);
        group.throughput(Throughput::Bytes(script.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(events), &script, |b, script| {
            b.iter(|| parse_script(black_box(script)));
        });
    }

    group.finish();
}

fn bench_dialogue_parts(c: &mut Criterion) {
    let mut group = c.benchmark_group("dialogue_parts");

    for complexity in ComplexityLevel::ALL {
        let line = complexity.line(42);
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(complexity.name()),
            &line,
            |b, line| {
                b.iter(|| parse_dialogue_parts(black_box(line)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_script_parsing, bench_dialogue_parts);
criterion_main!(benches);
