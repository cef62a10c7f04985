// ABOUTME: Criterion benchmarks for the risk classifier and telemetry ticks
// ABOUTME: Measures classification throughput and per-tick simulation cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! Criterion benchmarks for risk classification and simulation ticks.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trailguard::context::SimulationContext;
use trailguard::risk::{evaluate, RiskInputs};
use trailguard::telemetry::simulator;

fn bench_risk_classification(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let inputs: Vec<RiskInputs> = (0..1_000)
        .map(|_| RiskInputs {
            hour: rng.gen_range(0..24),
            altitude: rng.gen_range(0.0..400.0),
            heart_rate: rng.gen_range(50.0..180.0),
            speed: rng.gen_range(0.0..10.0),
        })
        .collect();

    c.bench_function("risk_evaluate_1000", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(evaluate(black_box(input)));
            }
        });
    });
}

fn bench_simulation_ticks(c: &mut Criterion) {
    c.bench_function("drift_and_vitals_tick", |b| {
        let mut ctx = SimulationContext::new();
        ctx.tracking.is_tracking = true;
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        b.iter(|| {
            simulator::tick_drift(&mut ctx, &mut rng);
            simulator::tick_vitals(&mut ctx, &mut rng);
            simulator::refresh_status(&mut ctx);
            black_box(&ctx.tracking);
        });
    });
}

criterion_group!(benches, bench_risk_classification, bench_simulation_ticks);
criterion_main!(benches);
