// ABOUTME: TrailGuard CLI binary running the hiking-safety simulation loop
// ABOUTME: Onboarding demo flow, scripted emergency scenario, and scheduled telemetry run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrailGuard

//! # TrailGuard Simulator Binary
//!
//! Runs the hiking-safety simulation: starts a tracking session (with
//! synthetic-GPS fallback), then drives the scheduled telemetry, risk, and
//! streaming loops until the duration elapses or ctrl-c arrives.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use trailguard::clock::SystemClock;
use trailguard::config::SimulationConfig;
use trailguard::engine::SafetyEngine;
use trailguard::logging;
use trailguard::models::RegistrationRequest;
use trailguard::positioning::{DeniedPositioning, PositioningSource, SyntheticPositioning};
use trailguard::telemetry::TracingSink;

#[derive(Parser)]
#[command(name = "trailguard")]
#[command(about = "TrailGuard - hiking-safety tracking simulator")]
pub struct Args {
    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many seconds (default: run until ctrl-c)
    #[arg(long)]
    duration_secs: Option<u64>,

    /// Enable the auto-SOS opt-in toggle
    #[arg(long)]
    auto_sos: bool,

    /// Simulate a denied location permission to exercise the fallback path
    #[arg(long)]
    no_gps: bool,

    /// Run the onboarding demo (registration + document scan + DID) and
    /// seed the scripted emergency scenario before the loop starts
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = SimulationConfig::from_env()?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.auto_sos {
        config.auto_sos.enabled = true;
    }

    info!("Starting TrailGuard simulator");
    info!("{}", config.summary());

    let device_seed = config.seed.unwrap_or(0).wrapping_add(1);
    let device: Box<dyn PositioningSource> = if args.no_gps {
        Box::new(DeniedPositioning)
    } else {
        Box::new(SyntheticPositioning::new(
            config.base_location,
            config.position_variance,
            device_seed,
        ))
    };

    let mut engine = SafetyEngine::new(config, Arc::new(SystemClock), Arc::new(TracingSink));

    if args.demo {
        run_onboarding_demo(&mut engine).await?;
    }

    engine.start(device.as_ref()).await?;
    if args.demo {
        engine.load_demo_scenario();
    }
    engine.run(args.duration_secs.map(Duration::from_secs)).await?;

    Ok(())
}

/// Register a sample trekker and run the document scan to a minted DID
async fn run_onboarding_demo(engine: &mut SafetyEngine) -> Result<()> {
    let profile = engine.register_trekker(RegistrationRequest {
        name: "Asha Kumar".into(),
        email: "asha@example.com".into(),
        phone: "+91-98400-00000".into(),
        nationality: "IN".into(),
        emergency_contact: "+91-98400-11111".into(),
    })?;
    info!(trekker = %profile.name, "onboarding demo: registration complete");

    let did = engine.run_onboarding_scan().await?;
    info!(%did, "onboarding demo: document verified and DID minted");
    Ok(())
}
