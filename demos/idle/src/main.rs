//! idle — a scripted end-to-end chamber session.
//!
//! Walks the chamber through its full arc in simulated time: neglect until
//! the dust field saturates and explodes, a cleaning sweep down to the
//! hidden quote, an overload-and-repair cycle, and finally five patient
//! minutes that sprout moss.  The whole trace lands in two CSV files for
//! offline inspection.
//!
//! Usage: `cargo run -p idle [output-dir]` (default `./chamber-trace`).

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use chamber_core::ChamberConfig;
use chamber_session::{ChamberInput, SessionBuilder};
use chamber_trace::{CsvTraceWriter, SessionTraceObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64 = 7;
const NEGLECT_MS:       u64 = 60_000; // enough idleness to saturate 500 dust
const CALM_LOOPS:       u64 = 305;    // one second each; threshold is 300 s
const SWEEP_RADIUS:     f32 = 150.0;  // covers the whole plane from centre

fn main() -> Result<()> {
    let dir: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./chamber-trace".into())
        .into();
    fs::create_dir_all(&dir)?;

    let config = ChamberConfig {
        seed: SEED,
        ..ChamberConfig::default()
    };
    let max_dust = config.max_dust;
    let mut session = SessionBuilder::new(config).build()?;

    let writer = CsvTraceWriter::new(&dir)?;
    let mut obs = SessionTraceObserver::new(writer, max_dust);

    // ── Act 1: neglect — dust climbs to capacity and the field explodes ──
    session.step(NEGLECT_MS, &mut obs);
    println!(
        "[{}] after neglect: {} dust, explosion pending = {}",
        session.now(),
        session.state().dust.len(),
        session.state().explosion_pending
    );
    session.apply(ChamberInput::AcknowledgeExplosion, &mut obs);

    // ── Act 2: one big sweep — empty field reveals the hidden quote ──────
    session.apply(
        ChamberInput::CleanDust { x: 50.0, y: 50.0, radius: SWEEP_RADIUS },
        &mut obs,
    );
    println!(
        "[{}] after sweep: {} dust, quote pending = {}",
        session.now(),
        session.state().dust.len(),
        session.state().quote_pending
    );
    session.apply(ChamberInput::AcknowledgeQuote, &mut obs);

    // ── Act 3: push the dial too far, then repair every crack ────────────
    session.apply(ChamberInput::SetFrequency(0.98), &mut obs);
    let cracks: Vec<_> = session.state().cracks.iter().map(|c| c.id).collect();
    println!("[{}] overloaded with {} cracks", session.now(), cracks.len());
    for id in cracks {
        session.step(400, &mut obs);
        session.apply(ChamberInput::RepairCrack(id), &mut obs);
    }
    println!(
        "[{}] repaired: overloaded = {}, frequency = {}",
        session.now(),
        session.state().overloaded,
        session.state().frequency
    );

    // ── Act 4: patience — keep the chamber clean for five minutes ────────
    //
    // Idleness would re-gather dust past the "clean" bound, so the script
    // sweeps once per simulated second, exactly like an attentive user.
    for _ in 0..CALM_LOOPS {
        session.apply(
            ChamberInput::CleanDust { x: 50.0, y: 50.0, radius: SWEEP_RADIUS },
            &mut obs,
        );
        session.step(1_000, &mut obs);
    }

    let state = session.state();
    let mean_growth = if state.moss.is_empty() {
        0.0
    } else {
        state.moss.iter().map(|m| m.growth).sum::<f32>() / state.moss.len() as f32
    };
    println!(
        "[{}] calm stretch done: {} moss clusters, mean growth {:.2}",
        session.now(),
        state.moss.len(),
        mean_growth
    );

    session.finish(&mut obs);
    if let Some(e) = obs.take_error() {
        eprintln!("trace error: {e}");
    }
    println!("trace written to {}", dir.display());
    Ok(())
}
