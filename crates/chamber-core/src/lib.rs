//! `chamber-core` — foundational types for the entropy-chamber simulation.
//!
//! This crate is a dependency of every other `chamber-*` crate.  It
//! intentionally has no `chamber-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`ids`]    | `DustId`, `CrackId`, `MossId`                    |
//! | [`time`]   | `Millis` — session-relative millisecond instants |
//! | [`rng`]    | `ChamberRng` — deterministic session RNG         |
//! | [`config`] | `ChamberConfig` — all policy constants           |
//! | [`error`]  | `ChamberError`, `ChamberResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ChamberConfig;
pub use error::{ChamberError, ChamberResult};
pub use ids::{CrackId, DustId, IdCounter, MossId};
pub use rng::ChamberRng;
pub use time::Millis;
