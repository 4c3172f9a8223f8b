//! `pf-core` — foundational types for the `pedflow` corridor simulator.
//!
//! This crate is a dependency of every other `pf-*` crate.  It intentionally
//! has no `pf-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`ids`]    | `PassengerId`, `GroupId`                  |
//! | [`time`]   | `Tick`, `SimClock`                        |
//! | [`class`]  | `PassengerClass` enum                     |
//! | [`error`]  | `CoreError`, `CoreResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod class;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use class::PassengerClass;
pub use error::{CoreError, CoreResult};
pub use ids::{GroupId, PassengerId};
pub use time::{SimClock, Tick};
