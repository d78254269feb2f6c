//! # Stability Sim — Synthetic Preference-Stability Monte Carlo
//!
//! Simulates a population of agents making repeated binary decisions and
//! measures how consistently each agent repeats its choice when the same
//! scenario is shown twice.
//!
//! ## Pipeline
//!
//! | Step | Module | Description |
//! |------|--------|-------------|
//! | 1 | [`config`] | Validate the immutable parameter set |
//! | 2 | [`simulation::engine`] | Assign stability types, draw the repeated-scenario set, replay each scenario per agent |
//! | 3 | [`simulation::statistics`] | Overall and per-type summary statistics |
//!
//! ## Determinism
//!
//! All randomness comes from a single `SmallRng` seeded from the
//! configuration, consumed in a fixed order: type assignment, then the
//! repeated-scenario draw, then per-agent per-scenario decision draws.
//! A given configuration therefore always produces bit-identical scores
//! and type assignments. Batching or reordering draws would break this.
//!
//! ## Model
//!
//! Each agent gets a binary stability type. The type's only effect is the
//! flip probability: the chance that the agent's second decision on a
//! repeated scenario differs from its first. The first decision itself is
//! fresh uniform noise — only the consistency of the repeat is measured,
//! not the choice content.

pub mod config;
pub mod simulation;
