//! Core simulation — replays repeated scenarios per agent and scores
//! decision consistency.
//!
//! All randomness is drawn from one seeded `SmallRng` in a fixed order:
//! type assignment first, then the repeated-scenario subset, then per
//! agent (in index order) two draws per repeated scenario (first decision,
//! flip draw). Reordering any of these draws changes the output for a
//! given seed, so the order is part of the contract.

use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::config::SimulationConfig;

/// Type-0 agents flip with `flip_prob_stable`.
pub const TYPE_STABLE: u8 = 0;
/// Type-1 agents flip with `flip_prob_unstable`.
pub const TYPE_UNSTABLE: u8 = 1;

/// Results of one simulation run.
pub struct SimulationOutcome {
    /// Per-agent stability score in [0,1], indexed by agent.
    pub scores: Vec<f64>,
    /// Per-agent type label (0 or 1), same indexing.
    pub agent_types: Vec<u8>,
    /// The scenario ids that were repeated, in draw order. Shared by all
    /// agents; the ids themselves carry no behavior, only their count
    /// matters for scoring.
    pub repeated_scenarios: Vec<usize>,
}

/// Draw a uniform binary decision.
#[inline(always)]
fn draw_decision(rng: &mut SmallRng) -> u8 {
    rng.random_range(0..=1)
}

/// Run the full simulation for one configuration.
///
/// Validates first and fails before consuming any random state. Returns
/// one score and one type label per agent.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationOutcome, String> {
    config.validate()?;

    let mut rng = SmallRng::seed_from_u64(config.seed);

    // Draw order is fixed: types, then scenario subset, then decisions.
    let agent_types: Vec<u8> = (0..config.agent_count)
        .map(|_| rng.random_range(0..=1))
        .collect();

    let repeated_scenarios: Vec<usize> =
        index::sample(&mut rng, config.scenario_count, config.repeated_count).into_vec();

    let mut scores = Vec::with_capacity(config.agent_count);
    for &agent_type in &agent_types {
        let flip_prob = if agent_type == TYPE_STABLE {
            config.flip_prob_stable
        } else {
            config.flip_prob_unstable
        };

        let mut consistent = 0usize;
        for _scenario in &repeated_scenarios {
            let first = draw_decision(&mut rng);
            // Second exposure: flip with the agent's flip probability.
            let flipped = rng.random::<f64>() < flip_prob;
            let second = if flipped { 1 - first } else { first };
            if first == second {
                consistent += 1;
            }
        }

        scores.push(consistent as f64 / config.repeated_count as f64);
    }

    Ok(SimulationOutcome {
        scores,
        agent_types,
        repeated_scenarios,
    })
}
