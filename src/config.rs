//! Simulation parameters and validation.
//!
//! One immutable struct holds every recognized option. There is no
//! module-level state and no environment layer: callers construct a
//! [`SimulationConfig`] (usually via `Default`) and pass it in.

/// Immutable parameter set for one simulation run.
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
    /// Number of simulated agents.
    pub agent_count: usize,
    /// Size of the scenario pool.
    pub scenario_count: usize,
    /// How many scenarios are shown twice (drawn without replacement
    /// from the pool, shared by all agents). Must not exceed
    /// `scenario_count`.
    pub repeated_count: usize,
    /// Flip probability for type-0 (more stable) agents, in [0,1].
    pub flip_prob_stable: f64,
    /// Flip probability for type-1 (less stable) agents, in [0,1].
    pub flip_prob_unstable: f64,
    /// RNG seed. Same seed + same parameters = bit-identical output.
    pub seed: u64,
}

impl Default for SimulationConfig {
    /// The demo configuration: 200 agents, 10 of 50 scenarios repeated,
    /// flip probabilities 0.05 / 0.35, seed 0.
    fn default() -> Self {
        Self {
            agent_count: 200,
            scenario_count: 50,
            repeated_count: 10,
            flip_prob_stable: 0.05,
            flip_prob_unstable: 0.35,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Check every constraint, returning a descriptive error for the
    /// first violation. Runs before any simulation work.
    pub fn validate(&self) -> Result<(), String> {
        if self.agent_count == 0 {
            return Err("agent_count must be positive".to_string());
        }
        if self.scenario_count == 0 {
            return Err("scenario_count must be positive".to_string());
        }
        if self.repeated_count == 0 {
            return Err("repeated_count must be positive".to_string());
        }
        if self.repeated_count > self.scenario_count {
            return Err(format!(
                "repeated_count ({}) exceeds scenario_count ({})",
                self.repeated_count, self.scenario_count
            ));
        }
        // `!(0.0..=1.0).contains(&p)` is also true for NaN.
        if !(0.0..=1.0).contains(&self.flip_prob_stable) {
            return Err(format!(
                "flip_prob_stable ({}) must lie in [0, 1]",
                self.flip_prob_stable
            ));
        }
        if !(0.0..=1.0).contains(&self.flip_prob_unstable) {
            return Err(format!(
                "flip_prob_unstable ({}) must lie in [0, 1]",
                self.flip_prob_unstable
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_repeated_exceeding_pool_rejected() {
        let config = SimulationConfig {
            scenario_count: 5,
            repeated_count: 6,
            ..SimulationConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("repeated_count"), "unexpected message: {err}");
    }

    #[test]
    fn test_zero_counts_rejected() {
        for field in 0..3 {
            let mut config = SimulationConfig::default();
            match field {
                0 => config.agent_count = 0,
                1 => config.scenario_count = 0,
                _ => config.repeated_count = 0,
            }
            assert!(config.validate().is_err(), "field {field} accepted zero");
        }
    }

    #[test]
    fn test_out_of_range_probabilities_rejected() {
        for p in [-0.01, 1.01, f64::NAN] {
            let config = SimulationConfig {
                flip_prob_stable: p,
                ..SimulationConfig::default()
            };
            assert!(config.validate().is_err(), "accepted flip_prob_stable={p}");

            let config = SimulationConfig {
                flip_prob_unstable: p,
                ..SimulationConfig::default()
            };
            assert!(
                config.validate().is_err(),
                "accepted flip_prob_unstable={p}"
            );
        }
    }

    #[test]
    fn test_boundary_probabilities_accepted() {
        let config = SimulationConfig {
            flip_prob_stable: 0.0,
            flip_prob_unstable: 1.0,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
