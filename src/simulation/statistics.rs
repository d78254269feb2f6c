//! Aggregate statistics over per-agent stability scores.
//!
//! Pure functions of the `(scores, types)` pair: overall distribution
//! summary plus a per-type breakdown. Population variance (divide by n)
//! throughout.

use super::engine::{TYPE_STABLE, TYPE_UNSTABLE};

/// Overall score distribution summary.
pub struct ScoreSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// One per-type partition summary.
pub struct GroupSummary {
    pub agent_type: u8,
    pub count: usize,
    /// `None` when the random type assignment left this group empty;
    /// reported as "no data" rather than dividing by zero.
    pub mean: Option<f64>,
}

/// Full aggregate report: overall summary plus both type groups.
pub struct StabilityStatistics {
    pub overall: ScoreSummary,
    /// Indexed by type value: `groups[0]` is type 0, `groups[1]` is type 1.
    pub groups: [GroupSummary; 2],
}

/// Aggregate statistics from parallel score/type slices.
///
/// `scores` must be non-empty and the same length as `agent_types`
/// (guaranteed for any [`simulate`](super::engine::simulate) outcome).
pub fn aggregate_statistics(scores: &[f64], agent_types: &[u8]) -> StabilityStatistics {
    let n = scores.len() as f64;

    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|&s| (s - mean).powi(2)).sum::<f64>() / n;
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let groups = [TYPE_STABLE, TYPE_UNSTABLE].map(|ty| {
        let mut sum = 0.0;
        let mut count = 0usize;
        for (&score, &t) in scores.iter().zip(agent_types) {
            if t == ty {
                sum += score;
                count += 1;
            }
        }
        GroupSummary {
            agent_type: ty,
            count,
            mean: if count == 0 {
                None
            } else {
                Some(sum / count as f64)
            },
        }
    });

    StabilityStatistics {
        overall: ScoreSummary {
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        },
        groups,
    }
}
