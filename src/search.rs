//! The hill-climbing search policy.
//!
//! Pure functions mapping the last probe's timing feedback to the next
//! candidate parameter set. The policy always prefers memory cost over time
//! cost: under the ceiling it grows memory first (proportionally to the
//! remaining headroom) and only then adds time; over the ceiling it sheds
//! time first (one pass at a time) and only then sheds memory. A candidate
//! equal to the previous one signals that the search has nowhere left to go;
//! the driver detects that as a cycle and stops.

use crate::config::CalibratorConfig;
use crate::params::HashParams;
use crate::result::Probe;

/// The first candidate of a run: minimum time cost, maximum memory cost.
///
/// Memory is the primary security knob, so the search opens at the memory
/// bound and adjusts from there.
pub fn initial_candidate(config: &CalibratorConfig) -> HashParams {
    HashParams {
        time_cost: config.min_time_cost,
        memory_cost: config.max_memory_cost,
        parallelism: config.parallelism,
        hash_length: config.hash_length,
        algorithm: config.algorithm,
        version: config.version,
    }
}

/// Compute the candidate following `last`.
///
/// Steps are proportional to how far the probe landed from the ceiling:
/// a probe at 40% of the budget grows memory by 60% of its current value,
/// while a probe just under the ceiling barely moves. Over-budget memory
/// reductions are capped at 80% per step so one slow probe cannot collapse
/// the search to the floor.
pub fn next_candidate(config: &CalibratorConfig, last: &Probe) -> HashParams {
    let ceiling = config.max_duration.as_secs_f64();
    let observed = last.duration.as_secs_f64();
    let diff_percent = (ceiling - observed).abs() / ceiling * 100.0;

    let params = last.params;

    if last.duration < config.max_duration {
        if params.memory_cost < config.max_memory_cost {
            let step = (params.memory_cost as f64 * diff_percent / 100.0).round() as u32;
            HashParams {
                memory_cost: params
                    .memory_cost
                    .saturating_add(step)
                    .min(config.max_memory_cost),
                ..params
            }
        } else if params.time_cost < config.max_time_cost {
            HashParams {
                time_cost: (params.time_cost + 2).min(config.max_time_cost),
                ..params
            }
        } else {
            // At the upper bound on both axes.
            params
        }
    } else if params.time_cost > config.min_time_cost {
        HashParams {
            time_cost: (params.time_cost - 1).max(config.min_time_cost),
            ..params
        }
    } else if params.memory_cost > config.min_memory_cost {
        let step =
            (params.memory_cost as f64 * diff_percent.min(80.0) / 100.0).round() as u32;
        HashParams {
            memory_cost: params
                .memory_cost
                .saturating_sub(step)
                .max(config.min_memory_cost),
            ..params
        }
    } else {
        // At the lower bound on both axes.
        params
    }
}
