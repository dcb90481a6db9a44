//! Convergence detection for post-event recovery analysis
//!
//! After a disruptive event (deployment teardown, scale-down, rollout) the
//! interesting question is when the node's metrics return to a stable
//! baseline. [`plateau_time`] answers it for one metric; [`stable_time`]
//! requires several metrics, sampled on potentially different grids, to be
//! jointly near-baseline for a sustained run of samples.
//!
//! # Example
//!
//! ```rust
//! use settle_core::TimeSeries;
//! use settle_detect::{plateau_time, ConvergenceConfig};
//!
//! // Memory released exponentially after a teardown
//! let ram = TimeSeries::from_pairs(
//!     (0..20).map(|i| (i as f64, 100.0 * 0.5f64.powi(i))),
//! )
//! .unwrap();
//!
//! let release_latency = plateau_time(&ram, &ConvergenceConfig::default());
//! assert_eq!(release_latency, 5.0);
//! ```

mod config;
mod plateau;
mod resample;
mod stable;

pub use config::ConvergenceConfig;
pub use plateau::plateau_time;
pub use resample::resample_onto;
pub use stable::{stable_time, stable_time_on_grid};
