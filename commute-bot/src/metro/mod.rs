//! Metro route estimates from a static station dataset.
//!
//! The dataset lists stations on two lines and names the single
//! interchange between them. Estimates are deliberately naive: nearest
//! stations by straight-line distance, stop counts by id difference, and
//! flat per-stop fare and time rates.

mod error;
mod estimate;
mod network;

pub use error::MetroError;
pub use estimate::{MetroConfig, MetroEstimate};
pub use network::MetroNetwork;
