pub mod expand;
pub mod extremes;
pub mod groups;
pub mod intervals;
pub mod years;

pub use crate::domain::model::{AwardIntervals, Movie, ProducerWin, WinInterval};
pub use extremes::compute_award_intervals;
