pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::{InMemoryMovieStore, load_movies};
pub use config::CliConfig;
pub use core::compute_award_intervals;
pub use domain::model::{AwardIntervals, Movie, ProducerWin, WinInterval};
pub use domain::ports::MovieStore;
pub use utils::error::{AppError, Result};
