use serde::{Deserialize, Serialize};

/// One nominee/winner entry as imported from the movie list.
/// `winner` is 0 or 1, matching the ingestion mapping ("yes" -> 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub studios: String,
    /// Raw producer field; may name several producers separated by
    /// commas and/or the word "and".
    pub producers: String,
    pub year: i32,
    pub winner: u8,
}

/// A `Movie` expanded to a single producer. The raw multi-valued
/// `producers` field is intentionally not carried over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerWin {
    pub title: String,
    pub studios: String,
    pub producer: String,
    pub year: i32,
    pub winner: u8,
}

/// Gap between two chronologically consecutive wins of the same producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinInterval {
    pub producer: String,
    pub interval: i32,
    #[serde(rename = "previousWin")]
    pub previous_win: i32,
    #[serde(rename = "followingWin")]
    pub following_win: i32,
}

/// Response payload: producers holding the smallest and largest interval.
/// When every interval in the dataset has the same value, `max` is left
/// empty rather than repeating the `min` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct AwardIntervals {
    pub min: Vec<WinInterval>,
    pub max: Vec<WinInterval>,
}
