use crate::core::years::YearsByProducer;
use crate::domain::model::WinInterval;

/// Computes the gap between each pair of chronologically consecutive wins.
///
/// Producers with fewer than two wins contribute nothing. Years are sorted
/// with a plain integer comparator before pairing; two wins in the same
/// year produce a zero interval. Output follows the map's key order, with
/// each producer's pairs in chronological order.
pub fn consecutive_win_intervals(by_producer: &YearsByProducer) -> Vec<WinInterval> {
    let mut records = Vec::new();

    for (producer, years) in by_producer {
        if years.len() < 2 {
            continue;
        }

        let mut sorted = years.clone();
        sorted.sort();

        for pair in sorted.windows(2) {
            records.push(WinInterval {
                producer: producer.clone(),
                interval: pair[1] - pair[0],
                previous_win: pair[0],
                following_win: pair[1],
            });
        }
    }

    records
}
