use std::collections::HashMap;

use crate::core::{expand, intervals, years};
use crate::domain::model::{AwardIntervals, Movie, WinInterval};

/// Buckets interval records by their gap value.
pub fn group_by_interval(records: &[WinInterval]) -> HashMap<i32, Vec<WinInterval>> {
    let mut groups: HashMap<i32, Vec<WinInterval>> = HashMap::new();

    for record in records {
        groups.entry(record.interval).or_default().push(record.clone());
    }

    groups
}

/// Picks the groups holding the smallest and largest interval values.
///
/// Both extremes are computed from the data; no gap value is assumed to
/// be present. When the smallest and largest values coincide the group is
/// reported once under `min` and `max` stays empty.
pub fn select_extremes(records: &[WinInterval]) -> AwardIntervals {
    let mut groups = group_by_interval(records);

    let Some(min_value) = groups.keys().copied().min() else {
        return AwardIntervals::default();
    };
    let max_value = groups.keys().copied().max().unwrap_or(min_value);

    let min = groups.remove(&min_value).unwrap_or_default();
    let max = if max_value != min_value {
        groups.remove(&max_value).unwrap_or_default()
    } else {
        Vec::new()
    };

    AwardIntervals { min, max }
}

/// Full pipeline: winners -> per-producer expansion -> years by producer
/// -> consecutive-win intervals -> extremum groups.
pub fn compute_award_intervals(movies: &[Movie]) -> AwardIntervals {
    let winners = expand::filter_winners(movies);
    let wins = expand::expand_by_producer(&winners);
    let by_producer = years::years_by_producer(&wins);
    let records = intervals::consecutive_win_intervals(&by_producer);
    select_extremes(&records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(producers: &str, year: i32, winner: u8) -> Movie {
        Movie {
            title: format!("Movie {}", year),
            studios: "Studio".to_string(),
            producers: producers.to_string(),
            year,
            winner,
        }
    }

    fn record(producer: &str, interval: i32, previous: i32) -> WinInterval {
        WinInterval {
            producer: producer.to_string(),
            interval,
            previous_win: previous,
            following_win: previous + interval,
        }
    }

    #[test]
    fn test_select_min_and_max_groups() {
        let records = vec![
            record("P1", 1, 1990),
            record("P2", 13, 2002),
            record("P3", 5, 1980),
        ];

        let result = select_extremes(&records);

        assert_eq!(result.min, vec![record("P1", 1, 1990)]);
        assert_eq!(result.max, vec![record("P2", 13, 2002)]);
    }

    #[test]
    fn test_ties_share_the_extremum_group() {
        let records = vec![
            record("P1", 1, 1990),
            record("P2", 1, 2000),
            record("P3", 9, 1980),
            record("P4", 9, 1995),
        ];

        let result = select_extremes(&records);

        assert_eq!(result.min.len(), 2);
        assert!(result.min.iter().all(|r| r.interval == 1));
        assert_eq!(result.max.len(), 2);
        assert!(result.max.iter().all(|r| r.interval == 9));
    }

    // The smallest gap is found even when no producer has a one-year gap.
    #[test]
    fn test_min_is_computed_not_assumed() {
        let records = vec![record("P1", 7, 1980), record("P2", 13, 2002)];

        let result = select_extremes(&records);

        assert_eq!(result.min, vec![record("P1", 7, 1980)]);
        assert_eq!(result.max, vec![record("P2", 13, 2002)]);
    }

    #[test]
    fn test_single_gap_value_leaves_max_empty() {
        let records = vec![record("P1", 3, 1990), record("P2", 3, 2000)];

        let result = select_extremes(&records);

        assert_eq!(result.min.len(), 2);
        assert!(result.max.is_empty());
    }

    #[test]
    fn test_no_records_yields_empty_result() {
        assert_eq!(select_extremes(&[]), AwardIntervals::default());
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let movies = vec![
            movie("Steve Perry and Joel Silver", 1990, 1),
            movie("Joel Silver", 1991, 1),
            movie("Matthew Vaughn", 2002, 1),
            movie("Gregory Goodman, Simon Kinberg and Matthew Vaughn", 2015, 1),
            movie("Bo Derek", 1984, 1),
            movie("Bo Derek", 1990, 1),
            movie("One Timer", 1999, 1),
        ];

        let result = compute_award_intervals(&movies);

        assert_eq!(
            result.min,
            vec![WinInterval {
                producer: "Joel Silver".to_string(),
                interval: 1,
                previous_win: 1990,
                following_win: 1991,
            }]
        );
        assert_eq!(
            result.max,
            vec![WinInterval {
                producer: "Matthew Vaughn".to_string(),
                interval: 13,
                previous_win: 2002,
                following_win: 2015,
            }]
        );
    }

    #[test]
    fn test_pipeline_ignores_losers() {
        let movies = vec![
            movie("P1", 1990, 1),
            movie("P1", 1991, 0),
            movie("P1", 1995, 1),
        ];

        let result = compute_award_intervals(&movies);

        assert_eq!(result.min.len(), 1);
        assert_eq!(result.min[0].interval, 5);
        assert!(result.max.is_empty());
    }

    // A winner with a blank producer field never reaches the aggregation.
    #[test]
    fn test_pipeline_blank_producers_contribute_nothing() {
        let movies = vec![movie("", 1990, 1), movie("", 1991, 1)];

        assert_eq!(compute_award_intervals(&movies), AwardIntervals::default());
    }

    #[test]
    fn test_pipeline_no_multi_win_producer() {
        let movies = vec![movie("P1", 1990, 1), movie("P2", 1991, 1)];

        assert_eq!(compute_award_intervals(&movies), AwardIntervals::default());
    }

    #[test]
    fn test_pipeline_does_not_mutate_input() {
        let movies = vec![movie("P1 and P2", 1990, 1)];
        let snapshot = movies.clone();

        let _ = compute_award_intervals(&movies);

        assert_eq!(movies, snapshot);
    }
}
