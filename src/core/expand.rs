use crate::core::groups::split_group_list;
use crate::domain::model::{Movie, ProducerWin};

/// Keeps only the entries flagged as winners, in input order.
pub fn filter_winners(movies: &[Movie]) -> Vec<Movie> {
    movies.iter().filter(|m| m.winner == 1).cloned().collect()
}

/// Expands each movie into one `ProducerWin` per named producer.
///
/// Movies whose producer field yields no names contribute nothing. The
/// source movies are left untouched; each expanded record is a fresh copy.
pub fn expand_by_producer(movies: &[Movie]) -> Vec<ProducerWin> {
    let mut expanded = Vec::new();

    for movie in movies {
        for producer in split_group_list(&movie.producers) {
            expanded.push(ProducerWin {
                title: movie.title.clone(),
                studios: movie.studios.clone(),
                producer,
                year: movie.year,
                winner: movie.winner,
            });
        }
    }

    expanded
}
