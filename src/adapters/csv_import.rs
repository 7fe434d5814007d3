use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::model::Movie;
use crate::utils::error::Result;

// year;title;studios;producers;winner
const EXPECTED_FIELDS: usize = 5;

/// Reads the movie list from a semicolon-delimited CSV file.
pub fn load_movies(path: impl AsRef<Path>) -> Result<Vec<Movie>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let movies = parse_movies(file)?;

    tracing::info!("Imported {} movies from {}", movies.len(), path.display());
    Ok(movies)
}

/// Parses semicolon-delimited rows of `year;title;studios;producers;winner`.
///
/// The header row is discarded. The `winner` column maps the literal token
/// "yes" to 1 and anything else to 0. Rows without exactly five fields, or
/// with a non-integer year, are skipped with a warning.
pub fn parse_movies<R: Read>(reader: R) -> Result<Vec<Movie>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut movies = Vec::new();

    for row in csv_reader.records() {
        let row = row?;

        if row.len() != EXPECTED_FIELDS {
            tracing::warn!(
                "Skipping row with {} fields (expected {})",
                row.len(),
                EXPECTED_FIELDS
            );
            continue;
        }

        let year = match row[0].trim().parse::<i32>() {
            Ok(year) => year,
            Err(_) => {
                tracing::warn!("Skipping row with non-integer year '{}'", &row[0]);
                continue;
            }
        };

        movies.push(Movie {
            title: row[1].to_string(),
            studios: row[2].to_string(),
            producers: row[3].to_string(),
            year,
            winner: if row[4].trim() == "yes" { 1 } else { 0 },
        });
    }

    Ok(movies)
}
