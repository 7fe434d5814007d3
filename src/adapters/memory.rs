use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::model::Movie;
use crate::domain::ports::MovieStore;
use crate::utils::error::Result;

/// Movie store backed by an in-memory list. The list is replaced wholesale
/// at import time and read in bulk per request.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn get_all(&self) -> Result<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies.clone())
    }

    async fn replace_all(&self, movies: Vec<Movie>) -> Result<()> {
        let mut guard = self.movies.write().await;
        *guard = movies;
        Ok(())
    }
}
