use crate::domain::model::Movie;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Movie>>;
    async fn replace_all(&self, movies: Vec<Movie>) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn csv_path(&self) -> &str;
    fn listen_addr(&self) -> &str;
}
