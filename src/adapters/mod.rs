pub mod csv_import;
pub mod memory;

pub use csv_import::load_movies;
pub use memory::InMemoryMovieStore;
