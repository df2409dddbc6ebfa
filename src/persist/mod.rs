pub mod csv;

use thiserror::Error;

use crate::question::Question;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },
}

pub type PersistResult<T> = Result<T, PersistError>;

/// Durable home of the catalog. Every write replaces the previous contents.
pub trait CatalogSink {
    fn write_catalog<'a>(&mut self, questions: &mut dyn Iterator<Item = &'a Question>) -> PersistResult<usize>;

    /// Loads every persisted question. An absent store is an empty catalog.
    fn load_catalog(&self) -> PersistResult<Vec<Question>> {
        Ok(Vec::new())
    }

    fn describe(&self) -> String {
        "catalog sink".to_string()
    }
}
