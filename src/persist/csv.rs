//! Flat CSV file sink, rewritten in full on every save.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use tracing::info;

use crate::{question::Question, types::QuestionId};

use super::{CatalogSink, PersistError, PersistResult};

/// Column header of the catalog file.
pub const HEADER: [&str; 8] = [
    "ID",
    "Title",
    "Topic",
    "Difficulty",
    "Platform",
    "Notes",
    "Solved",
    "SolvedDate",
];

/// CSV implementation of [`crate::persist::CatalogSink`].
#[derive(Debug, Clone)]
pub struct CsvCatalogSink {
    path: PathBuf,
}

impl CsvCatalogSink {
    /// Sink writing to `path`. Nothing is touched until the first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Target file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `questions` as CSV to any writer.
    pub fn write_to<'a, W: Write>(
        writer: W,
        questions: &mut dyn Iterator<Item = &'a Question>,
    ) -> PersistResult<usize> {
        let mut wtr = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .from_writer(writer);
        wtr.write_record(HEADER)?;
        let mut rows = 0;
        for q in questions {
            let id = q.id.to_string();
            wtr.write_record([
                id.as_str(),
                q.title.as_str(),
                q.topic.as_str(),
                q.difficulty.as_str(),
                q.platform.as_str(),
                q.notes.as_str(),
                q.solved_label(),
                q.solved_date.as_str(),
            ])?;
            rows += 1;
        }
        wtr.flush()?;
        Ok(rows)
    }

    /// Parses CSV produced by [`CsvCatalogSink::write_to`] (or by hand).
    pub fn read_from<R: std::io::Read>(reader: R) -> PersistResult<Vec<Question>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let mut out = Vec::new();
        for record in rdr.records() {
            let record = record?;
            out.push(parse_row(&record)?);
        }
        Ok(out)
    }
}

impl CatalogSink for CsvCatalogSink {
    fn write_catalog<'a>(&mut self, questions: &mut dyn Iterator<Item = &'a Question>) -> PersistResult<usize> {
        let file = File::create(&self.path)?;
        let rows = Self::write_to(BufWriter::new(file), questions)?;
        info!(path = %self.path.display(), rows, "catalog written");
        Ok(rows)
    }

    fn load_catalog(&self) -> PersistResult<Vec<Question>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let questions = Self::read_from(File::open(&self.path)?)?;
        info!(path = %self.path.display(), rows = questions.len(), "catalog loaded");
        Ok(questions)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn parse_row(record: &StringRecord) -> PersistResult<Question> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let parse_err = |message: String| PersistError::Parse { line, message };

    if record.len() != HEADER.len() {
        return Err(parse_err(format!(
            "expected {} fields, found {}",
            HEADER.len(),
            record.len()
        )));
    }
    let field = |idx: usize| record.get(idx).unwrap_or("").to_string();

    let id: QuestionId = record
        .get(0)
        .unwrap_or("")
        .trim()
        .parse()
        .map_err(|e| parse_err(format!("invalid id: {e}")))?;
    let is_solved = match record.get(6).unwrap_or("").trim() {
        "Yes" => true,
        "No" => false,
        other => return Err(parse_err(format!("invalid solved flag {other:?}"))),
    };

    Ok(Question {
        id,
        title: field(1),
        topic: field(2),
        difficulty: field(3),
        platform: field(4),
        notes: field(5),
        is_solved,
        solved_date: if is_solved { field(7) } else { String::new() },
    })
}
