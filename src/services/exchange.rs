//! Bulk import and export of the book catalog
//!
//! Imports parse and validate the whole document before the first insert,
//! so malformed input persists nothing. Inserts are then issued one by one:
//! if the store fails partway, the books created before the failure stay.

use chrono::SecondsFormat;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookInput, BookRecord, ImportReport},
    repository::SharedStore,
};

pub const CSV_HEADER: [&str; 5] = ["ID", "Title", "Description", "AuthorID", "CreatedAt"];

/// Minimum fields for an importable CSV row (ID, Title, Description, AuthorID)
const CSV_MIN_FIELDS: usize = 4;

#[derive(Clone)]
pub struct ExchangeService {
    repository: SharedStore,
}

impl ExchangeService {
    pub fn new(repository: SharedStore) -> Self {
        Self { repository }
    }

    /// Whole catalog as an indented JSON array
    pub async fn export_books_json(&self) -> AppResult<Vec<u8>> {
        let books = self.repository.list_books().await?;
        serde_json::to_vec_pretty(&books)
            .map_err(|e| AppError::Internal(format!("Failed to serialize books: {}", e)))
    }

    /// Whole catalog as CSV with a header row. Timestamps are RFC 3339 UTC.
    pub async fn export_books_csv(&self) -> AppResult<Vec<u8>> {
        let books = self.repository.list_books().await?;
        write_csv(&books)
    }

    /// Import books from a JSON array. Supplied ids are ignored.
    pub async fn import_books_json(&self, data: &[u8]) -> AppResult<ImportReport> {
        let books = parse_json(data)?;
        self.insert_all(books, 0).await
    }

    /// Import books from CSV in the export layout.
    ///
    /// The first row is treated as the header. Rows with fewer than four
    /// fields are skipped; errors name the 1-based row number.
    pub async fn import_books_csv(&self, data: &[u8]) -> AppResult<ImportReport> {
        let (books, skipped) = parse_csv(data)?;
        self.insert_all(books, skipped).await
    }

    async fn insert_all(&self, books: Vec<BookInput>, skipped: usize) -> AppResult<ImportReport> {
        let mut report = ImportReport {
            imported: 0,
            skipped,
        };

        for book in &books {
            if let Err(e) = self.repository.create_book(book).await {
                tracing::warn!(
                    "Import aborted after {} of {} books: {}",
                    report.imported,
                    books.len(),
                    e
                );
                return Err(e.into());
            }
            report.imported += 1;
        }

        tracing::info!(
            "Imported {} books ({} rows skipped)",
            report.imported,
            report.skipped
        );
        Ok(report)
    }
}

fn write_csv(books: &[Book]) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER).map_err(csv_write_error)?;

    for book in books {
        writer
            .write_record([
                book.id.to_string(),
                book.title.clone(),
                book.description.clone().unwrap_or_default(),
                book.author_id.to_string(),
                book.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            ])
            .map_err(csv_write_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to write CSV: {}", e)))
}

fn csv_write_error(e: csv::Error) -> AppError {
    AppError::Internal(format!("Failed to write CSV: {}", e))
}

fn parse_json(data: &[u8]) -> AppResult<Vec<BookInput>> {
    let records: Vec<BookRecord> = serde_json::from_slice(data)
        .map_err(|e| AppError::Validation(format!("Invalid JSON import: {}", e)))?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| -> AppResult<BookInput> {
            let book = BookInput::from(record);
            book.validate()
                .map_err(|e| AppError::Validation(format!("record {}: {}", index + 1, e)))?;
            Ok(book)
        })
        .collect()
}

fn parse_csv(data: &[u8]) -> AppResult<(Vec<BookInput>, usize)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut books = Vec::new();
    let mut skipped = 0;

    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record
            .map_err(|e| AppError::Validation(format!("Malformed CSV on row {}: {}", row, e)))?;

        if index == 0 {
            continue;
        }
        if record.len() < CSV_MIN_FIELDS {
            skipped += 1;
            continue;
        }

        let author_id = record[3].parse::<i32>().map_err(|e| {
            AppError::Validation(format!("invalid author id on row {}: {}", row, e))
        })?;
        let description = match &record[2] {
            "" => None,
            text => Some(text.to_string()),
        };

        let book = BookInput::new(&record[1], description, author_id);
        book.validate()
            .map_err(|e| AppError::Validation(format!("row {}: {}", row, e)))?;
        books.push(book);
    }

    Ok((books, skipped))
}
