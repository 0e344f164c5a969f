//! Book model and related request/query types.
//!
//! JSON keys are camelCase (`pageCount`, `readPage`, `insertedAt`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

/// Stored book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque 16-character identifier
    #[schema(example = "Qbax5Oy7L8WKf74l")]
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    /// `readPage == pageCount` at the last write
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a new record from a validated input
    pub fn new(id: String, input: &BookInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name.clone().unwrap_or_default(),
            year: input.year,
            author: input.author.clone(),
            summary: input.summary.clone(),
            publisher: input.publisher.clone(),
            page_count: input.page_count,
            read_page: input.read_page,
            finished: input.is_finished(),
            reading: input.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every mutable field. `id` and `inserted_at` are kept.
    pub fn apply(&mut self, input: &BookInput, now: DateTime<Utc>) {
        self.name = input.name.clone().unwrap_or_default();
        self.year = input.year;
        self.author = input.author.clone();
        self.summary = input.summary.clone();
        self.publisher = input.publisher.clone();
        self.page_count = input.page_count;
        self.read_page = input.read_page;
        self.finished = input.is_finished();
        self.reading = input.reading;
        self.updated_at = now;
    }
}

/// Short book representation for lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookShort {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Create/update book request. Missing or `null` fields fall back to zero
/// values, except `name` whose absence is reported by validation.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase")]
#[validate(schema(function = "validate_page_progress"))]
pub struct BookInput {
    #[validate(required(message = "missing name"), length(min = 1, message = "missing name"))]
    pub name: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub year: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub author: String,
    #[serde_as(as = "DefaultOnNull")]
    pub summary: String,
    #[serde_as(as = "DefaultOnNull")]
    pub publisher: String,
    #[serde_as(as = "DefaultOnNull")]
    pub page_count: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub read_page: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub reading: bool,
}

fn validate_page_progress(input: &BookInput) -> Result<(), ValidationError> {
    if input.read_page > input.page_count {
        return Err(ValidationError::new("read_page_exceeds_page_count"));
    }
    Ok(())
}

/// Operation a book input is submitted for, used to word error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Add,
    Update,
}

impl BookAction {
    fn verb(self) -> &'static str {
        match self {
            BookAction::Add => "add",
            BookAction::Update => "update",
        }
    }
}

impl BookInput {
    pub fn is_finished(&self) -> bool {
        self.read_page == self.page_count
    }

    /// Check the input. A missing name is reported before page progress.
    pub fn check(&self, action: BookAction) -> AppResult<()> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let reason = if errors.field_errors().contains_key("name") {
            "Please provide the book name"
        } else {
            "readPage must not be greater than pageCount"
        };

        Err(AppError::Validation(format!(
            "Failed to {} book. {}",
            action.verb(),
            reason
        )))
    }
}

/// Book list query parameters (API). Boolean filters arrive as numeric
/// strings: any non-zero number means true.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    /// `1` for books being read, `0` for the others
    pub reading: Option<String>,
    /// `1` for finished books, `0` for the others
    pub finished: Option<String>,
}

impl BookQuery {
    /// Translate the raw query strings into a typed filter.
    /// Empty values disable the corresponding filter.
    pub fn to_filter(&self) -> BookFilter {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_owned);

        BookFilter {
            name: present(&self.name).map(|n| n.to_lowercase()),
            reading: present(&self.reading).map(|v| parse_flag(&v)),
            finished: present(&self.finished).map(|v| parse_flag(&v)),
        }
    }
}

/// Numeric-string flag, read like a JavaScript `Number()` cast: decimals,
/// `0x`/`0o`/`0b` integers and `Infinity` are numbers, anything else is NaN.
/// Non-zero numbers are true; zero and NaN are false.
fn parse_flag(value: &str) -> bool {
    let value = value.trim();

    let prefixed = [("0x", 16u32), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| {
            value
                .get(..2)
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| (&value[2..], radix))
        });
    if let Some((digits, radix)) = prefixed {
        return !digits.is_empty()
            && digits.chars().all(|c| c.is_digit(radix))
            && digits.chars().any(|c| c != '0');
    }

    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    if unsigned == "Infinity" {
        return true;
    }
    // Rust also accepts `inf` and `nan`
    if unsigned
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !c.eq_ignore_ascii_case(&'e'))
    {
        return false;
    }

    value.parse::<f64>().map(|n| n != 0.0).unwrap_or(false)
}

/// Typed list filter. Every `Some` criterion must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Lowercased name fragment
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(ref name) = self.name {
            if !book.name.to_lowercase().contains(name.as_str()) {
                return false;
            }
        }
        if self.reading.is_some_and(|reading| book.reading != reading) {
            return false;
        }
        if self.finished.is_some_and(|finished| book.finished != finished) {
            return false;
        }
        true
    }
}
