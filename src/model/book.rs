use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Represents one book in the inventory.
///
/// # Synchronizer
/// This struct implements the [`SyncEntity`](crate::framework::SyncEntity) trait (see
/// [`book_actor::entity`](crate::book_actor::entity)), allowing it to be mirrored by a
/// [`SyncActor`](crate::framework::SyncActor).
///
/// Every field is free text. Nothing is validated: a missing field reads as an empty
/// string, and numbers, booleans or nested values written by other clients of the store
/// read as their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub isbn: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub price: String,
}

impl Book {
    /// Creates a new Book instance.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        isbn: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            isbn: isbn.into(),
            price: price.into(),
        }
    }

    /// Reads one column's value.
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Title => &self.title,
            Column::Author => &self.author,
            Column::Year => &self.year,
            Column::Isbn => &self.isbn,
            Column::Price => &self.price,
        }
    }

    /// Overwrites one column's value, as the add-book form does per input.
    pub fn set_field(&mut self, column: Column, value: impl Into<String>) {
        let value = value.into();
        match column {
            Column::Title => self.title = value,
            Column::Author => self.author = value,
            Column::Year => self.year = value,
            Column::Isbn => self.isbn = value,
            Column::Price => self.price = value,
        }
    }
}

/// Keeps any JSON value as text. Strings are taken as-is, `null` reads as empty, and
/// everything else reads as its compact JSON form.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// The data columns of the inventory grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Author,
    Year,
    Isbn,
    Price,
}

impl Column {
    /// All columns, in display order.
    pub const ALL: [Column; 5] = [
        Column::Title,
        Column::Author,
        Column::Year,
        Column::Isbn,
        Column::Price,
    ];

    /// The field name, as stored and as typed on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Column::Title => "title",
            Column::Author => "author",
            Column::Year => "year",
            Column::Isbn => "isbn",
            Column::Price => "price",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::Author => "Author",
            Column::Year => "Year",
            Column::Isbn => "ISBN",
            Column::Price => "Price",
        }
    }

    /// Year and price hold numeric text and sort as numbers when they parse.
    pub fn is_numeric(self) -> bool {
        matches!(self, Column::Year | Column::Price)
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a column name is not one of the five book fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column: {0}")]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields_read_as_empty() {
        let book: Book = serde_json::from_str(r#"{"title":"Dune"}"#).unwrap();
        assert_eq!(book, Book::new("Dune", "", "", "", ""));
    }

    #[test]
    fn test_numbers_are_kept_as_text() {
        let book: Book = serde_json::from_str(
            r#"{"title":"Dune","author":"Herbert","year":1965,"isbn":null,"price":9.99,"extra":true}"#,
        )
        .unwrap();
        assert_eq!(book.year, "1965");
        assert_eq!(book.price, "9.99");
        assert_eq!(book.isbn, "");
    }

    #[test]
    fn test_nested_values_read_as_json_text() {
        let book: Book =
            serde_json::from_str(r#"{"title":{"nested":1},"author":["a","b"]}"#).unwrap();
        assert_eq!(book.title, r#"{"nested":1}"#);
        assert_eq!(book.author, r#"["a","b"]"#);
    }

    #[test]
    fn test_serializes_all_five_fields() {
        let json = serde_json::to_value(Book::new("Foo", "", "", "", "")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title":"Foo","author":"","year":"","isbn":"","price":""})
        );
    }

    #[test]
    fn test_set_field_mirrors_form_input() {
        let mut book = Book::default();
        for column in Column::ALL {
            book.set_field(column, column.header());
        }
        for column in Column::ALL {
            assert_eq!(book.field(column), column.header());
        }
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!("isbn".parse::<Column>(), Ok(Column::Isbn));
        assert_eq!(" Price ".parse::<Column>(), Ok(Column::Price));
        assert_eq!(
            "publisher".parse::<Column>(),
            Err(UnknownColumn("publisher".to_string()))
        );
    }
}
