use std::fmt;

use serde::Serialize;
use shelf_kernel::settings::SeedBook;

/// Decimal amount held in minor units so equality is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Build a price from whole units and cents, e.g. `Price::new(10, 0)` is 10.00.
    ///
    /// `None` when `minor` is not below 100 or the total overflows.
    pub fn new(major: u64, minor: u8) -> Option<Self> {
        if minor >= 100 {
            return None;
        }
        major
            .checked_mul(100)?
            .checked_add(u64::from(minor))
            .map(Self)
    }

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A catalog book. Two books with the same four attributes are the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Book {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    pub genre: String,
    pub price: Price,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            price,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl From<&SeedBook> for Book {
    fn from(seed: &SeedBook) -> Self {
        Book::new(
            seed.title.as_str(),
            seed.author.as_str(),
            seed.genre.as_str(),
            Price::from_cents(seed.price_cents),
        )
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}, {})",
            self.title, self.author, self.genre, self.price
        )
    }
}

/// Someone the catalog can sell to and accept reviews from.
///
/// The catalog reads `purchased_books` exactly once per review attempt, so
/// substitutes can count calls.
pub trait Purchaser {
    /// Books bought so far, in purchase order.
    fn purchased_books(&self) -> Vec<Book>;

    /// Append a book to the purchase history.
    fn record_purchase(&self, book: Book);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_renders_two_decimals() {
        assert_eq!(Price::from_cents(1000).to_string(), "10.00");
        assert_eq!(Price::from_cents(605).to_string(), "6.05");
        assert_eq!(Price::new(20, 0), Some(Price::from_cents(2000)));
    }

    #[test]
    fn price_rejects_out_of_range_cents() {
        assert_eq!(Price::new(1, 99), Some(Price::from_cents(199)));
        assert_eq!(Price::new(1, 100), None);
        assert_eq!(Price::new(1, 150), None);
    }

    #[test]
    fn price_rejects_overflow() {
        let max_major = u64::MAX / 100;
        assert_eq!(Price::new(max_major, 15), Some(Price::from_cents(u64::MAX)));
        assert_eq!(Price::new(max_major, 16), None);
        assert_eq!(Price::new(u64::MAX, 0), None);
    }

    #[test]
    fn books_compare_by_value() {
        let a = Book::new(
            "Java",
            "Marley Marvin",
            "Non-Fiction",
            Price::from_cents(2000),
        );
        let b = Book::new(
            "Java",
            "Marley Marvin",
            "Non-Fiction",
            Price::from_cents(2000),
        );
        let cheaper = Book::new(
            "Java",
            "Marley Marvin",
            "Non-Fiction",
            Price::from_cents(1999),
        );

        assert_eq!(a, b);
        assert_ne!(a, cheaper);
    }

    #[test]
    fn seed_converts_to_book() {
        let seed = SeedBook {
            title: "Windows".to_string(),
            author: "Harley Jarvis".to_string(),
            genre: "Fiction".to_string(),
            price_cents: 1000,
        };
        let book = Book::from(&seed);
        assert_eq!(book.to_string(), "Windows by Harley Jarvis (Fiction, 10.00)");
    }
}
