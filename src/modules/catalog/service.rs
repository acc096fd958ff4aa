use std::collections::HashMap;

use shelf_kernel::settings::CatalogSettings;

use super::error::CatalogError;
use super::models::{Book, Purchaser};

/// In-memory book catalog. Books are unique by value and keep insertion order.
///
/// Reviews are keyed by book value and outlive catalog membership, so a buyer
/// can still review a book that has since been removed.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
    reviews: HashMap<Book, Vec<String>>,
    case_insensitive_search: bool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog with the configured search policy and seed books.
    pub fn with_settings(settings: &CatalogSettings) -> Self {
        let mut catalog = Self {
            books: Vec::with_capacity(settings.seed.len()),
            reviews: HashMap::new(),
            case_insensitive_search: settings.case_insensitive_search,
        };

        for seed in &settings.seed {
            if let Err(err) = catalog.add_book(Book::from(seed)) {
                tracing::warn!(error = %err, "skipping seed book");
            }
        }

        catalog
    }

    fn position(&self, book: &Book) -> Option<usize> {
        self.books.iter().position(|entry| entry == book)
    }

    pub fn contains(&self, book: &Book) -> bool {
        self.position(book).is_some()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Cataloged books in insertion order.
    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter()
    }

    /// Reviews written for `book`, oldest first. Empty when there are none.
    pub fn reviews(&self, book: &Book) -> &[String] {
        self.reviews.get(book).map(Vec::as_slice).unwrap_or_default()
    }

    /// Add a book unless an equal one is already cataloged.
    pub fn add_book(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.contains(&book) {
            tracing::debug!(title = %book.title, "rejecting duplicate book");
            return Err(CatalogError::duplicate(book.title));
        }

        tracing::info!(title = %book.title, author = %book.author, "book added");
        self.books.push(book);
        Ok(())
    }

    /// Remove the entry equal to `book`. Its reviews are kept.
    pub fn remove_book(&mut self, book: &Book) -> Result<(), CatalogError> {
        let Some(index) = self.position(book) else {
            tracing::debug!(title = %book.title, "cannot remove uncataloged book");
            return Err(CatalogError::not_found(book.title.as_str()));
        };

        self.books.remove(index);
        tracing::info!(title = %book.title, "book removed");
        Ok(())
    }

    /// Every book whose title contains `title`. An empty query matches all books.
    pub fn search_book(&self, title: &str) -> Vec<Book> {
        let matches: Vec<Book> = if self.case_insensitive_search {
            let needle = title.to_lowercase();
            self.books()
                .filter(|book| book.title.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        } else {
            self.books()
                .filter(|book| book.title.contains(title))
                .cloned()
                .collect()
        };

        tracing::debug!(query = title, hits = matches.len(), "catalog search");
        matches
    }

    /// Record `book` against `user`. The catalog entry stays in place.
    pub fn purchase_book<P>(&self, user: &P, book: &Book) -> Result<(), CatalogError>
    where
        P: Purchaser + ?Sized,
    {
        if !self.contains(book) {
            tracing::debug!(title = %book.title, "cannot purchase uncataloged book");
            return Err(CatalogError::not_found(book.title.as_str()));
        }

        user.record_purchase(book.clone());
        tracing::info!(title = %book.title, "book purchased");
        Ok(())
    }

    /// Attach a review on behalf of a user who has purchased `book`.
    ///
    /// The review text may be empty.
    pub fn add_book_review<P>(
        &mut self,
        user: &P,
        book: &Book,
        review: impl Into<String>,
    ) -> Result<(), CatalogError>
    where
        P: Purchaser + ?Sized,
    {
        let purchased = user.purchased_books();
        if !purchased.contains(book) {
            tracing::debug!(title = %book.title, "rejecting review for unpurchased book");
            return Err(CatalogError::not_purchased(book.title.as_str()));
        }

        let reviews = self.reviews.entry(book.clone()).or_default();
        reviews.push(review.into());
        tracing::info!(title = %book.title, reviews = reviews.len(), "review added");
        Ok(())
    }
}
