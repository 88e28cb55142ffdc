//! Book catalog: static product data and the markup that carries prices.

mod books;
mod render;

pub use books::{shelf_position, Book, Shelf, BOOKS, SHELF_ORDER};
pub use render::{
    escape_html, euro_label, render_book_card, render_catalog_page, render_price_block,
    render_shelf,
};

use crate::errors::{Error, Result};

/// Checkout page for a book.
pub fn checkout_url(book: &Book) -> String {
    format!("https://pay.hotmart.com/{}?checkoutMode=2", book.checkout_id)
}

pub fn find_book(id: &str) -> Option<&'static Book> {
    BOOKS.iter().find(|b| b.id == id)
}

/// Resolves every id, failing on the first unknown one.
pub fn books_by_id<S: AsRef<str>>(ids: &[S]) -> Result<Vec<&'static Book>> {
    ids.iter()
        .map(|id| {
            let id = id.as_ref();
            find_book(id).ok_or_else(|| Error::UnknownBook(id.to_string()))
        })
        .collect()
}
