//! Markup for the parts of the catalog page that carry prices.
//!
//! Every price span is rendered with its EUR amount in `data-price`, so the
//! localizer never has to read back text it has already converted.

use rust_decimal::Decimal;

use super::{checkout_url, shelf_position, Book, Shelf};
use crate::page::{
    BASE_AMOUNT_ATTRIBUTE, CURRENCY_INDICATOR_SELECTOR, DISCOUNTED_PRICE_SELECTOR,
    ORIGINAL_PRICE_SELECTOR,
};

/// `€12.99`
pub fn euro_label(amount: Decimal) -> String {
    let mut amount = amount.round_dp(2);
    amount.rescale(2);
    format!("€{}", amount)
}

fn class_of(selector: &str) -> &str {
    selector.trim_start_matches('.')
}

fn id_of(selector: &str) -> &str {
    selector.trim_start_matches('#')
}

/// Minimal HTML escaping for text and double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The popup price container for one book.
pub fn render_price_block(book: &Book) -> String {
    format!(
        concat!(
            r#"<div class="popup-price-container">"#,
            r#"<span class="{orig_class}" {attr}="{orig}">{orig_label}</span>"#,
            r#"<span class="{disc_class}" {attr}="{disc}">{disc_label}</span>"#,
            "</div>"
        ),
        orig_class = class_of(ORIGINAL_PRICE_SELECTOR),
        disc_class = class_of(DISCOUNTED_PRICE_SELECTOR),
        attr = BASE_AMOUNT_ATTRIBUTE,
        orig = book.original_price,
        disc = book.discounted_price,
        orig_label = euro_label(book.original_price),
        disc_label = euro_label(book.discounted_price),
    )
}

/// One catalog entry: cover, title, category, prices and the checkout link.
pub fn render_book_card(book: &Book) -> String {
    format!(
        concat!(
            r#"<article class="book" id="book-{id}">"#,
            r#"<img src="{cover}" alt="{title}">"#,
            r#"<h3 class="book-title">{title}</h3>"#,
            r#"<p class="book-category">{category}</p>"#,
            r#"<p class="book-summary">{summary}</p>"#,
            "{prices}",
            r#"<a class="checkout" href="{checkout}">Comprar ahora</a>"#,
            "</article>"
        ),
        id = escape_html(book.id),
        cover = escape_html(book.cover_url),
        title = escape_html(book.title),
        category = escape_html(book.shelf.label()),
        summary = escape_html(book.summary),
        prices = render_price_block(book),
        checkout = escape_html(&checkout_url(book)),
    )
}

/// One carousel section with its cards, in the order given.
pub fn render_shelf(shelf: Shelf, books: &[&Book]) -> String {
    let cards: String = books.iter().map(|book| render_book_card(book)).collect();
    format!(
        concat!(
            r#"<section class="shelf" id="shelf-{slug}">"#,
            r#"<h2 class="shelf-title">{label}</h2>"#,
            "{cards}",
            "</section>"
        ),
        slug = shelf.slug(),
        label = escape_html(shelf.label()),
        cards = cards,
    )
}

/// A complete page listing `books` grouped by shelf, with a hidden currency
/// indicator. Shelves without any of `books` are left out.
pub fn render_catalog_page<'a, I>(books: I) -> String
where
    I: IntoIterator<Item = &'a Book>,
{
    let books: Vec<&Book> = books.into_iter().collect();
    let shelves: String = Shelf::ALL
        .iter()
        .filter_map(|shelf| {
            let mut on_shelf: Vec<&Book> =
                books.iter().copied().filter(|b| b.shelf == *shelf).collect();
            if on_shelf.is_empty() {
                return None;
            }
            on_shelf.sort_by_key(|b| shelf_position(b));
            Some(render_shelf(*shelf, &on_shelf))
        })
        .collect();

    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="es"><head><meta charset="utf-8"><title>Catálogo</title></head>"#,
            "<body>",
            r#"<header><span id="{indicator}" style="display: none"></span></header>"#,
            r#"<main class="catalog">{shelves}</main>"#,
            "</body></html>"
        ),
        indicator = id_of(CURRENCY_INDICATOR_SELECTOR),
        shelves = shelves,
    )
}
