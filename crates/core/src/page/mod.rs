//! HTML page model and the price rewriter.
//!
//! A [`PricePage`] owns a parsed HTML tree. Price elements are found through
//! CSS selectors ([`PriceSelectors`]), optionally limited to a [`ScanRoot`],
//! and rewritten in place; the page is serialised back with
//! [`PricePage::html`].

mod amount;
mod rewriter;

pub use amount::{parse_amount, parse_attribute_amount};
pub use rewriter::{rewrite_prices, PriceRewriter, RewriteReport, INDICATOR_PREFIX};

use lazy_static::lazy_static;
use scraper::node::Text;
use scraper::{ElementRef, Html, Node, Selector};

use crate::errors::{Error, Result};

/// Class marking the pre-discount price.
pub const ORIGINAL_PRICE_SELECTOR: &str = ".popup-price-original";
/// Class marking the discounted price.
pub const DISCOUNTED_PRICE_SELECTOR: &str = ".popup-price-discount";
/// Id of the optional "currency in use" label.
pub const CURRENCY_INDICATOR_SELECTOR: &str = "#currency-indicator";
/// Attribute holding the EUR amount out-of-band.
pub const BASE_AMOUNT_ATTRIBUTE: &str = "data-price";

lazy_static! {
    static ref STANDARD_SELECTORS: PriceSelectors = PriceSelectors {
        original: Selector::parse(ORIGINAL_PRICE_SELECTOR).expect("Invalid selector"),
        discounted: Selector::parse(DISCOUNTED_PRICE_SELECTOR).expect("Invalid selector"),
        indicator: Selector::parse(CURRENCY_INDICATOR_SELECTOR).expect("Invalid selector"),
    };
}

/// Parses a CSS selector, mapping failures to [`Error::InvalidSelector`].
pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Role of a price element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRole {
    Original,
    Discounted,
}

/// The selectors that tag price elements and the currency indicator.
#[derive(Debug, Clone)]
pub struct PriceSelectors {
    pub original: Selector,
    pub discounted: Selector,
    pub indicator: Selector,
}

impl PriceSelectors {
    pub fn new(original: &str, discounted: &str, indicator: &str) -> Result<Self> {
        Ok(Self {
            original: parse_selector(original)?,
            discounted: parse_selector(discounted)?,
            indicator: parse_selector(indicator)?,
        })
    }

    pub fn for_role(&self, role: PriceRole) -> &Selector {
        match role {
            PriceRole::Original => &self.original,
            PriceRole::Discounted => &self.discounted,
        }
    }
}

impl Default for PriceSelectors {
    fn default() -> Self {
        STANDARD_SELECTORS.clone()
    }
}

/// Limits which part of the page a rewrite may touch.
#[derive(Debug, Clone, Default)]
pub enum ScanRoot {
    #[default]
    Document,
    /// Only descendants of elements matching the selector.
    Within(Selector),
}

impl ScanRoot {
    pub fn within(selector: &str) -> Result<Self> {
        parse_selector(selector).map(Self::Within)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageKind {
    Document,
    Fragment,
}

/// A parsed HTML page or fragment whose prices can be rewritten.
pub struct PricePage {
    html: Html,
    kind: PageKind,
}

impl PricePage {
    pub fn parse_document(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
            kind: PageKind::Document,
        }
    }

    pub fn parse_fragment(source: &str) -> Self {
        Self {
            html: Html::parse_fragment(source),
            kind: PageKind::Fragment,
        }
    }

    /// Serialises the page. Fragments come back without the wrapper element.
    pub fn html(&self) -> String {
        match self.kind {
            PageKind::Document => self.html.html(),
            PageKind::Fragment => self.html.root_element().inner_html(),
        }
    }

    /// Text content of every element matching `selector` inside `root`, in document order.
    pub fn texts(&self, root: &ScanRoot, selector: &Selector) -> Vec<String> {
        let mut texts = Vec::new();
        self.for_each_in(root, selector, |el| texts.push(el.text().collect()));
        texts
    }

    /// Visits each element matching `selector` inside `root` once.
    fn for_each_in<'a, F>(&'a self, root: &ScanRoot, selector: &Selector, mut visit: F)
    where
        F: FnMut(ElementRef<'a>),
    {
        match root {
            ScanRoot::Document => self.html.select(selector).for_each(visit),
            ScanRoot::Within(scope) => {
                let mut seen = Vec::new();
                for scope_el in self.html.select(scope) {
                    for el in scope_el.select(selector) {
                        if !seen.contains(&el.id()) {
                            seen.push(el.id());
                            visit(el);
                        }
                    }
                }
            }
        }
    }

    /// Replaces the text of matching elements.
    ///
    /// `replacement` sees each element and returns its new text, or `None`
    /// to leave it alone. Returns (replaced, left alone).
    pub(crate) fn replace_texts<F>(
        &mut self,
        root: &ScanRoot,
        selector: &Selector,
        mut replacement: F,
    ) -> (usize, usize)
    where
        F: FnMut(ElementRef<'_>) -> Option<String>,
    {
        let mut edits = Vec::new();
        let mut untouched = 0;
        self.for_each_in(root, selector, |el| match replacement(el) {
            Some(text) => edits.push((el.id(), text)),
            None => untouched += 1,
        });

        let replaced = edits.len();
        for (id, text) in edits {
            let children: Vec<_> = match self.html.tree.get(id) {
                Some(node) => node.children().map(|child| child.id()).collect(),
                None => continue,
            };
            for child in children {
                if let Some(mut child) = self.html.tree.get_mut(child) {
                    child.detach();
                }
            }
            if let Some(mut node) = self.html.tree.get_mut(id) {
                node.append(text_node(&text));
            }
        }
        (replaced, untouched)
    }

    /// Sets the text of the first element matching `selector` inside `root`
    /// and makes it visible.
    ///
    /// Returns `false` when there is no such element, or when a visible copy
    /// of it cannot be built. In the latter case the text is still set.
    pub(crate) fn reveal_with_text(
        &mut self,
        root: &ScanRoot,
        selector: &Selector,
        text: &str,
    ) -> bool {
        let mut target = None;
        self.for_each_in(root, selector, |el| {
            if target.is_none() {
                target = Some((el.id(), visible_copy(el)));
            }
        });

        let Some((id, copy)) = target else {
            return false;
        };
        let Some(mut old) = self.html.tree.get_mut(id) else {
            return false;
        };
        match copy {
            Some(element) => {
                let mut shown = old.insert_before(element);
                shown.append(text_node(text));
                old.detach();
                true
            }
            None => {
                while let Some(mut child) = old.first_child() {
                    child.detach();
                }
                old.append(text_node(text));
                false
            }
        }
    }
}

fn text_node(text: &str) -> Node {
    Node::Text(Text { text: text.into() })
}

/// Wrappers that put a tag in a context where the parser keeps it.
fn parse_context(tag: &str) -> (&'static str, &'static str) {
    match tag {
        "td" | "th" => ("<table><tbody><tr>", "</tr></tbody></table>"),
        "tr" => ("<table><tbody>", "</tbody></table>"),
        "tbody" | "thead" | "tfoot" | "caption" | "colgroup" => ("<table>", "</table>"),
        _ => ("", ""),
    }
}

/// A childless copy of `el` with `hidden` dropped and `display: inline` forced.
/// `None` if the parser cannot reproduce the element outside its page.
fn visible_copy(el: ElementRef<'_>) -> Option<Node> {
    let element = el.value();
    let mut markup = format!("<{}", element.name());
    let mut has_style = false;
    for (name, value) in element.attrs() {
        match name {
            "hidden" => {}
            "style" => {
                has_style = true;
                markup.push_str(&format!(" style=\"{}\"", escape_attr(&visible_style(value))));
            }
            _ => markup.push_str(&format!(" {}=\"{}\"", name, escape_attr(value))),
        }
    }
    if !has_style {
        markup.push_str(" style=\"display: inline\"");
    }
    markup.push_str(&format!("></{}>", element.name()));

    let (open, close) = parse_context(element.name());
    let fragment = Html::parse_fragment(&format!("{}{}{}", open, markup, close));
    let copy = fragment
        .root_element()
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == element.name())
        .map(|e| Node::Element(e.value().clone()));
    copy
}

fn visible_style(style: &str) -> String {
    let mut declarations: Vec<&str> = style
        .split(';')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .filter(|d| {
            let property = d.split(':').next().unwrap_or("").trim();
            !property.eq_ignore_ascii_case("display")
        })
        .collect();
    declarations.push("display: inline");
    declarations.join("; ")
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
