//! Typed query helpers over a parsed `scraper::Html` tree.
//!
//! The extraction rules never walk the tree by hand; they go through these
//! helpers so that "find", "attribute", "text" and "text without these nodes"
//! read the same everywhere.

use scraper::{ElementRef, Selector};

/// Parse a selector known at compile time. Only used for `LazyLock` statics.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

pub fn select_all<'a>(scope: ElementRef<'a>, sel: &Selector) -> Vec<ElementRef<'a>> {
    scope.select(sel).collect()
}

pub fn select_first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// First following sibling element (any distance) matching `sel`.
pub fn next_sibling_matching<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sel.matches(sibling))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Concatenated descendant text, trimmed.
pub fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Descendant text with every subtree matching `excluded` left out, as if
/// those nodes had been removed from the document first. Not trimmed.
pub fn text_excluding(el: ElementRef<'_>, excluded: &Selector) -> String {
    let mut out = String::new();
    collect_text(el, excluded, &mut out);
    out
}

fn collect_text(el: ElementRef<'_>, excluded: &Selector, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if !excluded.matches(&child_el) {
                collect_text(child_el, excluded, out);
            }
        }
    }
}
