use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::dom;
use crate::entry::{Sense, SourceAnnotation};

static ITEM_SEL: LazyLock<Selector> = LazyLock::new(|| dom::selector("li"));
static INFO_SEL: LazyLock<Selector> = LazyLock::new(|| dom::selector(r#"font[color="red"]"#));
static LABEL_SEL: LazyLock<Selector> = LazyLock::new(|| dom::selector("span"));
static EXAMPLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| dom::selector(r#"font[color="grey"]:nth-child(3)"#));
static FONT_SEL: LazyLock<Selector> = LazyLock::new(|| dom::selector("font"));

/// Placeholder the dictionary uses for a source with no descriptive label.
const EMPTY_LABEL: &str = "-";

/// One `Sense::Standard` per `li` under `list`, in document order.
pub fn extract_senses(list: ElementRef<'_>) -> Vec<Sense> {
    dom::select_all(list, &ITEM_SEL)
        .into_iter()
        .map(extract_sense)
        .collect()
}

fn extract_sense(item: ElementRef<'_>) -> Sense {
    let mut category = None;
    let mut category_label = None;
    let mut source_annotations = Vec::new();

    if let Some(info) = dom::select_first(item, &INFO_SEL) {
        for (i, span) in dom::select_all(info, &LABEL_SEL).into_iter().enumerate() {
            let Some((code, label)) = dom::attr(span, "title").map(split_title) else {
                continue;
            };
            if i == 0 {
                category = Some(code);
                category_label = label;
            } else {
                source_annotations.push(SourceAnnotation {
                    source: code,
                    source_label: label.filter(|l| l != EMPTY_LABEL),
                });
            }
        }
    }

    let example = dom::select_first(item, &EXAMPLE_SEL)
        .map(dom::trimmed_text)
        .filter(|e| !e.is_empty());

    let text = dom::text_excluding(item, &FONT_SEL);
    let text = text.trim();
    let definition = text.strip_suffix(':').unwrap_or(text).to_string();

    Sense::Standard {
        category,
        category_label,
        definition,
        example,
        source_annotations,
    }
}

/// `"n: Nomina"` → (`"n"`, `Some("nomina")`). Only the first two parts count.
pub fn split_title(title: &str) -> (String, Option<String>) {
    let mut parts = title.split(':').map(|s| s.trim().to_lowercase());
    let code = parts.next().unwrap_or_default();
    (code, parts.next())
}
