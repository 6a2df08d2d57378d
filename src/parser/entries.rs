use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::dom;
use super::heading::{self, Heading};
use super::senses;
use crate::entry::Sense;

static HEADING_SEL: LazyLock<Selector> =
    LazyLock::new(|| dom::selector(r#"h2[style="margin-bottom:3px"]"#));
static LIST_SEL: LazyLock<Selector> = LazyLock::new(|| dom::selector("ul.adjusted-par, ol"));
static ITEM_SEL: LazyLock<Selector> = LazyLock::new(|| dom::selector("li"));
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| dom::selector("a"));
static PRE_CATEGORIAL_SEL: LazyLock<Selector> =
    LazyLock::new(|| dom::selector(r#"font[color="darkgreen"]"#));
static REFERENCES_SEL: LazyLock<Selector> =
    LazyLock::new(|| dom::selector(r#"font[color="grey"]"#));

const REDIRECT_MARKER: char = '→';

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    pub heading: Heading,
    pub body: EntryBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryBody {
    Senses(Vec<Sense>),
    /// Non-standard spelling; senses live on the entry page of `target`.
    Redirect { target: String, display: String },
}

/// Split an entry page into its entries, one per styled `h2`.
pub fn parse_entries(html: &str) -> Vec<ParsedEntry> {
    let doc = Html::parse_document(html);
    dom::select_all(doc.root_element(), &HEADING_SEL)
        .into_iter()
        .map(|h2| ParsedEntry {
            heading: heading::parse_heading(h2),
            body: classify(h2),
        })
        .collect()
}

fn classify(h2: ElementRef<'_>) -> EntryBody {
    let Some(list) = dom::next_sibling_matching(h2, &LIST_SEL) else {
        return match dom::next_sibling_matching(h2, &PRE_CATEGORIAL_SEL) {
            Some(note) => EntryBody::Senses(vec![pre_categorial(note)]),
            None => EntryBody::Senses(Vec::new()),
        };
    };

    if let Some(redirect) = redirect(list) {
        return redirect;
    }
    EntryBody::Senses(senses::extract_senses(list))
}

fn redirect(list: ElementRef<'_>) -> Option<EntryBody> {
    let first = dom::select_first(list, &ITEM_SEL)?;
    if !dom::trimmed_text(first).contains(REDIRECT_MARKER) {
        return None;
    }
    let anchor = dom::select_first(first, &ANCHOR_SEL)?;
    let target = dom::attr(anchor, "href")?.rsplit('/').next()?.to_string();
    Some(EntryBody::Redirect {
        target,
        display: heading::clean(&dom::trimmed_text(anchor)),
    })
}

fn pre_categorial(note: ElementRef<'_>) -> Sense {
    let (category, category_label) = match dom::attr(note, "title").map(senses::split_title) {
        Some((code, label)) => (Some(code), label),
        None => (None, None),
    };
    let references = dom::next_sibling_matching(note, &REFERENCES_SEL)
        .map(|refs| split_references(&dom::trimmed_text(refs)))
        .unwrap_or_default();

    Sense::PreCategorial {
        category,
        category_label,
        references,
    }
}

fn split_references(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn standard_entry_counts_list_items() {
        let html = r#"<div>
            <h2 style="margin-bottom:3px">ru.mah</h2>
            <ol><li>bangunan untuk tempat tinggal</li><li>bangunan pada umumnya</li><li>keluarga</li></ol>
        </div>"#;
        let entries = parse_entries(html);
        assert_eq!(entries.len(), 1);
        assert!(matches!(&entries[0].body, EntryBody::Senses(s) if s.len() == 3));
    }

    #[test]
    fn redirect_entry_keeps_link_target_case() {
        let html = r#"<div>
            <h2 style="margin-bottom:3px">ak.tip</h2>
            <ul class="adjusted-par"><li><font color="red"><span title="a: Adjektiva">a</span></font> → <a href="/entri/Aktif">ak.tif 1</a></li></ul>
        </div>"#;
        let entries = parse_entries(html);
        assert_eq!(
            entries[0].body,
            EntryBody::Redirect {
                target: "Aktif".into(),
                display: "ak.tif".into(),
            }
        );
    }

    #[test]
    fn redirect_marker_without_anchor_is_a_standard_sense() {
        let html = r#"<h2 style="margin-bottom:3px">ka.ta</h2><ol><li>lihat → sana</li></ol>"#;
        let entries = parse_entries(html);
        assert!(matches!(&entries[0].body, EntryBody::Senses(s) if s.len() == 1));
    }

    #[test]
    fn pre_categorial_entry_splits_references() {
        let html = r#"<div>
            <h2 style="margin-bottom:3px">ju.ang</h2>
            <font color="darkgreen" title="prakat: Prakategorial">prakategorial</font>:
            <font color="grey">a, b,c</font>
        </div>"#;
        let entries = parse_entries(html);
        assert_eq!(
            entries[0].body,
            EntryBody::Senses(vec![Sense::PreCategorial {
                category: Some("prakat".into()),
                category_label: Some("prakategorial".into()),
                references: vec!["a".into(), "b".into(), "c".into()],
            }])
        );
    }

    #[test]
    fn bare_heading_is_an_entry_without_senses() {
        let entries = parse_entries(r#"<h2 style="margin-bottom:3px">ka.ta</h2><p>tidak ada</p>"#);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].body, EntryBody::Senses(Vec::new()));
    }

    #[test]
    fn unrelated_page_has_no_entries() {
        let entries = parse_entries("<html><body><h2>Entri tidak ditemukan.</h2></body></html>");
        assert!(entries.is_empty());
    }

    #[test]
    fn makan_fixture() {
        let entries = parse_entries(&fixture("makan"));
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.heading.syllabification, "ma.kan");
        assert_eq!(first.heading.root_word, None);
        assert_eq!(first.heading.pronunciation, "makan");
        let EntryBody::Senses(senses) = &first.body else {
            panic!("expected senses");
        };
        assert_eq!(senses.len(), 3);
        assert!(matches!(
            &senses[1],
            Sense::Standard { category: Some(c), example: Some(e), .. }
                if c == "v" && e == "makan nasi"
        ));

        let derived = &entries[1];
        assert_eq!(derived.heading.root_word.as_deref(), Some("makan"));
        assert_eq!(derived.heading.syllabification, "ma.kan.an");
        assert!(matches!(&derived.body, EntryBody::Senses(s) if s.len() == 2));
    }

    #[test]
    fn aktip_fixture() {
        let entries = parse_entries(&fixture("aktip"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].heading.syllabification, "ak.tip");
        assert!(matches!(
            &entries[0].body,
            EntryBody::Redirect { target, display } if target == "aktif" && display == "ak.tif"
        ));
    }

    #[test]
    fn juang_fixture() {
        let entries = parse_entries(&fixture("juang"));
        assert_eq!(entries.len(), 1);
        assert!(matches!(
            &entries[0].body,
            EntryBody::Senses(s) if matches!(
                &s[..],
                [Sense::PreCategorial { references, .. }] if references == &["berjuang", "pejuang", "perjuangan"]
            )
        ));
    }
}
