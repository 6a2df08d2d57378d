use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use super::dom;
use crate::entry::{EntryRecord, Sense};

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9/]").unwrap());

static SYLLABLE_SEL: LazyLock<Selector> = LazyLock::new(|| dom::selector("span.syllable"));
static NON_STANDARD_SEL: LazyLock<Selector> = LazyLock::new(|| dom::selector("small b"));
static HEADING_NOISE_SEL: LazyLock<Selector> =
    LazyLock::new(|| dom::selector("span.syllable, small"));

const ROOT_SEPARATOR: char = '»';
const SYLLABLE_BOUNDARY: char = '.';

/// Cleaned entry heading, everything an `EntryRecord` needs besides senses.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub syllabification: String,
    pub root_word: Option<String>,
    pub pronunciation: String,
    pub non_standard: Option<String>,
}

impl Heading {
    pub fn into_record(self, senses: Vec<Sense>) -> EntryRecord {
        EntryRecord {
            syllabification: self.syllabification,
            root_word: self.root_word,
            pronunciation: self.pronunciation,
            is_standard: true,
            alternate_form: self.non_standard,
            senses,
        }
    }

    /// Record for a non-standard spelling whose senses come from `standard_form`.
    pub fn into_redirect_record(self, standard_form: String, senses: Vec<Sense>) -> EntryRecord {
        EntryRecord {
            syllabification: self.syllabification,
            root_word: self.root_word,
            pronunciation: self.pronunciation,
            is_standard: false,
            alternate_form: Some(standard_form),
            senses,
        }
    }
}

pub fn parse_heading(h2: ElementRef<'_>) -> Heading {
    let spelled = dom::select_all(h2, &SYLLABLE_SEL)
        .into_iter()
        .map(dom::trimmed_text)
        .collect::<String>();
    let spelled = clean(&spelled);

    let non_standard = dom::select_all(h2, &NON_STANDARD_SEL)
        .into_iter()
        .map(dom::trimmed_text)
        .collect::<String>();
    let non_standard = Some(clean(&non_standard)).filter(|s| !s.is_empty());

    let text = clean(&dom::text_excluding(h2, &HEADING_NOISE_SEL));
    let (root_word, syllabification) = split_root(&text);

    let pronunciation = if spelled.is_empty() {
        syllabification.replace(SYLLABLE_BOUNDARY, "")
    } else {
        spelled
    };

    Heading {
        syllabification,
        root_word,
        pronunciation,
        non_standard,
    }
}

/// Trim and drop homograph digits and slashes.
pub fn clean(text: &str) -> String {
    STRIP_RE.replace_all(text.trim(), "").trim().to_string()
}

/// `"makan » ma.kan.an"` → (`Some("makan")`, `"ma.kan.an"`).
fn split_root(text: &str) -> (Option<String>, String) {
    match text.split_once(ROOT_SEPARATOR) {
        Some((root, derived)) => (Some(root.trim().to_string()), derived.trim().to_string()),
        None => (None, text.to_string()),
    }
}
