//! Locating result tables in a page and splitting them into per-headword row groups.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::row::has_class;
use crate::{Direction, Error};

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.WRD").expect("table selector"));
static MARKER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td[id]").expect("section marker selector"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("row selector"));

/// Classes of rows that only divide or label a table.
const HEADER_CLASSES: [&str; 2] = ["wrtopsection", "langHeader"];

/// A section of the results page.
///
/// Each section is rendered as its own `<table class="WRD">`, identified by a cell whose `id` is
/// the section name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Section {
    /// Principal translations
    #[default]
    Regular,
    /// Additional translations
    Additional,
    /// Compound forms
    Compounds,
    /// Phrasal verbs
    Phrasal,
}

impl Section {
    /// Returns the `id` of the cell marking this section's table.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Section::Regular => "regular",
            Section::Additional => "additional",
            Section::Compounds => "compounds",
            Section::Phrasal => "phrasal",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(Section::Regular),
            "additional" => Ok(Section::Additional),
            "compounds" => Ok(Section::Compounds),
            "phrasal" => Ok(Section::Phrasal),
            _ => Err(Error::UnknownSection(s.to_owned())),
        }
    }
}

/// Returns the table holding the principal translations, if the page has one.
///
/// Only the first such table is returned; a page is not expected to hold more than one.
#[must_use]
pub fn select_tables(document: &Html) -> Vec<ElementRef<'_>> {
    select_section_tables(document, &[Section::Regular])
}

/// Returns the first table of each of the given `sections`, in document order.
///
/// Sections that are missing from the page are skipped, and a table is never returned twice.
#[must_use]
pub fn select_section_tables<'a>(document: &'a Html, sections: &[Section]) -> Vec<ElementRef<'a>> {
    let mut remaining = sections.to_vec();

    document
        .select(&TABLE_SELECTOR)
        .filter(|table| {
            let before = remaining.len();
            remaining.retain(|section| !has_section_marker(*table, *section));

            remaining.len() != before
        })
        .collect()
}

fn has_section_marker(table: ElementRef<'_>, section: Section) -> bool {
    table
        .select(&MARKER_SELECTOR)
        .any(|cell| cell.attr("id") == Some(section.id()))
}

/// Splits the rows of `table` into groups, one per headword entry.
///
/// A row whose `id` starts with the prefix of `direction` (or its reverse) opens a new group;
/// every other row joins the open group. Section header rows are dropped and never open a group.
/// Empty groups are never returned.
#[must_use]
pub fn group_rows(table: ElementRef<'_>, direction: Direction) -> Vec<Vec<ElementRef<'_>>> {
    let mut groups = Vec::new();
    let mut current: Vec<ElementRef<'_>> = Vec::new();

    for row in table.select(&ROW_SELECTOR) {
        if is_section_header(row) {
            continue;
        }

        let is_boundary = row
            .attr("id")
            .is_some_and(|id| direction.is_entry_boundary(id));

        if is_boundary && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }

        current.push(row);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

fn is_section_header(row: ElementRef<'_>) -> bool {
    HEADER_CLASSES.iter().any(|class| has_class(row, class))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_ids(groups: &[Vec<ElementRef<'_>>]) -> Vec<Vec<String>> {
        groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|row| row.attr("data-name").unwrap_or_default().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_select_regular_table() {
        let document = Html::parse_document(
            "<table class='WRD' data-name='additional'><tr class='wrtopsection'><td id='additional'>Additional Translations</td></tr></table>\
             <table class='WRD' data-name='first'><tr class='wrtopsection'><td id='regular'>Principal Translations</td></tr></table>\
             <table class='WRD' data-name='second'><tr class='wrtopsection'><td id='regular'>Principal Translations</td></tr></table>\
             <table data-name='unmarked'><tr><td id='regular'>Not a result table</td></tr></table>",
        );
        let tables = select_tables(&document);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].attr("data-name"), Some("first"));
    }

    #[test]
    fn test_select_no_tables() {
        let document = Html::parse_document("<p>No translation was found for xyzzy.</p>");

        assert!(select_tables(&document).is_empty());
    }

    #[test]
    fn test_select_sections_in_document_order() {
        let document = Html::parse_document(
            "<table class='WRD' data-name='regular'><tr><td id='regular'></td></tr></table>\
             <table class='WRD' data-name='compounds'><tr><td id='compounds'></td></tr></table>\
             <table class='WRD' data-name='additional'><tr><td id='additional'></td></tr></table>",
        );
        let tables =
            select_section_tables(&document, &[Section::Additional, Section::Regular, Section::Phrasal]);
        let names: Vec<_> = tables.iter().filter_map(|table| table.attr("data-name")).collect();

        assert_eq!(names, ["regular", "additional"]);
    }

    #[test]
    fn test_group_rows_by_boundary() {
        let document = Html::parse_document(
            "<table class='WRD'>\
               <tr class='wrtopsection' data-name='top'><td id='regular'></td></tr>\
               <tr class='langHeader' id='enes:0' data-name='lang'><td></td></tr>\
               <tr id='enes1' data-name='A'><td></td></tr>\
               <tr data-name='B'><td></td></tr>\
               <tr id='enes2' data-name='C'><td></td></tr>\
               <tr data-name='D'><td></td></tr>\
             </table>",
        );
        let table = select_tables(&document)[0];
        let groups = group_rows(table, Direction::ENGLISH_SPANISH);

        assert_eq!(row_ids(&groups), [vec!["A", "B"], vec!["C", "D"]]);
    }

    #[test]
    fn test_group_rows_without_boundary() {
        let document = Html::parse_document(
            "<table class='WRD'>\
               <tr class='wrtopsection' data-name='top'><td id='regular'></td></tr>\
               <tr data-name='A'><td></td></tr>\
               <tr id='fren:1' data-name='B'><td></td></tr>\
             </table>",
        );
        let table = select_tables(&document)[0];
        let groups = group_rows(table, Direction::ENGLISH_SPANISH);

        assert_eq!(row_ids(&groups), [vec!["A", "B"]]);
    }

    #[test]
    fn test_group_rows_reverse_prefix() {
        let document = Html::parse_document(
            "<table class='WRD'>\
               <tr class='wrtopsection'><td id='regular'></td></tr>\
               <tr id='esen:1' data-name='A'><td></td></tr>\
               <tr id='enes:2' data-name='B'><td></td></tr>\
             </table>",
        );
        let table = select_tables(&document)[0];
        let groups = group_rows(table, Direction::SPANISH_ENGLISH);

        assert_eq!(row_ids(&groups), [vec!["A"], vec!["B"]]);
    }

    #[test]
    fn test_group_rows_header_only_table() {
        let document = Html::parse_document(
            "<table class='WRD'><tr class='wrtopsection'><td id='regular'></td></tr></table>",
        );
        let table = select_tables(&document)[0];

        assert!(group_rows(table, Direction::ENGLISH_SPANISH).is_empty());
    }

    #[test]
    fn test_parse_section() {
        assert_eq!("compounds".parse::<Section>().unwrap(), Section::Compounds);
        assert_eq!("Regular".parse::<Section>().unwrap(), Section::Regular);
        assert!(matches!(
            "idioms".parse::<Section>(),
            Err(Error::UnknownSection(_))
        ));
    }
}
