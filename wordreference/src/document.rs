//! Turning a complete results page into translations.

use scraper::{ElementRef, Html};

use crate::log::{debug, warn};
use crate::table::{group_rows, select_section_tables};
use crate::{Direction, Error, Section, Translation};

/// Extracts translations from results pages.
///
/// By default only the principal translations table is read. Use [`Parser::with_sections`] to read
/// other sections as well.
#[derive(Debug, Clone)]
pub struct Parser {
    /// The direction the page was requested in.
    direction: Direction,
    /// The sections to read, in order of preference.
    sections: Vec<Section>,
}

impl Parser {
    /// Constructs a new `Parser` for pages in the given `direction`.
    #[must_use]
    pub fn new(direction: Direction) -> Parser {
        Parser {
            direction,
            sections: vec![Section::Regular],
        }
    }

    /// Sets the sections to read.
    #[must_use]
    pub fn with_sections(mut self, sections: impl IntoIterator<Item = Section>) -> Parser {
        self.sections = sections.into_iter().collect();
        self
    }

    /// The direction of the pages this parser reads.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The sections this parser reads.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Parses `html` into translations, skipping entries that are malformed.
    ///
    /// Each skipped entry is logged as a warning. A page without results gives an empty list.
    #[must_use]
    pub fn parse(&self, html: &str) -> Vec<Translation> {
        let document = Html::parse_document(html);
        let groups = self.row_groups(&document);
        let mut translations = Vec::with_capacity(groups.len());

        for group in &groups {
            match Translation::from_rows(group) {
                Ok(translation) => translations.push(translation),
                Err(err) => {
                    let row_id = group.first().and_then(|row| row.attr("id"));

                    warn!(%err, ?row_id, "skipping malformed entry");
                }
            }
        }

        translations
    }

    /// Parses `html` into translations, failing on the first malformed entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEntry`] if any row group cannot be turned into a translation.
    pub fn try_parse(&self, html: &str) -> Result<Vec<Translation>, Error> {
        let document = Html::parse_document(html);

        self.row_groups(&document)
            .iter()
            .map(|group| Translation::from_rows(group))
            .collect()
    }

    fn row_groups<'a>(&self, document: &'a Html) -> Vec<Vec<ElementRef<'a>>> {
        let tables = select_section_tables(document, &self.sections);
        let groups: Vec<_> = tables
            .into_iter()
            .flat_map(|table| group_rows(table, self.direction))
            .collect();

        debug!(
            direction = %self.direction,
            num_groups = groups.len(),
            "grouped result rows"
        );

        groups
    }
}

/// Builds a single translation from a group of rows.
///
/// This is equivalent to calling [`Translation::from_rows`].
///
/// # Errors
///
/// Returns [`Error::MalformedEntry`] if the group cannot be turned into a translation.
pub fn build_translation(rows: &[ElementRef<'_>]) -> Result<Translation, Error> {
    Translation::from_rows(rows)
}

/// Parses the principal translations of a results page, skipping malformed entries.
///
/// This is equivalent to `Parser::new(direction).parse(html)`.
#[must_use]
pub fn parse_document(html: &str, direction: Direction) -> Vec<Translation> {
    Parser::new(direction).parse(html)
}

/// Parses the principal translations of a results page, failing on the first malformed entry.
///
/// # Errors
///
/// Returns [`Error::MalformedEntry`] if any entry on the page is malformed.
pub fn try_parse_document(html: &str, direction: Direction) -> Result<Vec<Translation>, Error> {
    Parser::new(direction).try_parse(html)
}
