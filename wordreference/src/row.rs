//! Classification of result table rows by their shape.

use scraper::ElementRef;

use crate::{Error, Malformed};

/// The shape of a single result table row.
#[derive(Debug, Clone, Copy)]
pub enum Row<'a> {
    /// A translation row with a source, a definition and a target cell.
    Full {
        /// The first cell, which holds the headword on the row that starts an entry.
        source: ElementRef<'a>,
        /// The second cell, holding the definition or a sense label.
        definition: ElementRef<'a>,
        /// The third cell, holding the translated term.
        target: ElementRef<'a>,
    },
    /// A two-cell row, used for example sentences and compound phrases.
    Phrase,
    /// A single cell spanning the row, used for free-text notes.
    Note,
}

impl<'a> Row<'a> {
    /// Classifies `row` by counting its direct `<td>` children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEntry`] if the row has no cells or more than three.
    pub fn classify(row: ElementRef<'a>) -> Result<Row<'a>, Error> {
        let cells: Vec<ElementRef<'a>> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|cell| cell.value().name() == "td")
            .collect();

        match cells.as_slice() {
            &[source, definition, target] => Ok(Row::Full {
                source,
                definition,
                target,
            }),
            [_, _] => Ok(Row::Phrase),
            [_] => Ok(Row::Note),
            other => Err(Malformed::UnrecognizedRowShape(other.len()).into()),
        }
    }
}

/// Returns whether `elem` has `class` among its classes.
pub(crate) fn has_class(elem: ElementRef<'_>, class: &str) -> bool {
    elem.value().classes().any(|name| name == class)
}
