//! Structured types
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::row::{Row, has_class};
use crate::text::{element_text, sanitize, text_excluding, topmost_text};
use crate::{Error, Malformed};

/// The class that marks the cell holding the source headword.
pub(crate) const SOURCE_CLASS: &str = "FrWrd";
/// The class that marks the cell holding a target term.
pub(crate) const TARGET_CLASS: &str = "ToWrd";

static HEADWORD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("strong").expect("headword selector"));
static LABEL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("em").expect("label selector"));
static SENSE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.dsense").expect("sense selector"));

/// The word or phrase being translated.
///
/// # HTML Source
/// Parsed from the first and second cell of the row that carries `<td class="FrWrd">`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FromWord {
    /// The headword itself
    ///
    /// Examples: `cool`, `hola`
    ///
    /// Parsed from the top-level text of the `<strong>` element in the source cell, which leaves
    /// out the conjugation link verbs carry there
    pub text: String,

    /// Short grammatical tag, e.g. `adj`, `interj`, `vtr`
    ///
    /// Parsed from the top-level text of the `<em>` element in the source cell, empty if absent
    pub part_of_speech: String,

    /// Gloss that tells this sense apart from the other senses of the headword
    ///
    /// Examples: `slightly cold`, `greeting`
    ///
    /// Parsed from the second cell with the qualifier excluded and outer parentheses removed
    pub definition: String,

    /// Register or usage tag, e.g. `informal`
    ///
    /// Parsed from a leading `<i>` element in the second cell, empty if absent
    pub qualifier: String,
}

/// One target-language rendering of a headword sense.
///
/// # HTML Source
/// Parsed from the second and third cell of every full translation row
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToWord {
    /// The translated term
    ///
    /// Examples: `fresco/a`, `hello`
    ///
    /// Parsed from `<td class="ToWrd">` with its labels excluded
    pub text: String,

    /// Short grammatical tag for the translated term
    ///
    /// Parsed from the top-level text of the `<em>` element in the target cell, empty if absent
    pub part_of_speech: String,

    /// Label telling which sense of the headword this term renders
    ///
    /// Parsed from `<span class="dsense">` in the second cell, empty if absent
    pub sense: String,
}

/// A headword together with its translations.
///
/// # HTML Source
/// Parsed from a group of consecutive `<tr>` elements in a `<table class="WRD">`, starting at a
/// row whose `id` carries the dictionary prefix
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Translation {
    /// The headword, taken from the first row of the group
    pub source: FromWord,
    /// The translated terms, one per full translation row, in row order
    pub targets: Vec<ToWord>,
}

impl FromWord {
    /// Parses the headword from the source and definition cells of a full translation row.
    pub(crate) fn from_cells(
        source: ElementRef<'_>,
        definition: ElementRef<'_>,
    ) -> Result<FromWord, Error> {
        let text = source
            .select(&HEADWORD_SELECTOR)
            .next()
            .map(|elem| sanitize(&topmost_text(elem)))
            .filter(|text| !text.is_empty())
            .ok_or(Malformed::EmptyHeadword)?;
        let part_of_speech = source
            .select(&LABEL_SELECTOR)
            .next()
            .map(|elem| sanitize(&topmost_text(elem)))
            .unwrap_or_default();
        let qualifier_elem = leading_italic(definition);
        let qualifier = qualifier_elem
            .map(|elem| sanitize(&element_text(elem)))
            .unwrap_or_default();
        let excluded: Vec<ElementRef<'_>> = qualifier_elem.into_iter().collect();
        let definition = sanitize(&text_excluding(definition, &excluded));

        Ok(FromWord {
            text,
            part_of_speech,
            definition,
            qualifier,
        })
    }
}

impl ToWord {
    /// Parses a target term from the definition and target cells of a full translation row.
    pub(crate) fn from_cells(
        definition: ElementRef<'_>,
        target: ElementRef<'_>,
    ) -> Result<ToWord, Error> {
        if !has_class(target, TARGET_CLASS) {
            return Err(Malformed::MissingTargetMarker.into());
        }

        let sense = definition
            .select(&SENSE_SELECTOR)
            .next()
            .map(|elem| sanitize(&element_text(elem)))
            .unwrap_or_default();
        let labels: Vec<ElementRef<'_>> = target.select(&LABEL_SELECTOR).collect();
        let part_of_speech = labels
            .first()
            .map(|elem| sanitize(&topmost_text(*elem)))
            .unwrap_or_default();
        let text = sanitize(&text_excluding(target, &labels));

        if text.is_empty() {
            return Err(Malformed::EmptyTarget.into());
        }

        Ok(ToWord {
            text,
            part_of_speech,
            sense,
        })
    }
}

impl Translation {
    /// Builds a translation from a group of table rows.
    ///
    /// The first full row whose source cell is marked `FrWrd` supplies the headword, and every
    /// full row (that one included) supplies one target term. Phrase and note rows are
    /// recognized but contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEntry`] if a row has an unrecognized shape, a full row lacks a
    /// proper target cell, or no row supplies a headword.
    pub fn from_rows(rows: &[ElementRef<'_>]) -> Result<Translation, Error> {
        let mut source = None;
        let mut targets = Vec::with_capacity(rows.len());

        for row in rows {
            match Row::classify(*row)? {
                Row::Full {
                    source: source_cell,
                    definition,
                    target,
                } => {
                    if source.is_none() && has_class(source_cell, SOURCE_CLASS) {
                        source = Some(FromWord::from_cells(source_cell, definition)?);
                    }

                    targets.push(ToWord::from_cells(definition, target)?);
                }
                // TODO: phrase rows hold compound forms of the headword, which should be merged
                // into the translation instead of being dropped.
                Row::Phrase | Row::Note => {}
            }
        }

        let source = source.ok_or(Malformed::MissingHeadword)?;

        Ok(Translation { source, targets })
    }
}

/// Returns the `<i>` element that opens `cell`, ignoring whitespace before it.
fn leading_italic(cell: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let first = cell.children().find(|node| {
        node.value()
            .as_text()
            .is_none_or(|text| !text.trim().is_empty())
    })?;

    ElementRef::wrap(first).filter(|elem| elem.value().name() == "i")
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn rows(document: &Html) -> Vec<ElementRef<'_>> {
        let selector = Selector::parse("tr").unwrap();

        document.select(&selector).collect()
    }

    fn table(body: &str) -> Html {
        Html::parse_document(&format!("<table class='WRD'>{body}</table>"))
    }

    #[test]
    fn test_headword_row() {
        let document = table(
            "<tr id='enes:2140'>\
               <td class='FrWrd'><strong>cool</strong> <em class='tooltip POS2'>adj<span><i>adjective</i>: describes a noun</span></em></td>\
               <td> <i>informal</i> (fashionable) </td>\
               <td class='ToWrd'>guay <em class='tooltip POS2'>adj<span><i>adjetivo</i></span></em></td>\
             </tr>",
        );
        let translation = Translation::from_rows(&rows(&document)).unwrap();

        assert_eq!(
            translation.source,
            FromWord {
                text: "cool".to_string(),
                part_of_speech: "adj".to_string(),
                definition: "fashionable".to_string(),
                qualifier: "informal".to_string(),
            }
        );
        assert_eq!(
            translation.targets,
            vec![ToWord {
                text: "guay".to_string(),
                part_of_speech: "adj".to_string(),
                sense: String::new(),
            }]
        );
    }

    #[test]
    fn test_qualifier_does_not_leak_into_definition() {
        let document = table(
            "<tr id='esen:1'>\
               <td class='FrWrd'><strong>guau</strong></td>\
               <td><i>coloquial</i> (asombro)</td>\
               <td class='ToWrd'>wow</td>\
             </tr>",
        );
        let translation = Translation::from_rows(&rows(&document)).unwrap();

        assert_eq!(translation.source.qualifier, "coloquial");
        assert_eq!(translation.source.definition, "asombro");
        assert_eq!(translation.source.part_of_speech, "");
    }

    #[test]
    fn test_italic_after_text_is_not_a_qualifier() {
        let document = table(
            "<tr id='enes:1'>\
               <td class='FrWrd'><strong>ball</strong></td>\
               <td>(sphere, <i>esp.</i> for games)</td>\
               <td class='ToWrd'>pelota</td>\
             </tr>",
        );
        let translation = Translation::from_rows(&rows(&document)).unwrap();

        assert_eq!(translation.source.qualifier, "");
        assert_eq!(translation.source.definition, "sphere, esp. for games");
    }

    #[test]
    fn test_continuation_rows_add_targets() {
        let document = table(
            "<tr id='enes:2140'>\
               <td class='FrWrd'><strong>cool</strong> <em>adj</em></td>\
               <td>(slightly cold)</td>\
               <td class='ToWrd'>fresco/a <em>adj</em></td>\
             </tr>\
             <tr>\
               <td>&nbsp;</td>\
               <td class='To2'>(<span class='dsense'><i>temperatura</i></span>)</td>\
               <td class='ToWrd'>frío/a <em>adj</em></td>\
             </tr>\
             <tr><td>&nbsp;</td><td colspan='2' class='FrEx'>The weather is cool today.</td></tr>\
             <tr><td colspan='3' class='notePubl'>Note: regional usage varies.</td></tr>",
        );
        let translation = Translation::from_rows(&rows(&document)).unwrap();

        assert_eq!(translation.source.text, "cool");
        assert_eq!(translation.targets.len(), 2);
        assert_eq!(translation.targets[0].text, "fresco/a");
        assert_eq!(translation.targets[0].sense, "");
        assert_eq!(translation.targets[1].text, "frío/a");
        assert_eq!(translation.targets[1].sense, "temperatura");
        assert_eq!(translation.targets[1].part_of_speech, "adj");
    }

    #[test]
    fn test_headword_excludes_conjugation_link() {
        let document = table(
            "<tr id='enes:1'>\
               <td class='FrWrd'><strong>cool<a class='conjugate' href='/conj/enverbs.aspx?v=cool'>⇒</a></strong> <em>vtr</em></td>\
               <td>(make colder)</td>\
               <td class='ToWrd'>enfriar <em>vtr</em></td>\
             </tr>",
        );
        let translation = Translation::from_rows(&rows(&document)).unwrap();

        assert_eq!(translation.source.text, "cool");
        assert_eq!(translation.source.part_of_speech, "vtr");
    }

    #[test]
    fn test_missing_headword() {
        let document = table(
            "<tr><td>&nbsp;</td><td>(sense)</td><td class='ToWrd'>uno</td></tr>\
             <tr><td>&nbsp;</td><td>(sense)</td><td class='ToWrd'>dos</td></tr>",
        );
        let result = Translation::from_rows(&rows(&document));

        assert!(matches!(
            result,
            Err(Error::MalformedEntry(Malformed::MissingHeadword))
        ));
    }

    #[test]
    fn test_missing_target_marker() {
        let document = table(
            "<tr id='enes:1'><td class='FrWrd'><strong>cool</strong></td><td></td><td>fresco</td></tr>",
        );
        let result = Translation::from_rows(&rows(&document));

        assert!(matches!(
            result,
            Err(Error::MalformedEntry(Malformed::MissingTargetMarker))
        ));
    }

    #[test]
    fn test_empty_target() {
        let document = table(
            "<tr id='enes:1'><td class='FrWrd'><strong>cool</strong></td><td></td><td class='ToWrd'> <em>adj</em> </td></tr>",
        );
        let result = Translation::from_rows(&rows(&document));

        assert!(matches!(
            result,
            Err(Error::MalformedEntry(Malformed::EmptyTarget))
        ));
    }

    #[test]
    fn test_empty_headword() {
        let document = table(
            "<tr id='enes:1'><td class='FrWrd'><em>adj</em></td><td></td><td class='ToWrd'>fresco</td></tr>",
        );
        let result = Translation::from_rows(&rows(&document));

        assert!(matches!(
            result,
            Err(Error::MalformedEntry(Malformed::EmptyHeadword))
        ));
    }

    #[test]
    fn test_unrecognized_row_shape() {
        let document = table(
            "<tr id='enes:1'><td class='FrWrd'><strong>cool</strong></td><td></td><td class='ToWrd'>fresco</td></tr>\
             <tr><td>a</td><td>b</td><td>c</td><td>d</td></tr>",
        );
        let result = Translation::from_rows(&rows(&document));

        assert!(matches!(
            result,
            Err(Error::MalformedEntry(Malformed::UnrecognizedRowShape(4)))
        ));
    }
}
