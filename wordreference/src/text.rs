//! Text extraction and cleanup helpers.
//!
//! The page markup interleaves the text we want with labels and tooltips, so the helpers here read
//! text nodes selectively instead of mutating the document to strip the unwanted parts.

use scraper::ElementRef;

/// Returns the concatenated text of all descendant text nodes of `elem`.
pub(crate) fn element_text(elem: ElementRef<'_>) -> String {
    elem.text().collect()
}

/// Returns the concatenated text of `elem`, skipping the subtrees rooted at any of the `excluded`
/// elements.
pub(crate) fn text_excluding(elem: ElementRef<'_>, excluded: &[ElementRef<'_>]) -> String {
    let mut text = String::new();

    collect_text(elem, excluded, &mut text);

    text
}

fn collect_text(elem: ElementRef<'_>, excluded: &[ElementRef<'_>], out: &mut String) {
    for child in elem.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child)
            && !excluded.iter().any(|skip| skip.id() == child.id())
        {
            collect_text(child, excluded, out);
        }
    }
}

/// Returns only the text nodes that are direct children of `elem`.
///
/// Grammatical labels carry their explanation in a nested tooltip, e.g.
/// `<em class="POS2">adj<span>adjective: describes a noun</span></em>`, where only `adj` is wanted.
pub(crate) fn topmost_text(elem: ElementRef<'_>) -> String {
    elem.children()
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect()
}

/// Normalizes a fragment of extracted text.
///
/// Runs of whitespace (including non-breaking spaces) become a single space, the result is trimmed,
/// and a pair of parentheses enclosing the whole fragment is removed, repeatedly, so that
/// `" ((slightly cold)) "` becomes `"slightly cold"`.
///
/// The result is a fixed point: sanitizing it again returns it unchanged.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut text = collapsed.as_str();

    while let Some(inner) = strip_enclosing_parens(text) {
        text = inner.trim();
    }

    text.to_owned()
}

/// Returns the text between the parentheses if `text` is entirely wrapped by one matching pair.
fn strip_enclosing_parens(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let mut depth = 0usize;

    // The opening paren must not be closed before the final character, as in `(a) (b)`.
    for ch in inner.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }

    (depth == 0).then_some(inner)
}
