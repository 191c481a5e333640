//! Conversion between masked and unmasked component text.
//!
//! A component is *masked* for a delimiter when every literal
//! [`ESCAPE_CHARACTER`] is doubled and every literal delimiter is prefixed
//! with one escape character. Masked components can be joined with the
//! delimiter and split again without losing information.

use crate::delimiter::{Delimiter, ESCAPE_CHARACTER};

/// Returns `true` if `s` contains the escape character or `delimiter`.
#[inline]
fn contains_special(s: &str, delimiter: Delimiter) -> bool {
    let bytes = s.as_bytes();
    match delimiter.as_ascii() {
        Some(d) => memchr::memchr2(ESCAPE_CHARACTER as u8, d, bytes).is_some(),
        None => {
            memchr::memchr(ESCAPE_CHARACTER as u8, bytes).is_some() || s.contains(*delimiter)
        }
    }
}

/// Masks `unmasked` for `delimiter`.
pub fn mask(unmasked: &str, delimiter: Delimiter) -> String {
    if !contains_special(unmasked, delimiter) {
        return unmasked.to_string();
    }
    let mut masked = String::with_capacity(unmasked.len() + 4);
    for ch in unmasked.chars() {
        if ch == ESCAPE_CHARACTER || delimiter == ch {
            masked.push(ESCAPE_CHARACTER);
        }
        masked.push(ch);
    }
    masked
}

/// Removes one level of masking from `masked`.
///
/// An escape character takes the following character verbatim. A dangling
/// escape character at the end of the input is kept literally.
pub fn unmask(masked: &str, _delimiter: Delimiter) -> String {
    if memchr::memchr(ESCAPE_CHARACTER as u8, masked.as_bytes()).is_none() {
        return masked.to_string();
    }
    let mut unmasked = String::with_capacity(masked.len());
    let mut escaping = false;
    for ch in masked.chars() {
        if escaping {
            unmasked.push(ch);
            escaping = false;
        } else if ch == ESCAPE_CHARACTER {
            escaping = true;
        } else {
            unmasked.push(ch);
        }
    }
    if escaping {
        unmasked.push(ESCAPE_CHARACTER);
    }
    unmasked
}

/// Splits a masked data string at every unescaped `delimiter`.
///
/// The returned components are still masked. The result is never empty: an
/// empty input yields a single empty component.
pub fn split(masked: &str, delimiter: Delimiter) -> Vec<String> {
    let mut components = vec![];
    let mut current = String::new();
    let mut escaping = false;
    for ch in masked.chars() {
        if escaping {
            current.push(ch);
            escaping = false;
        } else if ch == ESCAPE_CHARACTER {
            current.push(ch);
            escaping = true;
        } else if delimiter == ch {
            components.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    // A dangling escape has already been copied into `current`.
    components.push(current);
    components
}

/// Joins masked components with `delimiter`.
pub fn join<I, S>(components: I, delimiter: Delimiter) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, component) in components.into_iter().enumerate() {
        if i > 0 {
            joined.push(*delimiter);
        }
        joined.push_str(component.as_ref());
    }
    joined
}

/// Converts a component masked for `from` into one masked for `to`.
pub fn remask(component: &str, from: Delimiter, to: Delimiter) -> String {
    mask(&unmask(component, from), to)
}

/// Checks that every escape character in `component` is followed by another
/// character and that no delimiter appears unescaped.
pub fn is_properly_masked(component: &str, delimiter: Delimiter) -> bool {
    let mut escaping = false;
    for ch in component.chars() {
        if escaping {
            escaping = false;
        } else if ch == ESCAPE_CHARACTER {
            escaping = true;
        } else if delimiter == ch {
            return false;
        }
    }
    !escaping
}
