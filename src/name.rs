use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::Result;
use crate::codec::{is_properly_masked, join, mask, remask, split, unmask};
use crate::delimiter::Delimiter;
use crate::error::Error;

/// A hierarchical name: an ordered sequence of components and the delimiter
/// that separates them.
///
/// `Name` is a persistent value. Operations that change the component list
/// return a new `Name` and leave the receiver as it was, so a `Name` can be
/// shared freely between readers.
///
/// Components are stored masked for the name's own delimiter, in canonical
/// form: only the escape character and the delimiter carry an escape. Two
/// names are therefore equal exactly when they have the same delimiter and
/// the same unmasked components.
///
/// ```
/// use masked_name::{Delimiter, Name};
///
/// let name = Name::new(["oss", "cs", "fau", "de"], Delimiter::default()).unwrap();
/// assert_eq!(name.no_components(), 4);
/// assert_eq!(name.as_data_string(), "oss.cs.fau.de");
///
/// let name = Name::parse(r"Oh\.\.\.", Delimiter::default());
/// assert_eq!(name.component(0).unwrap(), "Oh...");
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Name {
    delimiter: Delimiter,
    components: Vec<String>,
}

impl Name {
    /// Creates a name from components that are already masked for
    /// `delimiter`.
    pub fn new<I, S>(components: I, delimiter: Delimiter) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let components = components
            .into_iter()
            .map(|c| canonical(c.as_ref(), delimiter))
            .collect::<Result<Vec<_>>>()?;
        tracing::trace!(
            "new name with {} components delimited by `{}`",
            components.len(),
            delimiter
        );
        Ok(Self {
            delimiter,
            components,
        })
    }

    /// Creates a name from raw component text, masking every component.
    pub fn from_unmasked<I, S>(components: I, delimiter: Delimiter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let components = components
            .into_iter()
            .map(|c| mask(c.as_ref(), delimiter))
            .collect();
        Self {
            delimiter,
            components,
        }
    }

    /// Parses a data string.
    ///
    /// Parsing never fails and always yields at least one component: `""`
    /// is a name with a single empty component. A dangling escape character
    /// at the end of `data` is taken literally.
    pub fn parse(data: &str, delimiter: Delimiter) -> Self {
        let components: Vec<String> = split(data, delimiter)
            .iter()
            .map(|c| remask(c, delimiter, delimiter))
            .collect();
        tracing::trace!(
            "parsed `{}` into {} components delimited by `{}`",
            data,
            components.len(),
            delimiter
        );
        Self {
            delimiter,
            components,
        }
    }

    /// The name without any component.
    pub fn empty(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            components: vec![],
        }
    }
}

impl Name {
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn no_components(&self) -> usize {
        self.components.len()
    }

    pub fn len(&self) -> usize {
        self.no_components()
    }

    pub fn is_empty(&self) -> bool {
        self.no_components() == 0
    }

    /// Returns the unmasked component at `index`.
    pub fn component(&self, index: usize) -> Result<String> {
        let masked = self.masked_component(index)?;
        Ok(unmask(masked, self.delimiter))
    }

    /// Returns the component at `index` as stored, masked for this name's
    /// delimiter.
    pub fn masked_component(&self, index: usize) -> Result<&str> {
        self.check_index(index)?;
        Ok(&self.components[index])
    }

    pub fn masked_components(&self) -> &[String] {
        &self.components
    }

    /// Iterates over the unmasked components.
    pub fn components(&self) -> impl Iterator<Item = String> + '_ {
        self.components.iter().map(|c| unmask(c, self.delimiter))
    }

    /// Human readable form using the name's own delimiter.
    ///
    /// Components are not masked, so the result can't always be parsed
    /// back. Use [`Name::as_data_string`] for that.
    pub fn as_string(&self) -> String {
        self.as_string_with(self.delimiter)
    }

    /// Human readable form with the components joined by `delimiter`.
    pub fn as_string_with(&self, delimiter: Delimiter) -> String {
        join(self.components(), delimiter)
    }

    /// Machine readable form. [`Name::parse`] with the same delimiter turns
    /// it back into an equal name.
    pub fn as_data_string(&self) -> String {
        join(&self.components, self.delimiter)
    }

    /// Machine readable form, masked for and joined by `delimiter`.
    pub fn as_data_string_for(&self, delimiter: Delimiter) -> String {
        if delimiter == self.delimiter {
            return self.as_data_string();
        }
        join(
            self.components
                .iter()
                .map(|c| remask(c, self.delimiter, delimiter)),
            delimiter,
        )
    }

    /// The same components, masked for `delimiter` instead.
    pub fn with_delimiter(&self, delimiter: Delimiter) -> Self {
        let components = self
            .components
            .iter()
            .map(|c| remask(c, self.delimiter, delimiter))
            .collect();
        Self {
            delimiter,
            components,
        }
    }

    pub fn is_equal(&self, other: &Name) -> bool {
        self == other
    }

    /// A 32-bit string hash of the data form (`h * 31 + unit` over its UTF-16
    /// code units). Equal names have equal hash codes.
    pub fn hash_code(&self) -> i32 {
        self.as_data_string()
            .encode_utf16()
            .fold(0i32, |hash, unit| {
                hash.wrapping_mul(31).wrapping_add(i32::from(unit))
            })
    }
}

impl Name {
    /// Replaces the component at `index` with the masked `component`.
    pub fn set_component(&self, index: usize, component: &str) -> Result<Self> {
        self.check_index(index)?;
        let component = canonical(component, self.delimiter)?;
        let mut components = self.components.clone();
        components[index] = component;
        let result = self.with_components(components);
        debug_assert_eq!(
            result.no_components(),
            self.no_components(),
            "set_component changed the number of components. This is a bug."
        );
        Ok(result)
    }

    /// Inserts the masked `component` before `index`. `index` may equal the
    /// number of components.
    pub fn insert(&self, index: usize, component: &str) -> Result<Self> {
        self.check_insert_index(index)?;
        let component = canonical(component, self.delimiter)?;
        let mut components = Vec::with_capacity(self.components.len() + 1);
        components.extend_from_slice(&self.components[..index]);
        components.push(component);
        components.extend_from_slice(&self.components[index..]);
        let result = self.with_components(components);
        debug_assert_eq!(
            result.no_components(),
            self.no_components() + 1,
            "insert did not add exactly one component. This is a bug."
        );
        Ok(result)
    }

    pub fn append(&self, component: &str) -> Result<Self> {
        self.insert(self.no_components(), component)
    }

    pub fn remove(&self, index: usize) -> Result<Self> {
        self.check_index(index)?;
        let mut components = self.components.clone();
        components.remove(index);
        let result = self.with_components(components);
        debug_assert_eq!(
            result.no_components() + 1,
            self.no_components(),
            "remove did not drop exactly one component. This is a bug."
        );
        Ok(result)
    }

    /// Appends all components of `other`, which must use the same delimiter.
    pub fn concat(&self, other: &Name) -> Result<Self> {
        if other.delimiter != self.delimiter {
            tracing::debug!(
                "refusing to concat `{}` delimited name onto `{}` delimited name",
                other.delimiter,
                self.delimiter
            );
            return Err(Error::DelimiterMismatch {
                left: self.delimiter.as_char(),
                right: other.delimiter.as_char(),
            });
        }
        let mut components = Vec::with_capacity(self.components.len() + other.components.len());
        components.extend_from_slice(&self.components);
        components.extend_from_slice(&other.components);
        let result = self.with_components(components);
        debug_assert_eq!(
            result.no_components(),
            self.no_components() + other.no_components(),
            "concat lost or duplicated components. This is a bug."
        );
        Ok(result)
    }

    fn with_components(&self, components: Vec<String>) -> Self {
        tracing::trace!(
            "{} components -> {} components",
            self.components.len(),
            components.len()
        );
        Self {
            delimiter: self.delimiter,
            components,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let bound = self.no_components();
        if index >= bound {
            tracing::debug!("index {} out of range 0..{}", index, bound);
            return Err(Error::IndexOutOfRange { index, bound });
        }
        Ok(())
    }

    fn check_insert_index(&self, index: usize) -> Result<()> {
        let bound = self.no_components() + 1;
        if index >= bound {
            tracing::debug!("insert index {} out of range 0..{}", index, bound);
            return Err(Error::IndexOutOfRange { index, bound });
        }
        Ok(())
    }
}

/// Validates a masked component and brings it into canonical masked form.
fn canonical(component: &str, delimiter: Delimiter) -> Result<String> {
    if !is_properly_masked(component, delimiter) {
        tracing::debug!(
            "component `{}` is not properly masked for `{}`",
            component,
            delimiter
        );
        return Err(Error::NotProperlyMasked {
            component: component.to_string(),
            delimiter: delimiter.as_char(),
        });
    }
    Ok(remask(component, delimiter, delimiter))
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_data_string())
    }
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::parse(s, Delimiter::default()))
    }
}
