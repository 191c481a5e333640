use std::str::FromStr;

use derive_more::{Deref, Display};

use crate::error::Error;

/// The character used to mask the delimiter and itself inside a component.
pub const ESCAPE_CHARACTER: char = '\\';

pub const DEFAULT_DELIMITER: char = '.';

/// A component separator.
///
/// A `Delimiter` is always exactly one character and never
/// [`ESCAPE_CHARACTER`], so every value of this type is safe to hand to the
/// masking codec.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deref, Display)]
pub struct Delimiter(char);

impl Delimiter {
    pub fn new(delimiter: char) -> crate::Result<Self> {
        if delimiter == ESCAPE_CHARACTER {
            tracing::debug!("rejected escape character as delimiter");
            return Err(Error::InvalidDelimiter(delimiter.to_string()));
        }
        Ok(Self(delimiter))
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// Returns the delimiter as a byte if it is ASCII.
    pub(crate) fn as_ascii(&self) -> Option<u8> {
        self.0.is_ascii().then_some(self.0 as u8)
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(DEFAULT_DELIMITER)
    }
}

impl TryFrom<char> for Delimiter {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => {
                tracing::debug!("rejected delimiter `{}`", value);
                Err(Error::InvalidDelimiter(value.to_string()))
            }
        }
    }
}

impl FromStr for Delimiter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<Delimiter> for char {
    fn from(value: Delimiter) -> Self {
        value.0
    }
}

impl PartialEq<char> for Delimiter {
    fn eq(&self, other: &char) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DEFAULT_DELIMITER, Delimiter};
    use crate::error::Error;

    #[test]
    fn test_default_delimiter() {
        assert_eq!(Delimiter::default(), DEFAULT_DELIMITER);
        assert_eq!(Delimiter::default().to_string(), ".");
    }

    #[rstest]
    #[case(".", '.')]
    #[case("/", '/')]
    #[case("#", '#')]
    #[case("你", '你')]
    fn test_valid_delimiter(#[case] input: &str, #[case] expected: char) -> crate::Result<()> {
        let delimiter: Delimiter = input.parse()?;
        assert_eq!(delimiter.as_char(), expected);
        assert_eq!(*delimiter, expected);
        Ok(())
    }

    #[rstest]
    #[case("")]
    #[case("..")]
    #[case("\\")]
    #[case("ab")]
    fn test_invalid_delimiter(#[case] input: &str) {
        let result = Delimiter::try_from(input);
        assert_eq!(result, Err(Error::InvalidDelimiter(input.to_string())));
    }

    #[test]
    fn test_escape_character_rejected() {
        assert!(Delimiter::new('\\').is_err());
        assert!(Delimiter::try_from('/').is_ok());
    }
}
