/// Broad category of an [`Error`].
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum ErrorKind {
    /// The caller supplied a value that violates a precondition.
    InvalidArgument,
    /// An index was outside the range allowed by the operation.
    Index,
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid delimiter `{0}`: expected exactly one character other than `\\`")]
    InvalidDelimiter(String),
    #[error("Component `{component}` is not properly masked for delimiter `{delimiter}`")]
    NotProperlyMasked { component: String, delimiter: char },
    #[error("Cannot concat a name delimited by `{right}` onto a name delimited by `{left}`")]
    DelimiterMismatch { left: char, right: char },
    #[error("Index {index} out of range, expected 0..{bound}")]
    IndexOutOfRange { index: usize, bound: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IndexOutOfRange { .. } => ErrorKind::Index,
            Error::InvalidDelimiter(_)
            | Error::NotProperlyMasked { .. }
            | Error::DelimiterMismatch { .. } => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Error, ErrorKind};

    #[rstest]
    #[case(Error::InvalidDelimiter("ab".into()), ErrorKind::InvalidArgument)]
    #[case(
        Error::NotProperlyMasked { component: "a.b".into(), delimiter: '.' },
        ErrorKind::InvalidArgument
    )]
    #[case(Error::DelimiterMismatch { left: '.', right: ',' }, ErrorKind::InvalidArgument)]
    #[case(Error::IndexOutOfRange { index: 3, bound: 2 }, ErrorKind::Index)]
    fn test_error_kind(#[case] error: Error, #[case] expected: ErrorKind) {
        assert_eq!(error.kind(), expected);
    }

    #[test]
    fn test_error_message() {
        let error = Error::IndexOutOfRange { index: 5, bound: 4 };
        assert_eq!(error.to_string(), "Index 5 out of range, expected 0..4");
        let error = Error::InvalidDelimiter("\\".into());
        assert_eq!(
            error.to_string(),
            "Invalid delimiter `\\`: expected exactly one character other than `\\`"
        );
    }
}
