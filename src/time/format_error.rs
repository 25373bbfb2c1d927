use std::num::ParseIntError;

use thiserror::Error;

use crate::utils::StrExt;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormatError {
    #[error("expected {expected} parts separated by \"{separator}\" in \"{input}\"")]
    Segments {
        input: String,
        separator: &'static str,
        expected: usize,
    },
    #[error("\"{input}\" is not a valid number")]
    Number {
        input: String,
        source: ParseIntError,
    },
}

pub(crate) fn split_segments<'a, const N: usize>(
    input: &'a str,
    separator: &'static str,
) -> Result<[&'a str; N], FormatError> {
    input
        .split_exact::<N>(separator)
        .ok_or_else(|| FormatError::Segments {
            input: input.to_string(),
            separator,
            expected: N,
        })
}

pub(crate) fn parse_number(input: &str) -> Result<u64, FormatError> {
    input.parse().map_err(|source| FormatError::Number {
        input: input.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments::<2>("10:30", ":"), Ok(["10", "30"]));
        assert_eq!(
            split_segments::<2>("1030", ":"),
            Err(FormatError::Segments {
                input: "1030".to_string(),
                separator: ":",
                expected: 2,
            })
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("07"), Ok(7));
        assert_eq!(parse_number("125"), Ok(125));

        for input in ["", "x", "1.5", "-3", "3 "] {
            assert!(
                matches!(parse_number(input), Err(FormatError::Number { .. })),
                "{:?} should not be a number",
                input
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FormatError::Segments {
                input: "3 PM".to_string(),
                separator: ":",
                expected: 2,
            }
            .to_string(),
            "expected 2 parts separated by \":\" in \"3 PM\"".to_string()
        );
    }
}
