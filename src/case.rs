//! Conversion of plain text into identifier-style cases.

use std::str::FromStr;

use log::{debug, trace};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::text::{is_string_empty, upper_first};
use crate::{Error, Result};

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum TextCase {
    /// `helloWorld`
    Camel,

    /// `hello-world`
    Kebab,

    /// `hello_world`
    Snake,
}

impl TextCase {
    /// Parse one of the names `camel`, `kebab` or `snake`. Names are case sensitive.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| {
            debug!("text case: unknown name {name:?}");
            Error::UnknownTextCase {
                name: name.to_owned(),
                expected: Self::names(),
            }
        })
    }

    /// All case names separated by commas.
    pub fn names() -> String {
        Self::iter()
            .map(|case| case.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Lowercase the text and join its words in this case.
    ///
    /// Only whitespace separates words so hyphens and underscores already in
    /// the text are kept inside the words.
    pub fn apply(&self, text: &str) -> Result<String> {
        if is_string_empty(text) {
            return Err(Error::EmptyInput("text"));
        }

        let lower = text.trim().to_lowercase();
        let words = lower.split_whitespace();
        let converted = match self {
            TextCase::Camel => words
                .enumerate()
                .map(|(index, word)| {
                    if index == 0 {
                        word.to_owned()
                    } else {
                        upper_first(word)
                    }
                })
                .collect::<String>(),
            TextCase::Kebab => words.collect::<Vec<_>>().join("-"),
            TextCase::Snake => words.collect::<Vec<_>>().join("_"),
        };
        trace!("text case: {text:?} to {self} {converted:?}");
        Ok(converted)
    }
}

/// Convert the text to the case named `camel`, `kebab` or `snake`.
///
/// The text is checked before the case name.
pub fn change_text_case(text: &str, case_name: &str) -> Result<String> {
    if is_string_empty(text) {
        debug!("text case: empty text");
        return Err(Error::EmptyInput("text"));
    }
    TextCase::from_name(case_name)?.apply(text)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cases() {
        assert_eq!(change_text_case("Hello World", "camel").unwrap(), "helloWorld");
        assert_eq!(change_text_case("Hello World", "kebab").unwrap(), "hello-world");
        assert_eq!(change_text_case("Hello World", "snake").unwrap(), "hello_world");
    }

    #[test]
    fn extra_whitespace() {
        assert_eq!(
            change_text_case("  The QUICK\tbrown  fox ", "camel").unwrap(),
            "theQuickBrownFox"
        );
        assert_eq!(
            change_text_case("  The QUICK\tbrown  fox ", "snake").unwrap(),
            "the_quick_brown_fox"
        );
    }

    #[test]
    fn separators_are_not_whitespace() {
        let kebab = change_text_case("Hello Big World", "kebab").unwrap();
        assert_eq!(kebab, "hello-big-world");
        assert_eq!(change_text_case(&kebab, "kebab").unwrap(), kebab);
        assert_eq!(change_text_case(&kebab, "camel").unwrap(), kebab);
    }

    #[test]
    fn empty_text() {
        assert_eq!(change_text_case("", "camel"), Err(Error::EmptyInput("text")));
        assert_eq!(change_text_case("   ", "camel"), Err(Error::EmptyInput("text")));

        // Text is validated first
        assert_eq!(change_text_case(" ", "pascal"), Err(Error::EmptyInput("text")));
    }

    #[test]
    fn unknown_case() {
        let error = change_text_case("Hello World", "pascal").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid 'caseName'. Expected one of: camel, kebab, snake"
        );
        assert!(change_text_case("Hello World", "Camel").is_err());
        assert!(change_text_case("Hello World", "").is_err());
    }

    #[test]
    fn names() {
        assert_eq!(TextCase::names(), "camel, kebab, snake");
        assert_eq!(TextCase::from_name("snake").unwrap(), TextCase::Snake);
        assert_eq!(TextCase::Kebab.to_string(), "kebab");
    }
}
