use log::{debug, trace};
use regex::{NoExpand, Regex};

use crate::text::is_string_empty;
use crate::{Error, Result};

/// Replace every whole-word occurrence of `word` with `replacement`.
///
/// Matching is case sensitive and `word` is taken literally. Occurrences
/// inside a longer word are left alone. The replacement is inserted as is,
/// so `$` has no special meaning in it. An empty replacement removes the word.
pub fn replace_word_in_text(text: &str, word: &str, replacement: &str) -> Result<String> {
    if is_string_empty(text) {
        debug!("replace: empty text");
        return Err(Error::EmptyInput("text"));
    }
    if is_string_empty(word) {
        debug!("replace: empty word");
        return Err(Error::EmptyInput("word"));
    }

    let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(word)))?;
    let replaced = pattern.replace_all(text, NoExpand(replacement));
    trace!("replace: {word:?} with {replacement:?} in {} characters", text.len());
    Ok(replaced.into_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    const POOH: &str = "Winnie-the-Pooh (also known as Edward Bear, Pooh Bear or simply Pooh) \
        is a fictional anthropomorphic teddy bear. Winnie-the-Pooh first appeared by name \
        in a children's story.";

    #[test]
    fn whole_words() {
        assert_eq!(
            replace_word_in_text("the pooh bear", "pooh", "puff").unwrap(),
            "the puff bear"
        );
        assert_eq!(
            replace_word_in_text("the poohbear and pooh", "pooh", "puff").unwrap(),
            "the poohbear and puff"
        );
        assert_eq!(
            replace_word_in_text("winnie-the-pooh", "pooh", "puff").unwrap(),
            "winnie-the-puff"
        );
    }

    #[test]
    fn every_occurrence() {
        let expected = "Winnie-the-Puff (also known as Edward Bear, Puff Bear or simply Puff) \
        is a fictional anthropomorphic teddy bear. Winnie-the-Puff first appeared by name \
        in a children's story.";
        assert_eq!(replace_word_in_text(POOH, "Pooh", "Puff").unwrap(), expected);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(
            replace_word_in_text("Pooh and pooh", "pooh", "puff").unwrap(),
            "Pooh and puff"
        );
    }

    #[test]
    fn literal() {
        assert_eq!(
            replace_word_in_text("a.c abc a.c", "a.c", "x").unwrap(),
            "x abc x"
        );
        assert_eq!(
            replace_word_in_text("cost is price", "price", "$1").unwrap(),
            "cost is $1"
        );
        assert_eq!(
            replace_word_in_text("no match here", "(pooh", "puff").unwrap(),
            "no match here"
        );
    }

    #[test]
    fn empty_replacement() {
        assert_eq!(
            replace_word_in_text("the pooh bear", "pooh", "").unwrap(),
            "the  bear"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            replace_word_in_text(" ", "pooh", "puff"),
            Err(Error::EmptyInput("text"))
        );
        assert_eq!(
            replace_word_in_text("the pooh bear", "", "puff"),
            Err(Error::EmptyInput("word"))
        );
    }
}
