use log::{debug, trace};

use crate::{Error, Result};

/// Hashtags shorter than this, counted before trimming, are rejected.
pub const HASH_TAG_MIN_LENGTH: usize = 3;

/// `true` if the text is empty or contains only whitespace.
pub fn is_string_empty(text: &str) -> bool {
    text.trim().is_empty()
}

/// The first `count` characters of the text. A count past the end returns
/// the whole text. A negative count drops that many characters from the end.
pub fn truncate_string(text: &str, count: i64) -> Result<String> {
    if text.is_empty() {
        debug!("truncate: empty text");
        return Err(Error::EmptyInput("text"));
    }

    let length = text.chars().count();
    let end = if count >= 0 {
        usize::try_from(count).unwrap_or(usize::MAX).min(length)
    } else {
        let dropped = usize::try_from(count.unsigned_abs()).unwrap_or(usize::MAX);
        length.saturating_sub(dropped)
    };
    trace!("truncate: {length} characters to {end}");
    Ok(text.chars().take(end).collect())
}

/// Convert the text to a social media hashtag such as `#iLoveJavascript`.
///
/// The first word is lowercased, every later word is capitalized and the
/// words are joined without separators.
pub fn create_hash_tag(text: &str) -> Result<String> {
    if is_string_empty(text) || text.chars().count() < HASH_TAG_MIN_LENGTH {
        debug!("hashtag: text {text:?} is too short");
        return Err(Error::HashTagTooShort);
    }

    let mut tag = String::with_capacity(text.len() + 1);
    tag.push('#');
    for (index, word) in text.split_whitespace().enumerate() {
        if index == 0 {
            tag.push_str(&word.to_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                tag.extend(first.to_uppercase());
                tag.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    trace!("hashtag: {text:?} to {tag:?}");
    Ok(tag)
}

/// Uppercase the first character of the word and leave the rest alone.
pub(crate) fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
