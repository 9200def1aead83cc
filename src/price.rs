//! Dollar prices mentioned in free text.

use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

use log::{debug, trace};
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::text::is_string_empty;
use crate::{Error, Result};

/// How a missing price is written out.
pub const NO_PRICE_FOUND: &str = "No matching price was found";

/// A dollar sign, whole dollars and optionally one or two cents digits.
const PRICE_PATTERN: &str = r"\$[0-9]+(?:\.[0-9]{1,2})?";

fn price_regex() -> Result<&'static Regex> {
    static PRICE: OnceLock<Regex> = OnceLock::new();
    if let Some(regex) = PRICE.get() {
        return Ok(regex);
    }
    let regex = Regex::new(PRICE_PATTERN)?;
    Ok(PRICE.get_or_init(|| regex))
}

/// Outcome of searching text for a price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PriceMatch {
    Found(f64),
    NotFound,
}

impl PriceMatch {
    pub fn price(&self) -> Option<f64> {
        match self {
            PriceMatch::Found(price) => Some(*price),
            PriceMatch::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PriceMatch::Found(_))
    }
}

impl Display for PriceMatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceMatch::Found(price) => write!(f, "{price}"),
            PriceMatch::NotFound => f.write_str(NO_PRICE_FOUND),
        }
    }
}

/// A found price is a number, a missing one is the [`NO_PRICE_FOUND`] text.
impl Serialize for PriceMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PriceMatch::Found(price) => serializer.serialize_f64(*price),
            PriceMatch::NotFound => serializer.serialize_str(NO_PRICE_FOUND),
        }
    }
}

/// Find the first dollar amount such as `$5` or `$2.32` in the text.
///
/// Text without a price is not an error, it gives [`PriceMatch::NotFound`].
pub fn extract_price_from_text(text: &str) -> Result<PriceMatch> {
    if is_string_empty(text) {
        debug!("price: empty text");
        return Err(Error::EmptyInput("text"));
    }

    let found = match price_regex()?.find(text) {
        Some(m) => PriceMatch::Found(m.as_str()[1..].parse()?),
        None => PriceMatch::NotFound,
    };
    trace!("price: {found}");
    Ok(found)
}
