//! The text utilities over loosely typed arguments.
//!
//! Arguments are JSON values, with `None` standing for an argument that was
//! not passed at all. Each function checks the argument types at runtime and
//! reports the same errors a dynamically typed caller would expect. Use
//! [`invoke`] to call a function by its camel-case name.

use std::str::FromStr;

use log::{debug, trace};
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{Error, PhoneNumber, Result};

/// Type name of a value as reported in type errors.
fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null | Value::Array(_) | Value::Object(_)) => "object",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
    }
}

/// The text of a string argument that is not blank.
fn non_blank<'a>(value: Option<&'a Value>, name: &'static str) -> Result<&'a str> {
    match value {
        Some(Value::String(s)) if !crate::is_string_empty(s) => Ok(s.as_str()),
        _ => {
            debug!("{name}: expected non-empty string, received {}", type_name(value));
            Err(Error::EmptyInput(name))
        }
    }
}

pub fn is_string_empty(text: Option<&Value>) -> Result<bool> {
    match text {
        Some(Value::String(s)) => Ok(crate::is_string_empty(s)),
        _ => Err(Error::InvalidType {
            expected: "string",
            received: type_name(text),
        }),
    }
}

/// A fractional count is truncated toward zero.
pub fn truncate_string(text: Option<&Value>, count: Option<&Value>) -> Result<String> {
    let text = match text {
        Some(Value::String(s)) => s.as_str(),
        _ => return Err(Error::EmptyInput("text")),
    };
    if text.is_empty() {
        return Err(Error::EmptyInput("text"));
    }

    let count = match count {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(n) => n,
            // Saturates for counts outside the i64 range
            None => n.as_f64().map_or(0, |f| f.trunc() as i64),
        },
        _ => {
            debug!("truncate: count is {}", type_name(count));
            return Err(Error::NotANumber("numberOfCharacters"));
        }
    };
    crate::truncate_string(text, count)
}

pub fn create_hash_tag(text: Option<&Value>) -> Result<String> {
    match text {
        Some(Value::String(s)) => crate::create_hash_tag(s),
        _ => Err(Error::HashTagTooShort),
    }
}

/// Numbers and strings are accepted and read as decimal text.
pub fn format_phone_number(phone_number: Option<&Value>) -> Result<String> {
    let digits = match phone_number {
        None | Some(Value::Null) => return Err(Error::PhoneNumberRequired),
        // Whole floats are written without a fraction, like integers
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f}"),
            _ => n.to_string(),
        },
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            debug!("phone number: received {}", type_name(Some(other)));
            return Err(Error::PhoneNumberNotDigits);
        }
    };
    Ok(PhoneNumber::from_str(&digits)?.to_string())
}

pub fn change_text_case(text: Option<&Value>, case_name: Option<&Value>) -> Result<String> {
    let text = non_blank(text, "text")?;
    let name = match case_name {
        Some(Value::String(name)) => name.as_str(),
        _ => "",
    };
    crate::change_text_case(text, name)
}

pub fn replace_word_in_text(
    text: Option<&Value>,
    word: Option<&Value>,
    replacement: Option<&Value>,
) -> Result<String> {
    let text = non_blank(text, "text")?;
    let word = non_blank(word, "word")?;
    match replacement {
        Some(Value::String(replacement)) => crate::replace_word_in_text(text, word, replacement),
        _ => Err(Error::NotAString("replacement")),
    }
}

/// A found price is a JSON number, a missing one is the
/// [`NO_PRICE_FOUND`](crate::NO_PRICE_FOUND) text.
pub fn extract_price_from_text(text: Option<&Value>) -> Result<Value> {
    let text = non_blank(text, "text")?;
    let found = crate::extract_price_from_text(text)?;
    Ok(serde_json::to_value(found).unwrap_or(Value::Null))
}

/// The functions that can be called through [`invoke`].
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum TextFunction {
    IsStringEmpty,
    TruncateString,
    CreateHashTag,
    FormatPhoneNumber,
    ChangeTextCase,
    ReplaceWordInText,
    ExtractPriceFromText,
}

impl TextFunction {
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnknownFunction(name.to_owned()))
    }

    /// Call the function with positional arguments. Missing trailing
    /// arguments are treated as not passed and extra ones are ignored.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        use TextFunction::*;
        trace!("call {self} with {} arguments", args.len());
        let arg = |index: usize| args.get(index);
        let result = match self {
            IsStringEmpty => Value::Bool(is_string_empty(arg(0))?),
            TruncateString => Value::String(truncate_string(arg(0), arg(1))?),
            CreateHashTag => Value::String(create_hash_tag(arg(0))?),
            FormatPhoneNumber => Value::String(format_phone_number(arg(0))?),
            ChangeTextCase => Value::String(change_text_case(arg(0), arg(1))?),
            ReplaceWordInText => Value::String(replace_word_in_text(arg(0), arg(1), arg(2))?),
            ExtractPriceFromText => extract_price_from_text(arg(0))?,
        };
        Ok(result)
    }
}

/// Call a text function by its camel-case name, such as `createHashTag`.
pub fn invoke(name: &str, args: &[Value]) -> Result<Value> {
    TextFunction::from_name(name)?.call(args)
}
