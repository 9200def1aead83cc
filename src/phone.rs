//! Phone numbers in the `+998 99 777 66 55` layout.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::{debug, trace};

use crate::Error;

/// Prepended to local numbers that are missing it.
pub const COUNTRY_CODE: &str = "998";

/// Number of digits in a number without the country code.
const LOCAL_LENGTH: usize = 9;

/// Number of digits in a number with the country code.
const FULL_LENGTH: usize = COUNTRY_CODE.len() + LOCAL_LENGTH;

/// A phone number that always includes the country code.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    /// All twelve digits including the country code.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn country_code(&self) -> &str {
        &self.digits[..COUNTRY_CODE.len()]
    }
}

impl FromStr for PhoneNumber {
    type Err = Error;

    /// Accepts exactly nine or twelve ASCII digits and nothing else.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            debug!("phone number: {text:?} is not all digits");
            return Err(Error::PhoneNumberNotDigits);
        }

        let digits = match text.len() {
            LOCAL_LENGTH => format!("{COUNTRY_CODE}{text}"),
            FULL_LENGTH => text.to_owned(),
            length => {
                debug!("phone number: {length} digits");
                return Err(Error::PhoneNumberLength(length));
            }
        };
        Ok(Self { digits })
    }
}

impl TryFrom<u64> for PhoneNumber {
    type Error = Error;

    fn try_from(number: u64) -> Result<Self, Self::Error> {
        number.to_string().parse()
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let d = &self.digits;
        write!(
            f,
            "+{} {} {} {} {}",
            &d[0..3],
            &d[3..5],
            &d[5..8],
            &d[8..10],
            &d[10..12]
        )
    }
}

/// Format a nine or twelve digit number as `+998 99 777 66 55`. Nine digit
/// numbers get the country code prepended.
pub fn format_phone_number(phone_number: u64) -> crate::Result<String> {
    let formatted = PhoneNumber::try_from(phone_number)?.to_string();
    trace!("phone number: {phone_number} to {formatted:?}");
    Ok(formatted)
}
