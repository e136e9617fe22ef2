//! Customer account number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`AccountNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountNumberError {
    /// The input string is empty (or only whitespace).
    #[error("account number cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("account number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character that cannot appear in an account number.
    #[error("account number contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A customer account number as understood by the customer service.
///
/// Account numbers are opaque strings (they frequently carry leading zeros,
/// so they are never treated as integers). Surrounding whitespace is trimmed.
///
/// ## Constraints
///
/// - Length: 1-64 characters after trimming
/// - No whitespace, control characters, or `/`
///
/// ## Examples
///
/// ```
/// use customer_account_core::AccountNumber;
///
/// assert!(AccountNumber::parse("0001234567").is_ok());
/// assert_eq!(AccountNumber::parse(" 42 ").unwrap().as_str(), "42");
///
/// assert!(AccountNumber::parse("").is_err());
/// assert!(AccountNumber::parse("12/34").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Maximum length of an account number.
    pub const MAX_LENGTH: usize = 64;

    /// Parse an `AccountNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, longer than
    /// [`Self::MAX_LENGTH`], or contains whitespace, control characters or `/`.
    pub fn parse(s: &str) -> Result<Self, AccountNumberError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(AccountNumberError::Empty);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(AccountNumberError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || *c == '/')
        {
            return Err(AccountNumberError::InvalidCharacter(c));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the account number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `AccountNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AccountNumber {
    type Err = AccountNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccountNumber {
    type Error = AccountNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccountNumber> for String {
    fn from(account: AccountNumber) -> Self {
        account.0
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
