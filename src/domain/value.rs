use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sendblue API key, sent as the `sb-api-key-id` header.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by Sendblue (`sb-api-key-id`).
    pub const HEADER: &'static str = "sb-api-key-id";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sendblue secret key, sent as the `sb-api-secret-key` header.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct SecretKey(String);

impl SecretKey {
    /// Header name used by Sendblue (`sb-api-secret-key`).
    pub const HEADER: &'static str = "sb-api-secret-key";

    /// Create a validated [`SecretKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Outbound recipients always pass through this type, so every number put on
/// the wire is in canonical E.164 form (`+`, country calling code, national
/// digits, no separators). Equality, ordering, and hashing are based on the
/// E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// JSON field name used by Sendblue (`number`).
    pub const FIELD: &'static str = "number";

    /// Minimum digit count (country calling code plus national number) for a
    /// plausible E.164 number. The shortest assigned subscriber numbers
    /// worldwide sit at seven digits; anything below that is not a reachable
    /// recipient.
    pub const MIN_DIGITS: usize = 7;

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix. Validation is a format-plausibility check, not a
    /// carrier-level one: the input must parse and carry at least
    /// [`PhoneNumber::MIN_DIGITS`] digits. Both parser failures and
    /// implausibly short numbers are mapped to
    /// [`ValidationError::InvalidPhoneNumber`].
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        let digits = e164.chars().filter(char::is_ascii_digit).count();
        if digits < Self::MIN_DIGITS {
            return Err(ValidationError::InvalidPhoneNumber { input: raw });
        }

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_trims_and_rejects_empty() {
        let key = ApiKey::new("  key ").unwrap();
        assert_eq!(key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());
    }

    #[test]
    fn secret_key_preserves_whitespace_and_rejects_empty() {
        let secret = SecretKey::new(" secret ").unwrap();
        assert_eq!(secret.as_str(), " secret ");
        assert!(SecretKey::new("").is_err());
    }

    #[test]
    fn us_numbers_normalize_to_the_same_e164_form() {
        let inputs = [
            "555-123-4567",
            "(555) 123-4567",
            "555 123 4567",
            "5551234567",
            "1-555-123-4567",
            "+1 555 123 4567",
        ];
        for input in inputs {
            let parsed = PhoneNumber::parse(Some(country::Id::US), input).unwrap();
            assert_eq!(parsed.e164(), "+15551234567", "input: {input}");
        }
    }

    #[test]
    fn phone_number_equality_uses_e164() {
        let p1 = PhoneNumber::parse(Some(country::Id::US), "5551234567").unwrap();
        let p2 = PhoneNumber::parse(Some(country::Id::US), "(555) 123-4567").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.raw(), "5551234567");
    }

    #[test]
    fn implausible_inputs_fail_to_parse() {
        assert!(matches!(
            PhoneNumber::parse(Some(country::Id::US), ""),
            Err(ValidationError::Empty { .. })
        ));
        assert!(matches!(
            PhoneNumber::parse(Some(country::Id::US), "abc"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(PhoneNumber::parse(Some(country::Id::US), "not a number").is_err());
    }

    #[test]
    fn short_inputs_are_rejected_even_when_they_parse() {
        for input in ["123", "+123", "1234"] {
            assert!(
                matches!(
                    PhoneNumber::parse(Some(country::Id::US), input),
                    Err(ValidationError::InvalidPhoneNumber { .. })
                ),
                "input: {input}"
            );
        }
    }

    #[test]
    fn explicit_country_prefix_wins_over_default_region() {
        let parsed = PhoneNumber::parse(Some(country::Id::US), "+7 925 123-45-67").unwrap();
        assert_eq!(parsed.e164(), "+79251234567");
    }
}
