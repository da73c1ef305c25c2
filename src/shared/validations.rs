//! Custom field validators shared by the HTTP request DTOs.
//!
//! Plugged into `validator` derive via `#[validate(custom(function = ...))]`.

use std::sync::OnceLock;

use regex::Regex;
use validator::ValidationError;

fn plate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{3}-[0-9]{4}$").expect("plate pattern is valid"))
}

/// Vehicle license plate in the `XXX-0000` standard.
pub fn validate_plate(plate: &str) -> Result<(), ValidationError> {
    if plate_regex().is_match(plate) {
        return Ok(());
    }
    let mut err = ValidationError::new("plate");
    err.message = Some("license plate must follow the XXX-0000 standard".into());
    Err(err)
}

/// Brazilian CPF tax identifier: 11 digits with valid check digits.
pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if is_valid_cpf(cpf) {
        return Ok(());
    }
    let mut err = ValidationError::new("cpf");
    err.message = Some("invalid cpf format".into());
    Err(err)
}

fn is_valid_cpf(cpf: &str) -> bool {
    if cpf.len() != 11 {
        return false;
    }
    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 {
        return false;
    }
    // A CPF made of one repeated digit passes the check-digit math but is invalid
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    digits[9] == check_digit(&digits[..9], 10) && digits[10] == check_digit(&digits[..10], 11)
}

fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(d, w)| d * w)
        .sum();
    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        11 - rem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_plate() {
        assert!(validate_plate("ABC-1234").is_ok());
    }

    #[test]
    fn rejects_malformed_plates() {
        for plate in ["abc-1234", "AB-1234", "ABC1234", "ABC-123", "ABC-12345", ""] {
            assert!(validate_plate(plate).is_err(), "plate {:?} passed", plate);
        }
    }

    #[test]
    fn accepts_valid_cpf() {
        assert!(validate_cpf("52998224725").is_ok());
        assert!(validate_cpf("11144477735").is_ok());
    }

    #[test]
    fn rejects_invalid_cpf() {
        // wrong check digits
        assert!(validate_cpf("52998224726").is_err());
        // repeated digits
        assert!(validate_cpf("11111111111").is_err());
        // wrong length / non-digits
        assert!(validate_cpf("5299822472").is_err());
        assert!(validate_cpf("5299822472a").is_err());
    }
}
