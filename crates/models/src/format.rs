use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ROLL_NUMBER: Regex = Regex::new(r"^[0-9]{9}$").unwrap();
    static ref CNIC: Regex = Regex::new(r"^[0-9]{13}$").unwrap();
}

/// Checks that a student roll number is exactly nine ASCII digits
pub fn is_roll_number(value: &str) -> bool {
    ROLL_NUMBER.is_match(value)
}

/// Checks that a national identity number is exactly thirteen ASCII digits, without dashes
pub fn is_cnic(value: &str) -> bool {
    CNIC.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_number() {
        assert!(is_roll_number("123456789"));
        assert!(is_roll_number("000000001"));
        assert!(!is_roll_number("12345678"));
        assert!(!is_roll_number("1234567890"));
        assert!(!is_roll_number("12345678a"));
        assert!(!is_roll_number(" 123456789"));
        assert!(!is_roll_number(""));
    }

    #[test]
    fn test_roll_number_rejects_non_ascii_digits() {
        assert!(!is_roll_number("١٢٣٤٥٦٧٨٩"));
    }

    #[test]
    fn test_cnic() {
        assert!(is_cnic("3520212345671"));
        assert!(!is_cnic("35202-1234567-1"));
        assert!(!is_cnic("352021234567"));
    }
}
