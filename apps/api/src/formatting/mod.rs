//! As-you-type input formatting for Korean phone, business and registration numbers.
//!
//! Every formatter drops non-digits, truncates to the maximum length and
//! hyphenates whatever is left, so partial input renders as a partial number.

pub mod handlers;

const PHONE_MAX_DIGITS: usize = 11;
const SEOUL_PHONE_MAX_DIGITS: usize = 10;
const BUSINESS_NUMBER_DIGITS: usize = 10;
const REGISTRATION_NUMBER_DIGITS: usize = 13;

pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// `010-1234-5678`, `031-123-4567`, `02-123-4567`, `02-1234-5678`.
pub fn format_phone_number(input: &str) -> String {
    let digits = digits_only(input);

    if digits.starts_with("02") {
        let digits = truncate(&digits, SEOUL_PHONE_MAX_DIGITS);
        let groups: &[usize] = if digits.len() == SEOUL_PHONE_MAX_DIGITS {
            &[2, 4, 4]
        } else {
            &[2, 3, 4]
        };
        return hyphenate(digits, groups);
    }

    let digits = truncate(&digits, PHONE_MAX_DIGITS);
    let groups: &[usize] = if digits.len() == PHONE_MAX_DIGITS {
        &[3, 4, 4]
    } else {
        &[3, 3, 4]
    };
    hyphenate(digits, groups)
}

/// 사업자등록번호: `123-45-67890`.
pub fn format_business_number(input: &str) -> String {
    let digits = digits_only(input);
    hyphenate(truncate(&digits, BUSINESS_NUMBER_DIGITS), &[3, 2, 5])
}

/// 외국인등록번호 / 주민등록번호: `900101-5123456`.
pub fn format_registration_number(input: &str) -> String {
    let digits = digits_only(input);
    hyphenate(truncate(&digits, REGISTRATION_NUMBER_DIGITS), &[6, 7])
}

/// True when `input` holds a complete phone number (9 to 11 digits, leading 0).
pub fn is_complete_phone_number(input: &str) -> bool {
    let digits = digits_only(input);
    digits.starts_with('0') && (9..=PHONE_MAX_DIGITS).contains(&digits.len())
}

pub fn is_complete_business_number(input: &str) -> bool {
    digits_only(input).len() == BUSINESS_NUMBER_DIGITS
}

// Digits are ASCII, so byte offsets are char offsets.
fn truncate(digits: &str, max: usize) -> &str {
    &digits[..digits.len().min(max)]
}

fn hyphenate(digits: &str, groups: &[usize]) -> String {
    let mut parts = Vec::with_capacity(groups.len());
    let mut rest = digits;
    for &size in groups {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(size.min(rest.len()));
        parts.push(head);
        rest = tail;
    }
    parts.join("-")
}
