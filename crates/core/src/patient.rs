//! Patient demographic phrasing.

use crate::grammar::indefinite_article;
use crate::normalize::{Normalized, UNKNOWN};

/// Describes the patient from normalized age and gender.
///
/// Four phrasings, one per known/unknown combination:
/// - both known: `"an 80-year-old male patient"`
/// - age only: `"a 45-year-old patient (unknown gender)"`
/// - gender only: `"a female patient (unknown age)"`
/// - neither: `"patient (unknown demographics)"`
///
/// An age that fails numeric parsing is treated as unknown even when text
/// is present.
pub fn patient_description(age: &Normalized, gender: &Normalized) -> String {
    let age_years = known_demographic(age).and_then(parse_age);
    let gender_word = known_demographic(gender).map(str::to_lowercase);

    match (age_years, gender_word) {
        (Some(years), Some(gender)) => {
            format!("{} {years}-year-old {gender} patient", age_article(years))
        }
        (Some(years), None) => {
            format!("{} {years}-year-old patient (unknown gender)", age_article(years))
        }
        (None, Some(gender)) => {
            format!("{} {gender} patient (unknown age)", indefinite_article(&gender))
        }
        (None, None) => "patient (unknown demographics)".to_owned(),
    }
}

/// A demographic counts as unknown when missing or literally "unknown".
fn known_demographic(value: &Normalized) -> Option<&str> {
    value.known().filter(|text| !text.eq_ignore_ascii_case(UNKNOWN))
}

/// Truncates a possibly fractional age to whole years.
fn parse_age(text: &str) -> Option<i64> {
    text.parse::<f64>()
        .ok()
        .filter(|age| age.is_finite())
        .map(|age| age.trunc() as i64)
}

/// "an" only when the age's leading digit is 8; fixed house wording.
fn age_article(years: i64) -> &'static str {
    if years.to_string().starts_with('8') {
        "an"
    } else {
        "a"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(text: &str) -> Normalized {
        Normalized::Known(text.to_owned())
    }

    #[test]
    fn both_known() {
        assert_eq!(
            patient_description(&known("80"), &known("Male")),
            "an 80-year-old male patient"
        );
    }

    #[test]
    fn gender_unknown() {
        assert_eq!(
            patient_description(&known("45"), &Normalized::Missing),
            "a 45-year-old patient (unknown gender)"
        );
    }

    #[test]
    fn age_unknown() {
        assert_eq!(
            patient_description(&Normalized::Missing, &known("Female")),
            "a female patient (unknown age)"
        );
    }

    #[test]
    fn both_unknown() {
        assert_eq!(
            patient_description(&Normalized::Missing, &Normalized::Missing),
            "patient (unknown demographics)"
        );
    }

    #[test]
    fn fractional_age_truncates() {
        assert_eq!(
            patient_description(&known("45.7"), &known("male")),
            "a 45-year-old male patient"
        );
    }

    #[test]
    fn unparseable_age_falls_back_to_unknown_age() {
        assert_eq!(
            patient_description(&known("forty"), &known("Male")),
            "a male patient (unknown age)"
        );
    }

    #[test]
    fn non_finite_ages_fall_back_to_unknown_age() {
        assert_eq!(
            patient_description(&known("inf"), &known("Male")),
            "a male patient (unknown age)"
        );
        assert_eq!(
            patient_description(&known("-inf"), &Normalized::Missing),
            "patient (unknown demographics)"
        );
    }

    #[test]
    fn literal_unknown_demographics_count_as_missing() {
        assert_eq!(
            patient_description(&known("Unknown"), &known("unknown")),
            "patient (unknown demographics)"
        );
    }

    #[test]
    fn article_depends_on_leading_digit_eight() {
        assert_eq!(
            patient_description(&known("8"), &known("female")),
            "an 8-year-old female patient"
        );
        assert_eq!(
            patient_description(&known("85"), &Normalized::Missing),
            "an 85-year-old patient (unknown gender)"
        );
        // 18 keeps "a": only the leading digit is considered.
        assert_eq!(
            patient_description(&known("18"), &known("male")),
            "a 18-year-old male patient"
        );
    }
}
