use std::fmt;
use std::fmt::{Display, Formatter};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterName(String);

impl NewsletterName {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("Invalid newsletter name: cannot be empty.".to_string());
        }

        let grapheme_count = trimmed.graphemes(true).count();

        if grapheme_count > 200 {
            return Err(
                "Invalid newsletter name: cannot be longer than 200 characters.".to_string(),
            );
        }

        // A bare number reads like an id, not a name
        let has_non_numeric = trimmed
            .chars()
            .any(|c| !c.is_numeric() && !c.is_whitespace());
        if !has_non_numeric {
            return Err("Invalid newsletter name: cannot contain only numbers.".to_string());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for NewsletterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for NewsletterName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::NewsletterName;
    use claims::{assert_err, assert_ok};
    use fake::Fake;
    use fake::faker::company::en::CompanyName;
    use proptest::prelude::*;

    #[test]
    fn empty_name_is_rejected() {
        assert_err!(NewsletterName::parse("".into()));
    }

    #[test]
    fn long_name_is_rejected() {
        assert_err!(NewsletterName::parse("a".repeat(201)));
    }

    #[test]
    fn name_at_max_length_is_accepted() {
        assert_ok!(NewsletterName::parse("a".repeat(200)));
    }

    #[test]
    fn name_with_only_numbers_and_spaces_is_rejected() {
        assert_err!(NewsletterName::parse("2024 01".into()));
    }

    #[test]
    fn name_is_trimmed() {
        let name = NewsletterName::parse("  Spring Sale  ".into()).unwrap();
        assert_eq!(name.as_ref(), "Spring Sale");
    }

    #[test]
    fn generated_company_names_are_accepted() {
        for _ in 0..20 {
            let name: String = CompanyName().fake();
            assert_ok!(NewsletterName::parse(format!("{name} Weekly")));
        }
    }

    proptest! {
        #[test]
        fn valid_names_with_valid_length_are_accepted(
            name in r"[a-zA-Z][a-zA-Z0-9 ]{0,199}",
        ) {
            prop_assert!(NewsletterName::parse(name).is_ok());
        }

        #[test]
        fn names_longer_than_200_chars_are_rejected(
            name in r"[a-zA-Z0-9]{201,250}",
        ) {
            prop_assert!(NewsletterName::parse(name).is_err());
        }

        #[test]
        fn whitespace_only_names_are_rejected(
            name in r"\s{1,50}",
        ) {
            prop_assert!(NewsletterName::parse(name).is_err());
        }

        #[test]
        fn numeric_only_names_are_rejected(
            name in r"[0-9]{1,50}",
        ) {
            prop_assert!(NewsletterName::parse(name).is_err());
        }
    }
}
