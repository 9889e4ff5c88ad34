//! Password strength classification
//!
//! Scores character composition against four fixed rules and a minimum
//! length. The alphabets are explicit allow-lists of code points (Spanish
//! keyboard layout with its accented vowels and enye), not locale-dependent
//! character classes, so the scoring behaves identically everywhere.

use crate::types::StrengthTier;

/// Uppercase letters counted toward the uppercase rule
pub const UPPERCASE_SET: &str = "QWEÉRTYUÚIÍOÓPAÁSDFGHJKLÑZXCVBNM";

/// Lowercase letters counted toward the lowercase rule
pub const LOWERCASE_SET: &str = "qweértyuúiíoópaásdfghjklñzxcvbnm";

/// Digits counted toward the digit rule
pub const DIGIT_SET: &str = "0987654321";

/// Classify a password into a strength tier.
///
/// Four independent rules are checked: the password contains an uppercase
/// letter, a lowercase letter, a digit, and at least one character outside
/// all three sets. Length (in characters, not bytes) gates everything:
/// a password shorter than `minimum_length` is `Invalid` no matter how many
/// rules it satisfies. At or above the minimum, 4 rules make it `Strong`,
/// 3 make it `Soft`, fewer make it `Weak`.
///
/// Pure and total: same inputs always yield the same tier, and no input
/// panics or errors.
pub fn classify(password: &str, minimum_length: usize) -> StrengthTier {
    if password.chars().count() < minimum_length {
        return StrengthTier::Invalid;
    }

    match rule_count(password) {
        4 => StrengthTier::Strong,
        3 => StrengthTier::Soft,
        _ => StrengthTier::Weak,
    }
}

/// Number of composition rules the password satisfies, in [0, 4]
pub fn rule_count(password: &str) -> usize {
    let has_upper = password.chars().any(|c| UPPERCASE_SET.contains(c));
    let has_lower = password.chars().any(|c| LOWERCASE_SET.contains(c));
    let has_digit = password.chars().any(|c| DIGIT_SET.contains(c));
    let has_other = password.chars().any(|c| {
        !UPPERCASE_SET.contains(c) && !LOWERCASE_SET.contains(c) && !DIGIT_SET.contains(c)
    });

    [has_upper, has_lower, has_digit, has_other]
        .iter()
        .filter(|&&rule| rule)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_four_rules_is_strong() {
        assert_eq!(classify("Chicken%1", 5), StrengthTier::Strong);
    }

    #[test]
    fn test_three_rules_is_soft() {
        assert_eq!(classify("Chicken1", 5), StrengthTier::Soft);
    }

    #[test]
    fn test_one_rule_is_weak() {
        assert_eq!(classify("chicken", 5), StrengthTier::Weak);
        assert_eq!(classify("123456789", 5), StrengthTier::Weak);
    }

    #[test]
    fn test_two_rules_is_weak() {
        assert_eq!(classify("chicken1", 5), StrengthTier::Weak);
    }

    #[test]
    fn test_short_password_is_invalid_regardless_of_content() {
        assert_eq!(classify("Ab1%", 5), StrengthTier::Invalid);
        assert_eq!(classify("aaaa", 5), StrengthTier::Invalid);
    }

    #[test]
    fn test_empty_password_is_invalid() {
        assert_eq!(classify("", 1), StrengthTier::Invalid);
        assert_eq!(classify("", 8), StrengthTier::Invalid);
    }

    #[test]
    fn test_zero_minimum_accepts_empty() {
        // No rules satisfied, but the length gate passes
        assert_eq!(classify("", 0), StrengthTier::Weak);
    }

    #[test]
    fn test_accented_letters_count_as_letters() {
        // é and ñ are in the lowercase allow-list, not the "other" bucket
        assert_eq!(rule_count("ñoño"), 1);
        assert_eq!(classify("Ñoñería1!", 5), StrengthTier::Strong);
    }

    #[test]
    fn test_letters_outside_allow_list_hit_other_bucket() {
        // ü is in none of the three sets, so it satisfies the fourth rule
        assert_eq!(rule_count("ü"), 1);
        assert_eq!(classify("Würze12x", 5), StrengthTier::Strong);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // five chars, nine bytes
        assert_eq!(classify("ñéñéñ", 5), StrengthTier::Weak);
    }

    #[test]
    fn test_deterministic() {
        let first = classify("Tr1cky$pass", 8);
        for _ in 0..10 {
            assert_eq!(classify("Tr1cky$pass", 8), first);
        }
    }

    #[test]
    fn test_rule_count_bounds() {
        assert_eq!(rule_count(""), 0);
        assert_eq!(rule_count("aB3%"), 4);
    }
}
