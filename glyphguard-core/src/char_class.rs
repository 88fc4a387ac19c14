//! char_class.rs - Composable character classes for the replacement engine.
//!
//! A character class is an opaque membership predicate over Unicode scalar
//! values. Callers combine the standard classes (whitespace, punctuation,
//! letter-case subsets, ...) with [`CharacterClass::union`] before handing the
//! result to the replacer. Closures of type `Fn(char) -> bool` are classes too.
//!
//! Membership of the standard classes is derived from the scalar's Unicode
//! General_Category, never from hand-maintained range tables.
//!
//! License: MIT OR APACHE 2.0

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::errors::GlyphGuardError;

/// A membership predicate over Unicode scalar values.
pub trait CharacterClass {
    /// Returns `true` if `c` belongs to this class.
    fn contains(&self, c: char) -> bool;

    /// Combines two classes into one that matches a scalar when either does.
    fn union<O>(self, other: O) -> Union<Self, O>
    where
        Self: Sized,
        O: CharacterClass,
    {
        Union { left: self, right: other }
    }
}

/// Closures are classes. Boxed classes are passed as `&*boxed`, since `Box`
/// itself forwards `Fn` and cannot get a second impl.
impl<F> CharacterClass for F
where
    F: Fn(char) -> bool,
{
    fn contains(&self, c: char) -> bool {
        self(c)
    }
}

/// The union of two character classes, built by [`CharacterClass::union`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Union<A, B> {
    left: A,
    right: B,
}

impl<A: CharacterClass, B: CharacterClass> CharacterClass for Union<A, B> {
    fn contains(&self, c: char) -> bool {
        self.left.contains(c) || self.right.contains(c)
    }
}

/// The standard character classes, named the way they appear in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardClass {
    /// Whitespace separators, tab, and every line/paragraph terminator.
    WhitespacesAndNewlines,
    /// Space separators (Zs) and tab.
    Whitespaces,
    /// U+000A through U+000D, U+0085, U+2028 and U+2029.
    Newlines,
    /// All punctuation categories (P*).
    Punctuation,
    /// Lowercase letters (Ll).
    LowercaseLetters,
    /// Uppercase and titlecase letters (Lu, Lt).
    UppercaseLetters,
    /// Letters and marks (L*, M*).
    Letters,
    /// Decimal digits (Nd).
    DecimalDigits,
    /// Letters, marks and numbers (L*, M*, N*).
    Alphanumerics,
    /// All symbol categories (S*).
    Symbols,
    /// Control and format characters (Cc, Cf).
    ControlCharacters,
    /// Non-spacing, spacing and enclosing marks (Mn, Mc, Me).
    CombiningMarks,
}

impl StandardClass {
    pub const ALL: [StandardClass; 12] = [
        StandardClass::WhitespacesAndNewlines,
        StandardClass::Whitespaces,
        StandardClass::Newlines,
        StandardClass::Punctuation,
        StandardClass::LowercaseLetters,
        StandardClass::UppercaseLetters,
        StandardClass::Letters,
        StandardClass::DecimalDigits,
        StandardClass::Alphanumerics,
        StandardClass::Symbols,
        StandardClass::ControlCharacters,
        StandardClass::CombiningMarks,
    ];

    /// The snake_case name used in YAML configs and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            StandardClass::WhitespacesAndNewlines => "whitespaces_and_newlines",
            StandardClass::Whitespaces => "whitespaces",
            StandardClass::Newlines => "newlines",
            StandardClass::Punctuation => "punctuation",
            StandardClass::LowercaseLetters => "lowercase_letters",
            StandardClass::UppercaseLetters => "uppercase_letters",
            StandardClass::Letters => "letters",
            StandardClass::DecimalDigits => "decimal_digits",
            StandardClass::Alphanumerics => "alphanumerics",
            StandardClass::Symbols => "symbols",
            StandardClass::ControlCharacters => "control_characters",
            StandardClass::CombiningMarks => "combining_marks",
        }
    }
}

fn is_newline(c: char) -> bool {
    matches!(c, '\u{000A}'..='\u{000D}' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

fn is_whitespace(c: char) -> bool {
    c == '\t' || c.general_category() == GeneralCategory::SpaceSeparator
}

impl CharacterClass for StandardClass {
    fn contains(&self, c: char) -> bool {
        let group = c.general_category_group();
        match self {
            StandardClass::WhitespacesAndNewlines => is_whitespace(c) || is_newline(c),
            StandardClass::Whitespaces => is_whitespace(c),
            StandardClass::Newlines => is_newline(c),
            StandardClass::Punctuation => group == GeneralCategoryGroup::Punctuation,
            StandardClass::LowercaseLetters => c.general_category() == GeneralCategory::LowercaseLetter,
            StandardClass::UppercaseLetters => matches!(
                c.general_category(),
                GeneralCategory::UppercaseLetter | GeneralCategory::TitlecaseLetter
            ),
            StandardClass::Letters => {
                matches!(group, GeneralCategoryGroup::Letter | GeneralCategoryGroup::Mark)
            }
            StandardClass::DecimalDigits => c.general_category() == GeneralCategory::DecimalNumber,
            StandardClass::Alphanumerics => matches!(
                group,
                GeneralCategoryGroup::Letter | GeneralCategoryGroup::Mark | GeneralCategoryGroup::Number
            ),
            StandardClass::Symbols => group == GeneralCategoryGroup::Symbol,
            StandardClass::ControlCharacters => {
                matches!(c.general_category(), GeneralCategory::Control | GeneralCategory::Format)
            }
            StandardClass::CombiningMarks => group == GeneralCategoryGroup::Mark,
        }
    }
}

static CLASS_NAMES: Lazy<HashMap<&'static str, StandardClass>> = Lazy::new(|| {
    StandardClass::ALL.iter().map(|class| (class.name(), *class)).collect()
});

impl FromStr for StandardClass {
    type Err = GlyphGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        CLASS_NAMES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| GlyphGuardError::UnknownCharacterClass(s.to_string()))
    }
}

impl fmt::Display for StandardClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An explicit set of scalars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: BTreeSet<char>,
}

impl CharSet {
    pub fn new(chars: &str) -> Self {
        chars.chars().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn insert(&mut self, c: char) -> bool {
        self.chars.insert(c)
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self { chars: iter.into_iter().collect() }
    }
}

impl CharacterClass for CharSet {
    fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

/// A runtime union of standard classes plus explicit extra scalars.
///
/// This is what a [`crate::config::ReplacementRule`] compiles into, since the
/// set of classes is only known once the config has been read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: Vec<StandardClass>,
    extra: CharSet,
}

impl ClassSet {
    pub fn new(classes: &[StandardClass], extra: &str) -> Self {
        let mut classes = classes.to_vec();
        classes.sort();
        classes.dedup();
        Self { classes, extra: CharSet::new(extra) }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.extra.is_empty()
    }

    pub fn classes(&self) -> &[StandardClass] {
        &self.classes
    }
}

impl CharacterClass for ClassSet {
    fn contains(&self, c: char) -> bool {
        self.extra.contains(c) || self.classes.iter().any(|class| class.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespaces_and_newlines() {
        let class = StandardClass::WhitespacesAndNewlines;
        for c in [' ', '\t', '\n', '\r', '\u{00A0}', '\u{2028}', '\u{3000}'] {
            assert!(class.contains(c), "expected U+{:04X} to be whitespace", c as u32);
        }
        assert!(!class.contains('a'));
        assert!(!class.contains('\u{200B}'));
    }

    #[test]
    fn test_newlines_excludes_plain_space() {
        assert!(StandardClass::Newlines.contains('\n'));
        assert!(StandardClass::Newlines.contains('\u{0085}'));
        assert!(!StandardClass::Newlines.contains(' '));
        assert!(!StandardClass::Whitespaces.contains('\n'));
    }

    #[test]
    fn test_letter_case_classes() {
        assert!(StandardClass::LowercaseLetters.contains('a'));
        assert!(StandardClass::LowercaseLetters.contains('ß'));
        assert!(!StandardClass::LowercaseLetters.contains('Z'));
        assert!(StandardClass::UppercaseLetters.contains('Z'));
        assert!(StandardClass::UppercaseLetters.contains('\u{01C5}'));
        assert!(!StandardClass::UppercaseLetters.contains('1'));
    }

    #[test]
    fn test_punctuation_and_symbols() {
        for c in ['.', ',', '!', '-', '«', '¿'] {
            assert!(StandardClass::Punctuation.contains(c), "{c} should be punctuation");
        }
        assert!(!StandardClass::Punctuation.contains('+'));
        assert!(StandardClass::Symbols.contains('+'));
        assert!(StandardClass::Symbols.contains('€'));
    }

    #[test]
    fn test_combining_marks_class() {
        assert!(StandardClass::CombiningMarks.contains('\u{0301}'));
        assert!(StandardClass::CombiningMarks.contains('\u{20DD}'));
        assert!(!StandardClass::CombiningMarks.contains('e'));
        assert!(StandardClass::Letters.contains('\u{0301}'));
    }

    #[test]
    fn test_union_combinator() {
        let class = StandardClass::Punctuation.union(StandardClass::LowercaseLetters);
        assert!(class.contains('.'));
        assert!(class.contains('q'));
        assert!(!class.contains('Q'));
        assert!(!class.contains(' '));
    }

    #[test]
    fn test_closure_is_a_class() {
        let vowels = |c: char| "aeiou".contains(c);
        let class = vowels.union(CharSet::new("xyz"));
        assert!(class.contains('e'));
        assert!(class.contains('y'));
        assert!(!class.contains('b'));
    }

    #[test]
    fn test_parse_class_names() {
        assert_eq!("punctuation".parse::<StandardClass>().unwrap(), StandardClass::Punctuation);
        assert_eq!(
            "Lowercase-Letters".parse::<StandardClass>().unwrap(),
            StandardClass::LowercaseLetters
        );
        for class in StandardClass::ALL {
            assert_eq!(class.to_string().parse::<StandardClass>().unwrap(), class);
        }
        let err = "emoji".parse::<StandardClass>().unwrap_err();
        assert!(matches!(err, GlyphGuardError::UnknownCharacterClass(name) if name == "emoji"));
    }

    #[test]
    fn test_class_set_dedupes_and_matches_extra() {
        let set = ClassSet::new(
            &[StandardClass::DecimalDigits, StandardClass::DecimalDigits],
            "_",
        );
        assert_eq!(set.classes(), &[StandardClass::DecimalDigits]);
        assert!(set.contains('7'));
        assert!(set.contains('_'));
        assert!(!set.contains('a'));
        assert!(ClassSet::default().is_empty());
    }
}
