//! replace.rs - Per-scalar replacement driven by a character class.
//!
//! The input is scanned scalar by scalar. Every scalar that belongs to the
//! class is replaced by one copy of the substitution, so a run of three
//! matching scalars yields three copies. Everything else passes through in
//! order. Multi-scalar clusters may be split when only some scalars match.
//!
//! License: MIT OR APACHE 2.0

use crate::char_class::CharacterClass;

/// Result of a replacement, with the number of scalars that were substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub output: String,
    pub replaced_scalars: usize,
}

/// Replaces every `class` member in `input` with `substitution`.
pub fn replace_characters<C>(input: &str, class: &C, substitution: &str) -> String
where
    C: CharacterClass + ?Sized,
{
    replace_counted(input, class, substitution).output
}

/// Same as [`replace_characters`], also reporting how many scalars matched.
pub fn replace_counted<C>(input: &str, class: &C, substitution: &str) -> Replacement
where
    C: CharacterClass + ?Sized,
{
    let mut output = String::with_capacity(input.len());
    let mut replaced_scalars = 0usize;

    for c in input.chars() {
        if class.contains(c) {
            output.push_str(substitution);
            replaced_scalars += 1;
        } else {
            output.push(c);
        }
    }

    Replacement { output, replaced_scalars }
}

/// Extension trait so call sites read `text.replace_characters(&class, "")`.
pub trait ReplaceCharacters {
    fn replace_characters<C>(&self, class: &C, substitution: &str) -> String
    where
        C: CharacterClass + ?Sized;
}

impl ReplaceCharacters for str {
    fn replace_characters<C>(&self, class: &C, substitution: &str) -> String
    where
        C: CharacterClass + ?Sized,
    {
        replace_characters(self, class, substitution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_class::{CharSet, StandardClass};

    fn check_table<C: CharacterClass>(class: &C, substitution: &str, cases: &[(&str, &str)]) {
        for (input, expected) in cases {
            let result = input.replace_characters(class, substitution);
            assert_eq!(&result, expected, "input {:?} with substitution {:?}", input, substitution);
        }
    }

    #[test]
    fn test_remove_whitespace() {
        check_table(
            &StandardClass::WhitespacesAndNewlines,
            "",
            &[
                ("", ""),
                (" ", ""),
                ("         ", ""),
                ("a", "a"),
                ("abcd", "abcd"),
                (" abcd ", "abcd"),
                ("abcd ", "abcd"),
                (" abcd", "abcd"),
                ("ab cd", "abcd"),
                ("ab  1 cd ", "ab1cd"),
                ("ab            cd ", "abcd"),
            ],
        );
    }

    #[test]
    fn test_whitespace_scalars_each_get_a_copy() {
        check_table(
            &StandardClass::WhitespacesAndNewlines,
            "X ",
            &[
                ("", ""),
                ("abcd", "abcd"),
                (" abcd ", "X abcdX "),
                ("abcd ", "abcdX "),
                (" abcd", "X abcd"),
                ("ab cd", "abX cd"),
                ("ab  1 cd ", "abX X 1X cdX "),
            ],
        );
    }

    #[test]
    fn test_punctuation_or_lowercase_union() {
        let class = StandardClass::Punctuation.union(StandardClass::LowercaseLetters);
        check_table(
            &class,
            "",
            &[
                ("", ""),
                ("abcd", ""),
                (" abcd ", "  "),
                ("abcd ", " "),
                (" abcd", " "),
                ("ab cd", " "),
                ("ab  1 cd ", "  1  "),
                ("ab  1 ZcdX ", "  1 ZX "),
            ],
        );
    }

    #[test]
    fn test_entire_input_matching_yields_copy_per_scalar() {
        let result = replace_counted("\n\t \r\n", &StandardClass::WhitespacesAndNewlines, "<ws>");
        assert_eq!(result.output, "<ws><ws><ws><ws><ws>");
        assert_eq!(result.replaced_scalars, 5);
    }

    #[test]
    fn test_adjacent_matches_are_not_merged() {
        let result = replace_counted("a..b.c", &CharSet::new("."), "·");
        assert_eq!(result.output, "a··b·c");
        assert_eq!(result.replaced_scalars, 3);
    }

    #[test]
    fn test_multi_space_run_gets_one_copy_per_space() {
        let result = replace_counted("ab  1 cd ", &StandardClass::WhitespacesAndNewlines, "X ");
        assert_eq!(result.output, "abX X 1X cdX ");
        assert_eq!(result.replaced_scalars, 4);
    }

    #[test]
    fn test_scalar_granularity_splits_clusters() {
        // The combining acute belongs to the marks class even though it is
        // part of the "é" cluster.
        let input = "cafe\u{0301}!";
        let result = replace_characters(input, &StandardClass::CombiningMarks, "");
        assert_eq!(result, "cafe!");
    }

    #[test]
    fn test_dyn_class_and_closure() {
        let class: &dyn CharacterClass = &StandardClass::DecimalDigits;
        assert_eq!(replace_characters("a1b22c", class, "#"), "a#b##c");
        assert_eq!(replace_characters("x-y--z", &|c: char| c == '-', "_"), "x_y__z");
    }

    #[test]
    fn test_boxed_class() {
        let class: Box<dyn CharacterClass> = Box::new(CharSet::new("!?"));
        assert_eq!(replace_characters("ok?!", &*class, ""), "ok");
        assert_eq!("a!b".replace_characters(class.as_ref(), "."), "a.b");
    }

    #[test]
    fn test_no_match_is_identity() {
        let input = "Hello, wörld 👋";
        assert_eq!(replace_characters(input, &StandardClass::ControlCharacters, "?"), input);
    }
}
