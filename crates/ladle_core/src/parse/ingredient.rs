//! Heuristic ingredient-line parser.
//!
//! # Responsibility
//! - Split one free-text line into `{quantity, unit, name}`.
//! - Normalize unit synonyms into a small canonical vocabulary.
//!
//! # Invariants
//! - Only the leading numeric run contributes to the quantity; later
//!   numeric tokens stay part of the name text.
//! - An unparsable line degrades to a name-only ingredient, never an
//!   error.
//!
//! This is a heuristic, not a grammar. Known accepted imprecision:
//! ranges ("2-3 cups") are treated as plain name text, spelled-out
//! numbers ("two eggs") are not recognized, and unicode vulgar fractions
//! ("½ cup") are not decoded.

use crate::model::recipe::Ingredient;
use once_cell::sync::Lazy;
use regex::Regex;

static PARENTHETICAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)").expect("valid parenthetical regex"));
static FRACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)/(\d+)$").expect("valid fraction regex"));
static MIXED_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)-(\d+)/(\d+)$").expect("valid mixed number regex"));

/// Synonym table collapsing unit spellings into the canonical vocabulary.
///
/// Lookup happens on lowercased tokens with trailing `.`/`,` stripped, so
/// "Tbsp." and "tbsp" both resolve to "tablespoon".
const UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("teaspoon", "teaspoon"),
    ("teaspoons", "teaspoon"),
    ("tsp", "teaspoon"),
    ("tsps", "teaspoon"),
    ("tablespoon", "tablespoon"),
    ("tablespoons", "tablespoon"),
    ("tbsp", "tablespoon"),
    ("tbsps", "tablespoon"),
    ("tbs", "tablespoon"),
    ("cup", "cup"),
    ("cups", "cup"),
    ("ounce", "ounce"),
    ("ounces", "ounce"),
    ("oz", "ounce"),
    ("pound", "pound"),
    ("pounds", "pound"),
    ("lb", "pound"),
    ("lbs", "pound"),
    ("gram", "gram"),
    ("grams", "gram"),
    ("g", "gram"),
    ("kilogram", "kilogram"),
    ("kilograms", "kilogram"),
    ("kg", "kilogram"),
    ("milliliter", "milliliter"),
    ("milliliters", "milliliter"),
    ("millilitre", "milliliter"),
    ("millilitres", "milliliter"),
    ("ml", "milliliter"),
    ("liter", "liter"),
    ("liters", "liter"),
    ("litre", "liter"),
    ("litres", "liter"),
    ("l", "liter"),
    ("pinch", "pinch"),
    ("pinches", "pinch"),
];

/// Resolves one token to its canonical unit name.
///
/// Returns `None` for tokens outside the known-unit vocabulary.
pub fn canonical_unit(token: &str) -> Option<&'static str> {
    let normalized = token
        .trim_end_matches(['.', ','])
        .to_ascii_lowercase();
    UNIT_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == normalized)
        .map(|(_, canonical)| *canonical)
}

/// Parses one free-text ingredient line into a structured record.
///
/// Algorithm:
/// - Strip parenthetical asides, then tokenize on whitespace.
/// - Sum the leading run of numeric tokens (integers, decimals, simple
///   fractions, mixed numbers like "1 1/2" or "1-1/2") into the quantity.
/// - When a quantity exists, consume one following known-unit token as
///   the canonical unit.
/// - Everything remaining is the ingredient name.
/// - No leading numeric token: quantity stays unset, unit stays empty,
///   and the full remainder becomes the name.
pub fn parse_ingredient_line(line: &str) -> Ingredient {
    let cleaned = PARENTHETICAL_RE.replace_all(line, " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let mut quantity: Option<f64> = None;
    let mut consumed = 0;
    for token in &tokens {
        match parse_numeric_token(token) {
            Some(value) => {
                quantity = Some(quantity.unwrap_or(0.0) + value);
                consumed += 1;
            }
            None => break,
        }
    }

    if quantity.is_none() {
        return Ingredient {
            quantity: None,
            unit: String::new(),
            name: tokens.join(" "),
        };
    }

    let mut unit = String::new();
    if let Some(token) = tokens.get(consumed) {
        if let Some(canonical) = canonical_unit(token) {
            unit = canonical.to_string();
            consumed += 1;
        }
    }

    Ingredient {
        quantity,
        unit,
        name: tokens[consumed..].join(" "),
    }
}

/// Parses one token as an integer, decimal, fraction or hyphenated mixed
/// number.
///
/// Range-like tokens ("2-3") are rejected on purpose: the right-hand side
/// must be a fraction for the hyphen form to count as a quantity.
fn parse_numeric_token(token: &str) -> Option<f64> {
    if let Some(captures) = MIXED_NUMBER_RE.captures(token) {
        let whole: f64 = captures[1].parse().ok()?;
        let numerator: f64 = captures[2].parse().ok()?;
        let denominator: f64 = captures[3].parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(whole + numerator / denominator);
    }

    if let Some(captures) = FRACTION_RE.captures(token) {
        let numerator: f64 = captures[1].parse().ok()?;
        let denominator: f64 = captures[2].parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }

    // Plain integers and decimals. `parse::<f64>` alone also accepts
    // exponent and sign forms ("1e3", "-3", "inf"); restrict the alphabet
    // to keep the heuristic anchored to recipe-style numbers.
    if token.starts_with(|c: char| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
    {
        return token.parse::<f64>().ok();
    }

    None
}
