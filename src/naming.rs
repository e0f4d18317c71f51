//! Property-name resolution strategies.
//!
//! Each element codename is turned into the property name used in the
//! generated declaration. Callers pick a built-in convention by
//! identifier, supply their own resolver function, or leave names
//! untouched. The generated type name itself always uses the fixed
//! declaration-name convention, independent of the property strategy.

use crate::error::GeneratorError;
use std::str::FromStr;

/// Caller-supplied resolver: (type codename, element codename) -> property name.
pub type ResolverFn = dyn Fn(&str, &str) -> String + Send + Sync;

/// Built-in naming conventions, selected by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinResolver {
    CamelCase,
    PascalCase,
    SnakeCase,
}

impl BuiltinResolver {
    /// Apply this convention to an element codename.
    pub fn apply(&self, codename: &str) -> String {
        match self {
            Self::CamelCase => to_camel_case(codename),
            Self::PascalCase => to_pascal_case(codename),
            Self::SnakeCase => to_snake_case(codename),
        }
    }
}

impl FromStr for BuiltinResolver {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camelCase" => Ok(Self::CamelCase),
            "PascalCase" => Ok(Self::PascalCase),
            "snake_case" => Ok(Self::SnakeCase),
            other => Err(GeneratorError::invalid_resolver(other)),
        }
    }
}

/// The strategy decided once per generation call.
pub enum NameResolution<'a> {
    /// No resolver configured: codenames pass through unchanged.
    Identity,

    /// One of the built-in conventions.
    Builtin(BuiltinResolver),

    /// Caller-supplied function; its output is used verbatim.
    Custom(&'a ResolverFn),
}

impl NameResolution<'_> {
    /// Resolve the property name for one element.
    pub fn resolve(&self, type_codename: &str, element_codename: &str) -> String {
        match self {
            Self::Identity => element_codename.to_string(),
            Self::Builtin(resolver) => resolver.apply(element_codename),
            Self::Custom(resolver) => resolver(type_codename, element_codename),
        }
    }
}

/// The fixed convention for generated type names: PascalCase of the
/// content-type codename, regardless of the property-name strategy.
pub fn declaration_name(codename: &str) -> String {
    to_pascal_case(codename)
}

/// Convert to camelCase ("body_text" -> "bodyText", "Title" -> "title").
pub fn to_camel_case(s: &str) -> String {
    let words = split_words(s);
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            result.push_str(word);
        } else {
            result.push_str(&capitalize(word));
        }
    }
    result
}

/// Convert to PascalCase ("body_text" -> "BodyText").
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| capitalize(w))
        .collect()
}

/// Convert to snake_case ("bodyText" -> "body_text").
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Split an identifier into lowercase words on separators and case
/// boundaries ("urlSlug" -> ["url", "slug"], "URLSlug" -> ["url", "slug"]).
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // Boundary after a lowercase/digit run, or at the last
            // capital of an acronym run ("URLSlug" -> url | slug).
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
