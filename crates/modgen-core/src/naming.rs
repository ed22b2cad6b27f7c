//! Module name normalization

use crate::error::{Result, ScaffoldError};
use crate::kind::ModuleKind;
use std::fmt;

/// Hyphen, underscore, or whitespace. The ASCII information separators
/// U+001C..=U+001F count as whitespace here even though `char::is_whitespace`
/// excludes them.
fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Join the tokens of a free-text name, dropping every hyphen, underscore and
/// whitespace run. Token casing is left exactly as typed.
///
/// Empty or separator-only input yields an empty string.
pub fn normalize_name(raw: &str) -> String {
    raw.split(is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

/// A normalized, non-empty module name such as `User` or `healthKit`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Normalize `raw` and reject names with nothing left after normalization
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = normalize_name(raw);
        if normalized.is_empty() {
            return Err(ScaffoldError::EmptyName {
                raw: raw.to_string(),
            });
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package identifier for this name, e.g. `FeatureUser` or `DomainhealthKit`
    pub fn package_name(&self, kind: ModuleKind) -> String {
        format!("{}{}", kind.prefix(), self.0)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
