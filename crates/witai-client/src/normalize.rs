//! Built-in name handling.
//!
//! Wit marks platform-provided intents and entities with a `wit$` name
//! prefix. Results handed to callers have that prefix stripped and carry an
//! `is_custom` flag instead.

use crate::types::{Entity, Intent};

/// Name prefix Wit uses for built-in intents and entities.
pub const BUILTIN_PREFIX: &str = "wit$";

/// Which results get built-in name normalization applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameNormalization {
    /// Normalize every intent and entity returned by any operation.
    #[default]
    Consistent,
    /// Normalize list results only; single-item results are returned as
    /// received, with `is_custom` left `false`.
    ListsOnly,
}

impl NameNormalization {
    /// Whether single-item results (get, create, message intents) are normalized.
    pub fn applies_to_single(self) -> bool {
        matches!(self, NameNormalization::Consistent)
    }
}

/// Split a wire name into its display name and custom flag.
///
/// ```
/// use witai_client::normalize::split_builtin;
///
/// assert_eq!(split_builtin("wit$datetime"), ("datetime", false));
/// assert_eq!(split_builtin("greeting"), ("greeting", true));
/// ```
pub fn split_builtin(name: &str) -> (&str, bool) {
    match name.strip_prefix(BUILTIN_PREFIX) {
        Some(rest) => (rest, false),
        None => (name, true),
    }
}

/// Turn a display name into the intent name Wit accepts.
///
/// Spaces become underscores one for one; runs are not collapsed.
pub fn intent_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Apply built-in name normalization in place.
pub trait Normalize {
    /// Strip the built-in prefix from the name and set `is_custom`.
    fn normalize(&mut self);
}

fn normalize_name(name: &mut String) -> bool {
    let (stripped, is_custom) = split_builtin(name);
    if !is_custom {
        *name = stripped.to_string();
    }
    is_custom
}

impl Normalize for Intent {
    fn normalize(&mut self) {
        self.is_custom = normalize_name(&mut self.name);
    }
}

impl Normalize for Entity {
    fn normalize(&mut self) {
        self.is_custom = normalize_name(&mut self.name);
    }
}

impl<T: Normalize> Normalize for Vec<T> {
    fn normalize(&mut self) {
        for item in self.iter_mut() {
            item.normalize();
        }
    }
}
