// SPDX-License-Identifier: MPL-2.0
//! Utility-class composition.
//!
//! Glass surfaces describe themselves with the same utility-class vocabulary
//! as the web design system they mirror (`bg-white/50`, `shadow-lg`, ...), so
//! style snapshots stay comparable across front ends.

use std::fmt;

/// Ordered, space-separated list of class names.
///
/// Empty and whitespace-only parts are skipped, and each part is trimmed.
/// Parts are never deduplicated or reordered: later parts are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    parts: Vec<String>,
}

impl ClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a part, ignoring it when blank.
    pub fn push(&mut self, part: impl AsRef<str>) {
        let part = part.as_ref().trim();
        if !part.is_empty() {
            self.parts.push(part.to_string());
        }
    }

    /// Appends an optional part.
    pub fn push_opt(&mut self, part: Option<impl AsRef<str>>) {
        if let Some(part) = part {
            self.push(part);
        }
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, part: impl AsRef<str>) -> Self {
        self.push(part);
        self
    }

    /// Iterates over individual class names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.parts
            .iter()
            .flat_map(|part| part.split_whitespace())
    }

    /// Returns true when `class` appears as a whole class name.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.iter().any(|c| c == class)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join(" "))
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_parts_are_skipped() {
        let list = ClassList::new().with("a").with("").with("   ").with("b");
        assert_eq!(list.to_string(), "a b");
    }

    #[test]
    fn multi_class_parts_keep_order() {
        let list = ClassList::new()
            .with("border border-white/20")
            .with("shadow-lg");
        let classes: Vec<_> = list.iter().collect();
        assert_eq!(classes, vec!["border", "border-white/20", "shadow-lg"]);
    }

    #[test]
    fn contains_matches_whole_names_only() {
        let list = ClassList::new().with("shadow-lg");
        assert!(list.contains("shadow-lg"));
        assert!(!list.contains("shadow"));
    }

    #[test]
    fn push_opt_ignores_none() {
        let mut list = ClassList::new();
        list.push_opt(None::<&str>);
        assert_eq!(list, ClassList::new());
        list.push_opt(Some(" extra "));
        assert_eq!(list.to_string(), "extra");
    }
}
