//! Parsed recipe statements.

use std::collections::HashMap;

/// Arguments of one statement, in the order they were written.
pub type Arguments = Vec<String>;

/// Recipe statements grouped by instruction keyword.
///
/// Keywords are stored uppercased. Within a group, statements keep the
/// order they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeStatements {
    groups: HashMap<String, Vec<Arguments>>,
}

impl RecipeStatements {
    /// Creates an empty set of statements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a statement to its instruction's group.
    pub fn push(&mut self, instruction: &str, arguments: Arguments) {
        self.groups
            .entry(instruction.to_ascii_uppercase())
            .or_default()
            .push(arguments);
    }

    /// Returns the statements declared for an instruction, in file order.
    ///
    /// The lookup is case-insensitive.
    #[must_use]
    pub fn get(&self, instruction: &str) -> &[Arguments] {
        self.groups
            .get(&instruction.to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of distinct instructions declared.
    #[must_use]
    pub fn instruction_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no statement was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
