//! Reversal method identifiers

use crate::algorithms;
use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// One of the six reversal strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Method {
    /// Growable buffer filled back to front
    Builder,
    /// In-place swap of symmetric index pairs
    TwoPointers,
    /// Head/tail recursion
    Recursion,
    /// Explicit LIFO stack
    Stack,
    /// Naive repeated string concatenation
    Loop,
    /// Reverse each word, keep word order
    Words,
}

impl Method {
    /// All methods in display order
    pub const ALL: [Method; 6] = [
        Method::Builder,
        Method::TwoPointers,
        Method::Recursion,
        Method::Stack,
        Method::Loop,
        Method::Words,
    ];

    /// Label printed next to the result in the interactive session
    pub fn label(&self) -> &'static str {
        match self {
            Method::Builder => "Using StringBuilder",
            Method::TwoPointers => "Using Two Pointers",
            Method::Recursion => "Using Recursion",
            Method::Stack => "Using Stack",
            Method::Loop => "Using Simple Loop",
            Method::Words => "Reverse Words Only",
        }
    }

    /// Short name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Method::Builder => "builder",
            Method::TwoPointers => "two-pointers",
            Method::Recursion => "recursion",
            Method::Stack => "stack",
            Method::Loop => "loop",
            Method::Words => "words",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            Method::Builder => "append chars back to front into a growable buffer, O(n)",
            Method::TwoPointers => "swap symmetric pairs of a char buffer in place, O(n)",
            Method::Recursion => "reverse the suffix then append the head, O(n) call depth",
            Method::Stack => "push every char onto a stack and pop them all, O(n)",
            Method::Loop => "concatenate chars from last to first into fresh strings, O(n^2)",
            Method::Words => "reverse each space-separated word, keep word order",
        }
    }

    /// Apply the method with default limits
    pub fn apply(&self, text: &str) -> String {
        match self {
            Method::Builder => algorithms::reverse_with_builder(text),
            Method::TwoPointers => algorithms::reverse_with_two_pointers(text),
            Method::Recursion => algorithms::reverse_with_recursion(text),
            Method::Stack => algorithms::reverse_with_stack(text),
            Method::Loop => algorithms::reverse_with_loop(text),
            Method::Words => algorithms::reverse_words(text),
        }
    }

    /// Apply the method to possibly absent text; `None` passes through
    pub fn apply_opt(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.apply(t))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Method::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| CoreError::UnknownMethod(s.to_string()))
    }
}
