//! Typographic categories - the four fixed roles a style can belong to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Typographic role of a generated style.
///
/// The category set is fixed: display (hero text), title (headings),
/// body (running text), and code (monospaced text). Category identity
/// drives the size-name pool, the letter-spacing rule, and the segment
/// used in canonical style names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Hero/marketing text, the largest sizes (D1-D3)
    Display,
    /// Headings (H1-H6)
    Title,
    /// Running text (Xs through 2xl, centered on Base)
    Body,
    /// Monospaced text (Xs through Lg)
    Code,
}

impl Category {
    /// All categories in canonical processing order.
    ///
    /// This order determines the sequence of the generated style set:
    /// display first, code last. Downstream consumers must not rely on
    /// it for correctness, only for display.
    pub const ALL: [Category; 4] = [
        Category::Display,
        Category::Title,
        Category::Body,
        Category::Code,
    ];

    /// Lowercase identifier used in token keys and CSS variables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Display => "display",
            Category::Title => "title",
            Category::Body => "body",
            Category::Code => "code",
        }
    }

    /// Capitalized name used as a canonical style name segment.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Display => "Display",
            Category::Title => "Title",
            Category::Body => "Body",
            Category::Code => "Code",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_display_first() {
        assert_eq!(Category::ALL[0], Category::Display);
        assert_eq!(Category::ALL[3], Category::Code);
    }

    #[test]
    fn test_category_serde_roundtrip() {
        let json = serde_json::to_string(&Category::Body).unwrap();
        assert_eq!(json, "\"body\"");
        let parsed: Category = serde_json::from_str("\"display\"").unwrap();
        assert_eq!(parsed, Category::Display);
    }

    #[test]
    fn test_display_name_capitalization() {
        assert_eq!(Category::Title.display_name(), "Title");
        assert_eq!(Category::Title.as_str(), "title");
    }
}
