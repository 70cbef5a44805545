//! Ordered token tree keyed by path segment.
//!
//! Token objects are built by explicit recursive insertion of dot-path
//! segments rather than dynamic property walking: branches hold an
//! insertion-ordered child list, leaves hold the final JSON payload.

use serde_json::{Map, Value};

/// One node of the token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenTree {
    /// Interior node: insertion-ordered children keyed by segment
    Branch(Vec<(String, TokenTree)>),
    /// Terminal node: the token payload
    Leaf(Value),
}

impl TokenTree {
    /// An empty branch to insert into.
    #[must_use]
    pub fn new() -> Self {
        TokenTree::Branch(Vec::new())
    }

    /// Inserts a leaf at the given segment path, creating intermediate
    /// branches as needed.
    ///
    /// Inserting through an existing leaf replaces it with a branch
    /// (the leaf payload is discarded); inserting a duplicate path
    /// replaces the previous leaf. Generated style sets never produce
    /// either case because canonical names are unique.
    pub fn insert(&mut self, path: &[&str], value: Value) {
        let Some((head, rest)) = path.split_first() else {
            *self = TokenTree::Leaf(value);
            return;
        };

        if let TokenTree::Leaf(_) = self {
            *self = TokenTree::Branch(Vec::new());
        }
        let TokenTree::Branch(children) = self else {
            unreachable!("leaf replaced with branch above");
        };

        if let Some((_, child)) = children.iter_mut().find(|(key, _)| key == head) {
            child.insert(rest, value);
        } else {
            let mut child = TokenTree::new();
            child.insert(rest, value);
            children.push(((*head).to_string(), child));
        }
    }

    /// Converts the tree into a JSON value, preserving insertion order.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            TokenTree::Leaf(value) => value,
            TokenTree::Branch(children) => {
                let mut map = Map::new();
                for (key, child) in children {
                    map.insert(key, child.into_value());
                }
                Value::Object(map)
            }
        }
    }
}

impl Default for TokenTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_builds_nested_branches() {
        let mut tree = TokenTree::new();
        tree.insert(&["typography", "body", "base"], json!({"fontSize": 16}));

        let value = tree.into_value();
        assert_eq!(value["typography"]["body"]["base"]["fontSize"], 16);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut tree = TokenTree::new();
        tree.insert(&["b"], json!(1));
        tree.insert(&["a"], json!(2));
        tree.insert(&["c"], json!(3));

        let serialized = serde_json::to_string(&tree.into_value()).unwrap();
        assert_eq!(serialized, r#"{"b":1,"a":2,"c":3}"#);
    }

    #[test]
    fn test_sibling_paths_share_branches() {
        let mut tree = TokenTree::new();
        tree.insert(&["typography", "body", "sm"], json!(14));
        tree.insert(&["typography", "body", "base"], json!(16));
        tree.insert(&["typography", "title", "h1"], json!(36));

        let value = tree.into_value();
        let typography = value["typography"].as_object().unwrap();
        assert_eq!(typography.len(), 2);
        assert_eq!(value["typography"]["body"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_path_replaces_root() {
        let mut tree = TokenTree::new();
        tree.insert(&[], json!("x"));
        assert_eq!(tree.into_value(), json!("x"));
    }
}
