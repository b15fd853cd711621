//! A minimal JSON path matcher.
//!
//! Supports the subset of JSONPath the offer documents need:
//!
//! - `$` the root
//! - `..key` the value of `key` in any object at any depth
//! - `.key` the value of `key` in the current object
//! - `[*]` every element of the current array
//!
//! Matches are returned in document order. With `..key`, an object's
//! entries are visited in order and each entry's subtree is searched
//! before moving to the next entry, so a match nested under an earlier
//! key precedes a shallower match under a later key.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

/// Error returned when parsing a path expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid path {path:?} at offset {offset}: {reason}")]
pub struct PathError {
    path: String,
    offset: usize,
    reason: &'static str,
}

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `.key`
    Key(String),
    /// `..key`
    DescendantKey(String),
    /// `[*]`
    Each,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) => write!(f, ".{key}"),
            Step::DescendantKey(key) => write!(f, "..{key}"),
            Step::Each => f.write_str("[*]"),
        }
    }
}

/// A compiled path expression.
///
/// # Examples
///
/// ```
/// use nightjet_checker::offers::JsonPath;
/// use serde_json::json;
///
/// let path: JsonPath = "$..compartments[*].name.de".parse().unwrap();
/// let doc = json!({"a": {"compartments": [{"name": {"de": "Sitzwagen"}}]}});
///
/// assert_eq!(path.find(&doc), vec![&json!("Sitzwagen")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonPath {
    steps: Vec<Step>,
}

impl JsonPath {
    /// The path matching only the root (`$`).
    pub fn root() -> Self {
        Self::default()
    }

    /// Append `.key`.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.steps.push(Step::Key(key.into()));
        self
    }

    /// Append `..key`.
    pub fn descendant(mut self, key: impl Into<String>) -> Self {
        self.steps.push(Step::DescendantKey(key.into()));
        self
    }

    /// Append `[*]`.
    pub fn each(mut self) -> Self {
        self.steps.push(Step::Each);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Parse a path expression such as `$..offers[*]`.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let err = |offset, reason| PathError {
            path: s.to_string(),
            offset,
            reason,
        };

        if !s.starts_with('$') {
            return Err(err(0, "must start with $"));
        }

        let mut path = JsonPath::root();
        let mut pos = 1;

        while pos < s.len() {
            let tail = &s[pos..];

            if tail.starts_with("[*]") {
                path = path.each();
                pos += 3;
                continue;
            }

            let (descendant, start) = if tail.starts_with("..") {
                (true, pos + 2)
            } else if tail.starts_with('.') {
                (false, pos + 1)
            } else {
                return Err(err(pos, "expected '.', '..' or '[*]'"));
            };

            let end = s[start..]
                .find(['.', '['])
                .map_or(s.len(), |i| start + i);
            if end == start {
                return Err(err(start, "expected a key name"));
            }

            let key = &s[start..end];
            path = if descendant {
                path.descendant(key)
            } else {
                path.key(key)
            };
            pos = end;
        }

        Ok(path)
    }

    /// All values matching this path, in document order.
    pub fn find<'v>(&self, root: &'v Value) -> Vec<&'v Value> {
        let mut nodes = vec![root];

        for step in &self.steps {
            let mut next = Vec::new();
            for node in nodes {
                apply(step, node, &mut next);
            }
            nodes = next;
        }

        nodes
    }
}

fn apply<'v>(step: &Step, node: &'v Value, out: &mut Vec<&'v Value>) {
    match step {
        Step::Key(key) => {
            if let Some(child) = node.as_object().and_then(|map| map.get(key)) {
                out.push(child);
            }
        }
        Step::DescendantKey(key) => collect_key(node, key, out),
        Step::Each => {
            if let Some(items) = node.as_array() {
                out.extend(items);
            }
        }
    }
}

/// Depth-first search for `key` in textual order: a match inside an entry
/// comes before any match in the entries after it.
fn collect_key<'v>(node: &'v Value, key: &str, out: &mut Vec<&'v Value>) {
    match node {
        Value::Object(map) => {
            for (k, child) in map {
                if k == key {
                    out.push(child);
                }
                collect_key(child, key, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_key(item, key, out);
            }
        }
        _ => {}
    }
}

impl FromStr for JsonPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
