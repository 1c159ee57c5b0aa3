//! Difference path construction
//!
//! Record fields are joined with `.`, sequence indexes and mapping keys are
//! wrapped in brackets. A length mismatch is reported at `#length`, which no
//! field name or index can produce. The root is the empty path.

/// Path of a named record field below `parent`
pub fn field(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

/// Path of a sequence element below `parent`
pub fn index(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

/// Path of a mapping entry below `parent`
///
/// Keys go in brackets so keys containing `.` (like `item.50`) stay
/// distinguishable from nested record fields.
pub fn key(parent: &str, key: &str) -> String {
    format!("{}[{}]", parent, key)
}

/// Path of the length of the sequence at `parent`
pub fn length(parent: &str) -> String {
    format!("{}#length", parent)
}

/// Human-readable rendering of a path
pub fn display(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}
