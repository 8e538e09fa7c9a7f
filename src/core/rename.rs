//! Rename transforms — pure in-place name mutation over an item sequence.

use crate::error::{Error, Result};
use crate::scene::NamedItem;

/// One rename operation with its text parameters. Constructed once per
/// invocation and never mutated mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOp {
    /// Replace every non-overlapping occurrence of `find` with `replace`
    /// in names that contain `find`.
    FindReplace { find: String, replace: String },
    /// Prepend `prefix` to every name.
    Prefix { prefix: String },
    /// Append `suffix` to every name.
    Suffix { suffix: String },
}

impl RenameOp {
    /// Build an op from its kind label plus the text parameters the caller
    /// supplied. Parameters not used by the kind are ignored.
    pub fn from_parts(
        op: &str,
        find: &str,
        replace: &str,
        prefix: &str,
        suffix: &str,
    ) -> Result<Self> {
        match op {
            "find-replace" => Ok(RenameOp::FindReplace {
                find: find.to_string(),
                replace: replace.to_string(),
            }),
            "prefix" => Ok(RenameOp::Prefix {
                prefix: prefix.to_string(),
            }),
            "suffix" => Ok(RenameOp::Suffix {
                suffix: suffix.to_string(),
            }),
            _ => Err(Error::invalid_argument(
                "op",
                format!("Unknown operation '{}'. Use: find-replace, prefix, suffix", op),
            )),
        }
    }
}

/// Apply `op` to every item in order, returning how many items changed.
///
/// FindReplace counts an item iff its current name contains `find` as a
/// literal substring; all occurrences are replaced in one pass. An empty
/// `find` is contained in every name, so it counts every item — inherited
/// host behavior, kept for compatibility. Prefix and Suffix touch every
/// item unconditionally and compound on repeated application.
///
/// Names are never validated or deduplicated; any resulting string stands.
pub fn apply_rename(items: &mut [NamedItem], op: &RenameOp) -> usize {
    let mut renamed = 0;
    for item in items.iter_mut() {
        match op {
            RenameOp::FindReplace { find, replace } => {
                if item.name.contains(find.as_str()) {
                    item.name = item.name.replace(find.as_str(), replace);
                    renamed += 1;
                }
            }
            RenameOp::Prefix { prefix } => {
                item.name = format!("{}{}", prefix, item.name);
                renamed += 1;
            }
            RenameOp::Suffix { suffix } => {
                item.name = format!("{}{}", item.name, suffix);
                renamed += 1;
            }
        }
    }
    renamed
}
