use std::collections::BTreeMap;

use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{CollectError, CollectResult},
    products::pattern::SplitPattern,
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RenderProductRepr")]
/// One named render output and its frame file pattern.
///
/// Deserializes from the host's `[name, pattern]` pair or from `{ "name", "pattern" }`.
pub struct RenderProduct {
    /// Output channel name, e.g. `beauty` or `Z`.
    pub name: String,
    /// File path without extension containing a `#` run for the frame number.
    pub pattern: String,
}

impl RenderProduct {
    /// Build a product from name and pattern.
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RenderProductRepr {
    Pair(String, String),
    Named { name: String, pattern: String },
}

impl From<RenderProductRepr> for RenderProduct {
    fn from(repr: RenderProductRepr) -> Self {
        match repr {
            RenderProductRepr::Pair(name, pattern) | RenderProductRepr::Named { name, pattern } => {
                Self { name, pattern }
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Expected output files keyed by product name, each in ascending frame order.
pub struct ExpectedFiles(BTreeMap<String, Vec<String>>);

impl ExpectedFiles {
    /// Empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files for one product.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Insert or replace the files of `name`, returning the previous list.
    pub fn insert(&mut self, name: impl Into<String>, files: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(name.into(), files)
    }

    /// Whether `name` has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no products.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Product names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(name, files)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of expected files across all products.
    pub fn file_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl IntoIterator for ExpectedFiles {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Expand every product pattern over the inclusive frame range `[start, end]` stepped by `step`.
///
/// Each product maps to one path per emitted frame, ascending. `start > end` yields an empty list
/// per product and a zero step is treated as one; neither is an error. A pattern without a `#` run
/// yields the same path for every frame.
pub fn expand_expected_files(
    products: &[RenderProduct],
    start: FrameIndex,
    end: FrameIndex,
    step: u64,
    ext: &str,
) -> ExpectedFiles {
    expand_range(products, FrameRange::unchecked(start, end, step), ext)
}

/// Same as [`expand_expected_files`] over a prepared [`FrameRange`].
#[tracing::instrument(skip(products), fields(products = products.len()))]
pub fn expand_range(products: &[RenderProduct], range: FrameRange, ext: &str) -> ExpectedFiles {
    let mut out = ExpectedFiles::new();
    for product in products {
        let split = SplitPattern::parse(&product.pattern);
        let files = range.frames().map(|f| split.render(f, ext)).collect();
        out.insert(product.name.clone(), files);
    }
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Collision handling when a product name appears in both primary and auxiliary outputs.
pub enum MergePolicy {
    /// Keep the auxiliary entry, replacing the primary one.
    #[default]
    AuxiliaryWins,
    /// Fail with [`CollectError::DuplicateProduct`].
    RejectDuplicates,
}

/// Key-union of `primary` and `auxiliary` under `policy`.
pub fn merge_expected_files(
    primary: ExpectedFiles,
    auxiliary: ExpectedFiles,
    policy: MergePolicy,
) -> CollectResult<ExpectedFiles> {
    let mut merged = primary;
    for (name, files) in auxiliary {
        if merged.contains(&name) {
            match policy {
                MergePolicy::AuxiliaryWins => {
                    tracing::warn!(product = %name, "auxiliary output replaces primary output");
                }
                MergePolicy::RejectDuplicates => {
                    return Err(CollectError::DuplicateProduct { name });
                }
            }
        }
        merged.insert(name, files);
    }
    Ok(merged)
}

#[cfg(test)]
#[path = "../../tests/unit/products/expand.rs"]
mod tests;
