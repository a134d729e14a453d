//! Host label and attribute record
//!
//! `HostInfo` is the source of truth for a host's labels and attributes
//! as seen by the infrastructure. Typical usage:
//!
//! ```rust,ignore
//! let mut info = store.get(false).await?;
//! info.add_label("pool:suites");
//! store.commit(&info).await?;
//! ```

use crate::provision::BUILD_VERSION_PREFIXES;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

const BOARD_PREFIX: &str = "board";
const OS_PREFIX: &str = "os";
const POOL_PREFIX: &str = "pool";

/// Labels and attributes of a single host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    /// Ordered labels, `prefix:value` or bare
    #[serde(default)]
    pub labels: Vec<String>,

    /// Attribute key/value pairs
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl HostInfo {
    /// Create a record from labels and attributes
    pub fn new(labels: Vec<String>, attributes: BTreeMap<String, String>) -> Self {
        Self { labels, attributes }
    }

    /// Current build of the host, from the first matching build version label.
    ///
    /// Returns `None` when no build label exists, which is distinct from a
    /// build label with an empty value.
    pub fn build(&self) -> Option<&str> {
        self.build_with_prefixes(&BUILD_VERSION_PREFIXES)
    }

    /// Same lookup as [`HostInfo::build`] against an explicit prefix order.
    pub fn build_with_prefixes(&self, prefixes: &[&str]) -> Option<&str> {
        prefixes
            .iter()
            .find_map(|prefix| self.first_label_value(prefix))
    }

    /// Board of the host, or `""` if no board label exists
    pub fn board(&self) -> &str {
        self.get_label_value(BOARD_PREFIX)
    }

    /// OS of the host, or `""` if no os label exists
    pub fn os(&self) -> &str {
        self.get_label_value(OS_PREFIX)
    }

    /// All pools the host belongs to
    pub fn pools(&self) -> BTreeSet<&str> {
        self.labels_with_prefix(POOL_PREFIX).collect()
    }

    /// Value of the first `prefix:value` label, or `""` if none matches.
    pub fn get_label_value(&self, prefix: &str) -> &str {
        self.first_label_value(prefix).unwrap_or("")
    }

    fn first_label_value<'a>(&'a self, prefix: &str) -> Option<&'a str> {
        self.labels
            .iter()
            .find_map(|label| strip_label_prefix(label, prefix))
    }

    /// Values of every label carrying `prefix`, with the prefix stripped.
    ///
    /// For prefix `blah` and labels `["blah:a", "blahb", "blah:c", "doo"]`
    /// this yields `a` then `c`.
    pub fn labels_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.labels
            .iter()
            .filter_map(move |label| strip_label_prefix(label, prefix))
    }

    /// Check whether an exact label is present
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Append a label unless it is already present
    pub fn add_label(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.has_label(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    /// Remove every occurrence of a label
    pub fn remove_label(&mut self, label: &str) -> bool {
        let before = self.labels.len();
        self.labels.retain(|l| l != label);
        self.labels.len() != before
    }

    /// Replace all labels carrying `prefix` with a single `prefix:value`
    pub fn set_label_value(&mut self, prefix: &str, value: &str) {
        let full_prefix = format!("{}:", prefix);
        self.labels.retain(|l| !l.starts_with(&full_prefix));
        self.labels.push(format!("{}{}", full_prefix, value));
    }
}

fn strip_label_prefix<'a>(label: &'a str, prefix: &str) -> Option<&'a str> {
    label.strip_prefix(prefix)?.strip_prefix(':')
}

impl fmt::Display for HostInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HostInfo [Labels: {:?}, Attributes: {:?}]",
            self.labels, self.attributes
        )
    }
}
