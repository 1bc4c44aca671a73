use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Host name used when no host filter is given.
pub const HUMAN: &str = "Human";

/// Set of host organisms to include.
///
/// The list keeps the order it was built with so it renders the way the user
/// entered it, but equality ignores order and duplicates. Serialized as a
/// plain list; deserializing goes through [`HostSelector::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct HostSelector {
    hosts: Vec<String>,
}

impl HostSelector {
    /// Builds a selector from host names, dropping blanks and duplicates.
    /// An empty result falls back to the human-only default.
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let hosts: Vec<String> = hosts
            .into_iter()
            .map(|host| host.as_ref().trim().to_string())
            .filter(|host| !host.is_empty() && seen.insert(host.clone()))
            .collect();
        if hosts.is_empty() {
            return Self::default();
        }
        Self { hosts }
    }

    pub fn human() -> Self {
        Self::default()
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn contains(&self, host: &str) -> bool {
        self.hosts.iter().any(|h| h == host)
    }

    /// Returns true for the human-only selection that is left out of URLs.
    pub fn is_default(&self) -> bool {
        self.hosts.len() == 1 && self.contains(HUMAN)
    }

    fn as_set(&self) -> BTreeSet<&str> {
        self.hosts.iter().map(String::as_str).collect()
    }
}

impl Default for HostSelector {
    fn default() -> Self {
        Self {
            hosts: vec![HUMAN.to_string()],
        }
    }
}

impl From<Vec<String>> for HostSelector {
    fn from(hosts: Vec<String>) -> Self {
        Self::new(hosts)
    }
}

impl From<HostSelector> for Vec<String> {
    fn from(selector: HostSelector) -> Self {
        selector.hosts
    }
}

impl PartialEq for HostSelector {
    fn eq(&self, other: &Self) -> bool {
        self.as_set() == other.as_set()
    }
}

impl Eq for HostSelector {}
