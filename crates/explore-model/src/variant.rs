use serde::{Deserialize, Serialize};

/// Filter describing one variant.
///
/// `None` leaves the field unconstrained. `Some(vec![])` on a mutation list
/// is a distinct, explicitly empty constraint and is kept as such.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSelector {
    pub pango_lineage: Option<String>,
    pub gisaid_clade: Option<String>,
    pub nextstrain_clade: Option<String>,
    pub aa_mutations: Option<Vec<String>>,
    pub nuc_mutations: Option<Vec<String>>,
    pub variant_query: Option<String>,
}

impl VariantSelector {
    pub fn pango_lineage(lineage: impl Into<String>) -> Self {
        Self {
            pango_lineage: Some(lineage.into()),
            ..Self::default()
        }
    }

    pub fn variant_query(query: impl Into<String>) -> Self {
        Self {
            variant_query: Some(query.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_aa_mutations<I, S>(mut self, mutations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aa_mutations = Some(mutations.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_nuc_mutations<I, S>(mut self, mutations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nuc_mutations = Some(mutations.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if no field constrains the variant.
    pub fn is_unconstrained(&self) -> bool {
        self == &Self::default()
    }

    /// Short human readable name, e.g. `B.1.1.7 + S:E484K`.
    pub fn display_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(self.pango_lineage.as_deref());
        parts.extend(self.gisaid_clade.as_deref());
        parts.extend(self.nextstrain_clade.as_deref());
        for list in [&self.aa_mutations, &self.nuc_mutations].into_iter().flatten() {
            parts.extend(list.iter().map(String::as_str));
        }
        parts.extend(self.variant_query.as_deref());
        if parts.is_empty() {
            return "All sequences".to_string();
        }
        parts.join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_orders_fields() {
        let selector = VariantSelector::pango_lineage("B.1.1.7")
            .with_aa_mutations(["S:E484K"])
            .with_nuc_mutations(["C3037T"]);
        assert_eq!(selector.display_name(), "B.1.1.7 + S:E484K + C3037T");
        assert_eq!(VariantSelector::default().display_name(), "All sequences");
    }

    #[test]
    fn empty_mutation_list_is_a_constraint() {
        let selector = VariantSelector::default().with_aa_mutations(Vec::<String>::new());
        assert!(!selector.is_unconstrained());
        assert!(VariantSelector::default().is_unconstrained());
    }
}
