use explore_model::VariantSelector;

use super::QueryCodec;
use crate::query::QueryParams;

const PANGO_LINEAGE: &str = "pangoLineage";
const GISAID_CLADE: &str = "gisaidClade";
const NEXTSTRAIN_CLADE: &str = "nextstrainClade";
const AA_MUTATIONS: &str = "aaMutations";
const NUC_MUTATIONS: &str = "nucMutations";
const VARIANT_QUERY: &str = "variantQuery";

/// Query parameter names of one variant group, without index suffix.
pub const VARIANT_FIELDS: [&str; 6] = [
    PANGO_LINEAGE,
    GISAID_CLADE,
    NEXTSTRAIN_CLADE,
    AA_MUTATIONS,
    NUC_MUTATIONS,
    VARIANT_QUERY,
];

const INDEX_SEPARATOR: char = '-';
const LIST_SEPARATOR: char = ',';

/// Returns true for `pangoLineage`, `pangoLineage-3` and the like.
pub fn is_variant_param(name: &str) -> bool {
    let base = match name.rsplit_once(INDEX_SEPARATOR) {
        Some((base, index)) if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) => {
            base
        }
        _ => name,
    };
    VARIANT_FIELDS.contains(&base)
}

/// Reads and writes one variant group, either unindexed (`pangoLineage`)
/// or with an index suffix (`pangoLineage-2`).
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantCodec {
    index: Option<usize>,
}

impl VariantCodec {
    pub fn unindexed() -> Self {
        Self { index: None }
    }

    pub fn indexed(index: usize) -> Self {
        Self { index: Some(index) }
    }

    fn key(&self, field: &str) -> String {
        match self.index {
            Some(index) => format!("{field}{INDEX_SEPARATOR}{index}"),
            None => field.to_string(),
        }
    }

    /// Returns true if any parameter of this group is present.
    pub fn is_present(&self, params: &QueryParams) -> bool {
        VARIANT_FIELDS
            .iter()
            .any(|field| params.contains(&self.key(field)))
    }

    fn read_text(&self, params: &QueryParams, field: &str) -> Option<String> {
        params.get(&self.key(field)).map(str::to_string)
    }

    fn read_list(&self, params: &QueryParams, field: &str) -> Option<Vec<String>> {
        params.get(&self.key(field)).map(|raw| {
            raw.split(LIST_SEPARATOR)
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string)
                .collect()
        })
    }
}

impl QueryCodec for VariantCodec {
    type Value = VariantSelector;

    fn read(&self, params: &QueryParams) -> VariantSelector {
        VariantSelector {
            pango_lineage: self.read_text(params, PANGO_LINEAGE),
            gisaid_clade: self.read_text(params, GISAID_CLADE),
            nextstrain_clade: self.read_text(params, NEXTSTRAIN_CLADE),
            aa_mutations: self.read_list(params, AA_MUTATIONS),
            nuc_mutations: self.read_list(params, NUC_MUTATIONS),
            variant_query: self.read_text(params, VARIANT_QUERY),
        }
    }

    fn write(&self, value: &VariantSelector, params: &mut QueryParams) {
        for field in VARIANT_FIELDS {
            params.delete(&self.key(field));
        }
        let texts = [
            (PANGO_LINEAGE, &value.pango_lineage),
            (GISAID_CLADE, &value.gisaid_clade),
            (NEXTSTRAIN_CLADE, &value.nextstrain_clade),
        ];
        for (field, text) in texts {
            if let Some(text) = text {
                params.set(&self.key(field), text.as_str());
            }
        }
        // Empty lists are written as an empty parameter, not elided.
        let lists = [
            (AA_MUTATIONS, &value.aa_mutations),
            (NUC_MUTATIONS, &value.nuc_mutations),
        ];
        for (field, list) in lists {
            if let Some(list) = list {
                params.set(&self.key(field), list.join(","));
            }
        }
        if let Some(query) = &value.variant_query {
            params.set(&self.key(VARIANT_QUERY), query.as_str());
        }
    }
}

/// Reads and writes the ordered list of variant groups of a comparison view.
///
/// A single group is written unindexed; several groups are written with
/// index suffixes starting at 0. Unconstrained groups have no parameters of
/// their own and are skipped, so the written indices have no gaps. When
/// reading, unindexed parameters win; otherwise groups are read upward from
/// index 0 until the first gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantListCodec;

impl VariantListCodec {
    /// Slice form of [`QueryCodec::write`].
    pub fn write_all(&self, value: &[VariantSelector], params: &mut QueryParams) {
        params.delete_where(is_variant_param);
        match constrained(value).as_slice() {
            [single] => VariantCodec::unindexed().write(single, params),
            groups => write_groups(groups, params),
        }
    }

    /// Writes every group with an index suffix, even a single one.
    pub fn write_indexed(&self, value: &[VariantSelector], params: &mut QueryParams) {
        params.delete_where(is_variant_param);
        write_groups(&constrained(value), params);
    }
}

fn constrained(value: &[VariantSelector]) -> Vec<&VariantSelector> {
    value
        .iter()
        .filter(|selector| !selector.is_unconstrained())
        .collect()
}

fn write_groups(groups: &[&VariantSelector], params: &mut QueryParams) {
    for (index, selector) in groups.iter().enumerate() {
        VariantCodec::indexed(index).write(selector, params);
    }
}

impl QueryCodec for VariantListCodec {
    type Value = Vec<VariantSelector>;

    fn read(&self, params: &QueryParams) -> Vec<VariantSelector> {
        let unindexed = VariantCodec::unindexed();
        if unindexed.is_present(params) {
            return vec![unindexed.read(params)];
        }
        (0..)
            .map(VariantCodec::indexed)
            .take_while(|codec| codec.is_present(params))
            .map(|codec| codec.read(params))
            .collect()
    }

    fn write(&self, value: &Vec<VariantSelector>, params: &mut QueryParams) {
        self.write_all(value, params);
    }
}
