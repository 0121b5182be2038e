//! Element id templating for repeatable requirement blocks.
//!
//! The original dashboard cloned a DOM fragment and rewrote ids with a
//! regex. Here the template is a structured model: a fixed set of base ids
//! that gets instantiated with a fresh numeric suffix per block, and labels
//! reference the instantiated ids directly.

/// Strips a trailing `_<digits>` suffix if present.
pub fn base_id(id: &str) -> &str {
    match id.rsplit_once('_') {
        Some((base, digits)) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            base
        }
        _ => id,
    }
}

/// Applies suffix `n` to an id. Ids already carrying a numeric suffix have
/// it replaced; everything else gets `_<n>` appended.
pub fn with_suffix(id: &str, n: u32) -> String {
    format!("{}_{}", base_id(id), n)
}

/// The base ids of one requirement block, captured once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTemplate {
    pub root: &'static str,
    pub job_function: &'static str,
    pub level1: &'static str,
    pub level2: &'static str,
    pub level3: &'static str,
    pub keywords: &'static str,
}

/// Instantiated ids for one rendered block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockIds {
    pub suffix: u32,
    pub root: String,
    pub job_function: String,
    pub level1: String,
    pub level2: String,
    pub level3: String,
    pub keywords: String,
}

/// Base ids used by the requirements section of the process form.
pub const REQUIREMENTS_TEMPLATE: BlockTemplate = BlockTemplate {
    root: "requirements_box",
    job_function: "function",
    level1: "level",
    level2: "level2",
    level3: "level3",
    keywords: "keywords",
};

impl BlockTemplate {
    pub fn instantiate(&self, n: u32) -> BlockIds {
        BlockIds {
            suffix: n,
            root: with_suffix(self.root, n),
            job_function: with_suffix(self.job_function, n),
            level1: with_suffix(self.level1, n),
            level2: with_suffix(self.level2, n),
            level3: with_suffix(self.level3, n),
            keywords: with_suffix(self.keywords, n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids_of(ids: &BlockIds) -> [&str; 6] {
        [
            &ids.root,
            &ids.job_function,
            &ids.level1,
            &ids.level2,
            &ids.level3,
            &ids.keywords,
        ]
    }

    #[test]
    fn numeric_suffix_is_replaced() {
        assert_eq!(with_suffix("level2_3", 7), "level2_7");
        assert_eq!(with_suffix("function_12", 2), "function_2");
    }

    #[test]
    fn other_ids_get_the_suffix_appended() {
        assert_eq!(with_suffix("keywords", 4), "keywords_4");
        assert_eq!(with_suffix("a_b", 1), "a_b_1");
        assert_eq!(with_suffix("trailing_", 1), "trailing__1");
    }

    #[test]
    fn instantiating_n_blocks_yields_unique_ids() {
        let mut seen = HashSet::new();
        for n in 1..=20 {
            let ids = REQUIREMENTS_TEMPLATE.instantiate(n);
            for id in ids_of(&ids) {
                assert!(seen.insert(id.to_string()), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 20 * 6);
    }

    #[test]
    fn level_ids_stay_distinct_per_block() {
        let ids = REQUIREMENTS_TEMPLATE.instantiate(3);
        assert_eq!(ids.level1, "level_3");
        assert_eq!(ids.level2, "level2_3");
        assert_eq!(ids.level3, "level3_3");
    }
}
