use crate::analyzer::lexicon::CategoryDefinition;
use crate::model::{Category, ClassifierError};
use regex::Regex;

/// Whole-word pattern for one keyword together with its tier weight.
#[derive(Debug)]
struct WeightedPattern {
    pattern: Regex,
    weight: f64,
}

/// A category definition with every keyword compiled once.
#[derive(Debug)]
pub struct CompiledCategory {
    pub category: Category,
    patterns: Vec<WeightedPattern>,
}

impl CompiledCategory {
    pub fn compile(def: &CategoryDefinition) -> Result<Self, ClassifierError> {
        let mut patterns = Vec::new();

        for (tier, keywords) in &def.tiers {
            // Every list entry is scored, repeats included.
            for &keyword in keywords.iter() {
                let source = format!(r"\b{}\b", regex::escape(&keyword.to_lowercase()));
                let pattern = Regex::new(&source).map_err(|e| ClassifierError::Pattern {
                    keyword: keyword.to_string(),
                    source: e,
                })?;
                patterns.push(WeightedPattern {
                    pattern,
                    weight: tier.weight(),
                });
            }
        }

        Ok(Self {
            category: def.category,
            patterns,
        })
    }

    /// Sum over all keywords of occurrence count times tier weight.
    /// `text` must already be normalized.
    pub fn score(&self, text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }

        self.patterns
            .iter()
            .map(|p| p.pattern.find_iter(text).count() as f64 * p.weight)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::lexicon::definition;
    use crate::model::Tier;
    use crate::normalizer::normalize_text;

    fn compiled(category: Category) -> CompiledCategory {
        CompiledCategory::compile(definition(category).unwrap()).unwrap()
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(compiled(Category::OfficeSupplies).score(""), 0.0);
    }

    #[test]
    fn substring_of_longer_word_does_not_count() {
        let office = compiled(Category::OfficeSupplies);
        assert_eq!(office.score("open"), 0.0);
        assert_eq!(office.score("pen"), 3.0);
    }

    #[test]
    fn repeated_keywords_all_count() {
        let hw = compiled(Category::ComputerHardware);
        assert_eq!(hw.score("laptop laptop laptop"), 9.0);
    }

    #[test]
    fn tiers_apply_their_weights() {
        let hw = compiled(Category::ComputerHardware);
        assert_eq!(hw.score("laptop"), 3.0);
        assert_eq!(hw.score("cable"), 2.0);
        assert_eq!(hw.score("tech"), 1.0);
    }

    #[test]
    fn multi_word_keywords_match_but_hyphenated_ones_never_do() {
        let office = compiled(Category::OfficeSupplies);
        assert_eq!(office.score(&normalize_text(Some("Sticky-Note"))), 3.0);
        // normalized text has no hyphens left for "post-it" to match
        assert_eq!(office.score(&normalize_text(Some("Post-It"))), 0.0);
        let industrial = compiled(Category::Industrial);
        assert_eq!(industrial.score(&normalize_text(Some("Hi-Vis"))), 0.0);
    }

    #[test]
    fn keyword_listed_twice_in_a_tier_counts_twice() {
        let industrial = compiled(Category::Industrial);
        assert_eq!(industrial.score("ppe"), 6.0);
        let furniture = compiled(Category::Furniture);
        assert_eq!(furniture.score("workstation"), 6.0);
    }

    #[test]
    fn same_keyword_in_two_tiers_scores_in_both() {
        let medical = compiled(Category::Medical);
        // "medical" is high and low
        assert_eq!(medical.score("medical"), Tier::High.weight() + Tier::Low.weight());
    }

    #[test]
    fn case_is_folded_by_normalization() {
        let hw = compiled(Category::ComputerHardware);
        let upper = hw.score(&normalize_text(Some("COMPUTER")));
        let lower = hw.score(&normalize_text(Some("computer")));
        assert_eq!(upper, lower);
        assert_eq!(upper, 3.0);
    }
}
