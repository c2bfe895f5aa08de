use crate::analyzer::lexicon::DEFINITIONS;
use crate::analyzer::scoring::CompiledCategory;
use crate::config::Thresholds;
use crate::model::{Category, Classification, ClassifierError, ScoredCategory};
use crate::normalizer::normalize_text;

/// Trait defining the interface for a product classifier.
pub trait Classifier {
    fn categorize(&self, hint: Option<&str>, description: Option<&str>) -> Classification;
}

/// Weighted keyword categorizer over the static lexicon.
#[derive(Debug)]
pub struct Categorizer {
    categories: Vec<CompiledCategory>,
    thresholds: Thresholds,
}

impl Categorizer {
    pub fn new(thresholds: Thresholds) -> Result<Self, ClassifierError> {
        let categories = DEFINITIONS
            .iter()
            .map(CompiledCategory::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            categories,
            thresholds,
        })
    }

    /// Scores `text` against every scored category, in declaration order.
    /// `confidence` is each category's share of the total score mass.
    pub fn score_all(&self, text: &str) -> Vec<ScoredCategory> {
        let normalized = normalize_text(Some(text));
        let scores: Vec<(Category, f64)> = self
            .categories
            .iter()
            .map(|c| (c.category, c.score(&normalized)))
            .collect();
        let total: f64 = scores.iter().map(|(_, s)| s).sum();

        scores
            .into_iter()
            .map(|(category, score)| ScoredCategory {
                category,
                score,
                confidence: if total > 0.0 { score / total * 100.0 } else { 0.0 },
            })
            .collect()
    }
}

/// Hint twice, then the description. Blank parts are dropped.
fn combined_text(hint: Option<&str>, description: Option<&str>) -> String {
    let mut combined = String::new();

    if let Some(hint) = hint.map(str::trim).filter(|h| !h.is_empty()) {
        combined.push_str(hint);
        combined.push(' ');
        combined.push_str(hint);
        combined.push(' ');
    }
    if let Some(desc) = description.map(str::trim).filter(|d| !d.is_empty()) {
        combined.push_str(desc);
    }

    combined
}

impl Classifier for Categorizer {
    fn categorize(&self, hint: Option<&str>, description: Option<&str>) -> Classification {
        let combined = combined_text(hint, description);
        if combined.trim().is_empty() {
            return Classification::unclassified(0.0);
        }

        let scored = self.score_all(&combined);

        // First maximum wins, so ties resolve in declaration order.
        let mut best: Option<&ScoredCategory> = None;
        for candidate in &scored {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        let Some(best) = best.filter(|b| b.score > 0.0) else {
            return Classification::unclassified(0.0);
        };

        let t = &self.thresholds;
        let mut confidence = best.confidence;

        let mut sorted: Vec<f64> = scored.iter().map(|s| s.score).collect();
        sorted.sort_by(|a, b| b.total_cmp(a));
        if sorted.len() > 1 && sorted[0] - sorted[1] > sorted[0] * t.margin_ratio {
            confidence = (confidence * t.margin_boost).min(100.0);
        }

        if confidence < t.min_confidence || best.score < t.min_score {
            return Classification::unclassified(confidence);
        }

        Classification {
            category: best.category,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorizer() -> Categorizer {
        Categorizer::new(Thresholds::default()).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn blank_inputs_are_unclassified_with_zero_confidence() {
        let c = categorizer();
        for (hint, desc) in [
            (None, None),
            (Some(""), Some("")),
            (Some("   "), None),
            (None, Some("\t\n")),
        ] {
            let result = c.categorize(hint, desc);
            assert_eq!(result, Classification::unclassified(0.0));
        }
    }

    #[test]
    fn no_keyword_hit_is_unclassified_with_zero_confidence() {
        let result = categorizer().categorize(None, Some("open zebra"));
        assert_eq!(result.category, Category::Unclassified);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn laptop_with_hardware_hint() {
        let result =
            categorizer().categorize(Some("Computer Hardware"), Some("Laptop with SSD and keyboard"));
        assert_eq!(result.category, Category::ComputerHardware);
        assert!(result.confidence > 30.0, "confidence={}", result.confidence);
        assert!(result.confidence <= 100.0);
    }

    #[test]
    fn hint_is_double_weighted() {
        let c = categorizer();
        assert_eq!(combined_text(Some(" Pen "), Some(" desk ")), "Pen Pen desk");
        let scored = c.score_all(&combined_text(Some("Pen"), Some("desk")));
        let office = scored.iter().find(|s| s.category == Category::OfficeSupplies).unwrap();
        let furniture = scored.iter().find(|s| s.category == Category::Furniture).unwrap();
        assert_eq!(office.score, 6.0);
        assert_eq!(furniture.score, 3.0);
    }

    #[test]
    fn low_total_score_is_unclassified_regardless_of_confidence() {
        // "commercial" is a low-tier keyword in both office and industrial
        let result = categorizer().categorize(None, Some("commercial"));
        assert_eq!(result.category, Category::Unclassified);
        assert!(close(result.confidence, 50.0), "confidence={}", result.confidence);
    }

    #[test]
    fn single_low_keyword_keeps_boosted_confidence_but_stays_unclassified() {
        let result = categorizer().categorize(None, Some("tech"));
        assert_eq!(result.category, Category::Unclassified);
        assert!(close(result.confidence, 100.0));
    }

    #[test]
    fn margin_boost_applies_when_top_more_than_doubles_runner_up() {
        let c = categorizer();
        // hardware: laptop + keyboard + ssd = 9, office: pencil = 3
        let text = "laptop keyboard ssd pencil";
        let scored = c.score_all(text);
        let total: f64 = scored.iter().map(|s| s.score).sum();
        assert_eq!(total, 12.0);
        let raw = 9.0 / total * 100.0;

        let result = c.categorize(None, Some(text));
        assert_eq!(result.category, Category::ComputerHardware);
        assert!(close(result.confidence, (raw * 1.2).min(100.0)), "confidence={}", result.confidence);
    }

    #[test]
    fn no_boost_when_gap_is_exactly_half_of_top() {
        // hardware 6, office 3: gap equals half the top score
        let result = categorizer().categorize(None, Some("laptop keyboard pencil"));
        assert_eq!(result.category, Category::ComputerHardware);
        assert!(close(result.confidence, 6.0 / 9.0 * 100.0), "confidence={}", result.confidence);
    }

    #[test]
    fn ties_resolve_in_declaration_order() {
        // office "pen" = 3, furniture "desk" = 3
        let result = categorizer().categorize(None, Some("pen desk"));
        assert_eq!(result.category, Category::OfficeSupplies);
        assert!(close(result.confidence, 50.0));
    }

    #[test]
    fn repeated_list_entry_can_decide_the_winner() {
        // industrial lists "ppe" twice: 6 against office "pen" 3
        let result = categorizer().categorize(None, Some("ppe pen"));
        assert_eq!(result.category, Category::Industrial);
        assert!(close(result.confidence, 6.0 / 9.0 * 100.0), "confidence={}", result.confidence);
    }

    #[test]
    fn hyphenated_keyword_does_not_score_after_normalization() {
        let result = categorizer().categorize(None, Some("hi-vis pen"));
        assert_eq!(result.category, Category::OfficeSupplies);
        assert!(close(result.confidence, 100.0), "confidence={}", result.confidence);
    }

    #[test]
    fn case_does_not_change_the_outcome() {
        let c = categorizer();
        let upper = c.categorize(Some("COMPUTER"), Some("LAPTOP DOCK"));
        let lower = c.categorize(Some("computer"), Some("laptop dock"));
        assert_eq!(upper, lower);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let c = categorizer();
        let first = c.categorize(Some("Gloves"), Some("Nitrile gloves, powder free, box of 100"));
        let second = c.categorize(Some("Gloves"), Some("Nitrile gloves, powder free, box of 100"));
        assert_eq!(first, second);
        assert_eq!(first.category, Category::Industrial);
    }

    #[test]
    fn confidence_always_within_bounds() {
        let c = categorizer();
        let samples = [
            "monitor monitor monitor",
            "hospital bed with rolling casters",
            "Paper towel dispenser, janitorial",
            "software license and support",
            "Executive office chair, ergonomic mesh seat",
            "stainless steel screw, pack of 50",
        ];
        for text in samples {
            let result = c.categorize(Some(text), Some(text));
            assert!((0.0..=100.0).contains(&result.confidence), "{text}: {}", result.confidence);
        }
    }

    #[test]
    fn raised_min_score_rejects_weak_match() {
        let thresholds = Thresholds {
            min_score: 10.0,
            ..Thresholds::default()
        };
        let c = Categorizer::new(thresholds).unwrap();
        let result = c.categorize(None, Some("laptop"));
        assert_eq!(result.category, Category::Unclassified);
        assert!(close(result.confidence, 100.0));
    }
}
