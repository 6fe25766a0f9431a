//! Relevance ranking of bills against an investment description.
//!
//! TF-IDF vectors with cosine similarity, vocabulary and document frequencies
//! fitted jointly over {bills ∪ query} so query terms are never unseen.
//! Smoothed idf `ln((1+n)/(1+df)) + 1` and L2 normalisation, matching the
//! conventional vectorizer defaults the scoring rules were tuned against.

use std::collections::{BTreeMap, BTreeSet};

use polisight_core::{Bill, RankedBill};
use tracing::debug;

/// Common English words excluded from the vocabulary before weighting.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can", "cannot", "could", "did",
    "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "him", "his", "how", "if", "in", "into", "is", "it", "its", "itself",
    "me", "more", "most", "my", "no", "nor", "not", "of", "off", "on", "once",
    "only", "or", "other", "our", "out", "over", "own", "same", "shall",
    "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "upon", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "would", "you", "your",
];

/// Score and order bills by relevance to the investment description.
///
/// Output is sorted descending by score, stable for ties, and deterministic
/// for identical inputs. Two short-circuits, neither an error: an empty bill
/// set returns empty, and an empty/whitespace description returns the bills
/// in registry order carrying full relevance (ranking is skipped, so every
/// bill keeps its unattenuated weight in aggregation).
pub fn rank_bills(bills: Vec<Bill>, description: &str) -> Vec<RankedBill> {
    if bills.is_empty() || description.trim().is_empty() {
        return bills
            .into_iter()
            .map(|bill| RankedBill {
                bill,
                relevance: 1.0,
            })
            .collect();
    }

    let docs: Vec<Vec<String>> = bills.iter().map(|b| tokenize(&b.corpus_text())).collect();
    let query = tokenize(description);

    let mut corpus: Vec<&[String]> = docs.iter().map(Vec::as_slice).collect();
    corpus.push(&query);
    let model = TfIdfModel::fit(&corpus);
    debug!(
        bills = docs.len(),
        vocabulary = model.vocabulary_len(),
        "fitted tf-idf model"
    );

    let query_vec = model.vectorize(&query);
    let mut ranked: Vec<RankedBill> = bills
        .into_iter()
        .zip(&docs)
        .map(|(bill, doc)| {
            let relevance = cosine(&query_vec, &model.vectorize(doc)).clamp(0.0, 1.0);
            RankedBill { bill, relevance }
        })
        .collect();

    // Stable sort keeps registry order for equal scores.
    ranked.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Lowercase word tokens of at least two alphanumeric characters, stop words
/// removed.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2 && !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Smoothed inverse document frequencies over a fitted corpus.
///
/// BTreeMap keeps term iteration in a fixed order so repeated invocations
/// produce bit-identical scores.
struct TfIdfModel {
    idf: BTreeMap<String, f64>,
}

impl TfIdfModel {
    fn fit(corpus: &[&[String]]) -> Self {
        let n = corpus.len() as f64;
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in corpus {
            let unique: BTreeSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let idf = df
            .into_iter()
            .map(|(term, count)| {
                let idf = ((1.0 + n) / (1.0 + count as f64)).ln() + 1.0;
                (term.to_string(), idf)
            })
            .collect();
        Self { idf }
    }

    fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }

    /// L2-normalised tf-idf vector for one tokenised document.
    fn vectorize(&self, doc: &[String]) -> BTreeMap<&str, f64> {
        let mut weights: BTreeMap<&str, f64> = BTreeMap::new();
        for token in doc {
            if let Some((term, idf)) = self.idf.get_key_value(token.as_str()) {
                // Accumulating idf per occurrence equals tf × idf.
                *weights.entry(term.as_str()).or_insert(0.0) += *idf;
            }
        }

        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for w in weights.values_mut() {
                *w /= norm;
            }
        }
        weights
    }
}

/// Dot product of two L2-normalised sparse vectors.
fn cosine(a: &BTreeMap<&str, f64>, b: &BTreeMap<&str, f64>) -> f64 {
    a.iter()
        .filter_map(|(term, w)| b.get(term).map(|v| w * v))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(title: &str) -> Bill {
        Bill {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn scores_in_range_and_sorted_descending() {
        let bills = vec![
            bill("Motor Vehicle Emissions Standards"),
            bill("Affordable Housing Tax Credit Act"),
            bill("Housing Development Streamlining"),
        ];
        let ranked = rank_bills(bills, "affordable housing tax credit program");

        assert_eq!(ranked.len(), 3);
        for rb in &ranked {
            assert!((0.0..=1.0).contains(&rb.relevance), "score {}", rb.relevance);
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
        assert_eq!(
            ranked[0].bill.title.as_deref(),
            Some("Affordable Housing Tax Credit Act")
        );
    }

    #[test]
    fn identical_text_scores_near_one() {
        let bills = vec![bill("affordable housing credit"), bill("motor vehicle emissions")];
        let ranked = rank_bills(bills, "affordable housing credit");
        assert!(ranked[0].relevance > 0.99, "got {}", ranked[0].relevance);
        assert!(ranked[1].relevance < ranked[0].relevance);
    }

    #[test]
    fn deterministic_across_invocations() {
        let make = || {
            vec![
                bill("Affordable Housing Tax Credit Act"),
                bill("Short-Term Rental Restrictions"),
                bill("Education Grant Expansion"),
            ]
        };
        let first = rank_bills(make(), "housing tax credit");
        let second = rank_bills(make(), "housing tax credit");
        let a: Vec<f64> = first.iter().map(|r| r.relevance).collect();
        let b: Vec<f64> = second.iter().map(|r| r.relevance).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_bill_set_short_circuits() {
        assert!(rank_bills(Vec::new(), "housing").is_empty());
    }

    #[test]
    fn empty_description_skips_ranking() {
        let bills = vec![bill("First"), bill("Second")];
        let ranked = rank_bills(bills, "   ");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].bill.title.as_deref(), Some("First"));
        assert_eq!(ranked[1].bill.title.as_deref(), Some("Second"));
        assert!(ranked.iter().all(|r| r.relevance == 1.0));
    }

    #[test]
    fn stop_word_only_description_scores_zero() {
        // "the of and" survives the whitespace check but tokenises to nothing.
        let ranked = rank_bills(vec![bill("Housing Act")], "the of and");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].relevance, 0.0);
    }

    #[test]
    fn ties_preserve_registry_order() {
        let mut first = bill("Housing Act");
        first.identifier = Some("AB 1".into());
        let mut second = bill("Housing Act");
        second.identifier = Some("AB 2".into());

        let ranked = rank_bills(vec![first, second], "housing act reform");
        assert_eq!(ranked[0].relevance, ranked[1].relevance);
        assert_eq!(ranked[0].bill.identifier.as_deref(), Some("AB 1"));
        assert_eq!(ranked[1].bill.identifier.as_deref(), Some("AB 2"));
    }

    #[test]
    fn missing_fields_rank_as_empty_text() {
        let ranked = rank_bills(vec![Bill::default(), bill("Housing Act")], "housing");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].bill.title.as_deref(), Some("Housing Act"));
        assert_eq!(ranked[1].relevance, 0.0);
    }
}
