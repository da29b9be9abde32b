//! Gini impurity, information gain, and the greedy best-split search.
//!
//! Everything here operates on *row index subsets* of the training table
//! rather than on cloned rows, so partitioning a node costs two index
//! vectors instead of two copies of the data.

use indexmap::{IndexMap, IndexSet};

use crate::question::Question;
use crate::table::Table;

/// Gini impurity of a label-count distribution: `1 - Σ (c_i / n)²`.
///
/// Zero for a pure set, `1 - 1/k` for `k` equally frequent labels. The
/// distribution must be non-empty; impurity of an empty set is undefined
/// and callers never ask for it.
pub(crate) fn gini(counts: &IndexMap<String, u32>) -> f64 {
    let total: u32 = counts.values().sum();
    let n = f64::from(total);

    1.0 - counts
        .values()
        .map(|&c| {
            let p = f64::from(c) / n;
            p * p
        })
        .sum::<f64>()
}

/// Weighted impurity reduction of a candidate split.
///
/// `parent - p·gini(yes) - (1-p)·gini(no)` where `p` is the fraction of
/// rows on the `yes` side. Never clamped: floating point can make it
/// marginally negative on pathological input, and the search compares it
/// against the best seen rather than against zero.
pub(crate) fn information_gain(
    yes_counts: &IndexMap<String, u32>,
    no_counts: &IndexMap<String, u32>,
    parent_impurity: f64,
) -> f64 {
    let n_yes: u32 = yes_counts.values().sum();
    let n_no: u32 = no_counts.values().sum();
    let p = f64::from(n_yes) / f64::from(n_yes + n_no);

    parent_impurity - p * gini(yes_counts) - (1.0 - p) * gini(no_counts)
}

/// Split a row subset into (matching, non-matching) halves of a question.
pub(crate) fn partition(
    table: &Table,
    indices: &[usize],
    question: &Question,
) -> (Vec<usize>, Vec<usize>) {
    let col = table
        .columns
        .iter()
        .position(|c| c == &question.column)
        .expect("question column should come from this table");

    let mut yes = Vec::new();
    let mut no = Vec::new();

    for &i in indices {
        if question.matches(&table.rows[i][col]) {
            yes.push(i);
        } else {
            no.push(i);
        }
    }

    (yes, no)
}

/// Greedy search for the question with the highest information gain.
///
/// Candidates are enumerated feature column by feature column, and within a
/// column over its distinct values in first-seen row order. A candidate
/// whose partition leaves either side empty separates nothing and is
/// discarded outright. A candidate whose gain is **greater than or equal**
/// to the best seen replaces it, so ties go to the later-examined
/// candidate. Both the enumeration order and the `>=` tie rule are part of
/// the contract: they make trees reproducible on data with tied gains.
///
/// Returns the best gain together with the winning question. The question
/// is `None` only when no candidate was ever admitted, i.e. the subset is
/// pure or unsplittable. Note the converse does not hold: a question may be
/// returned with a gain of exactly zero, and the tree builder treats that
/// as "no beneficial split" all the same.
pub(crate) fn find_best_split(table: &Table, indices: &[usize]) -> (f64, Option<Question>) {
    let parent_impurity = gini(&table.label_counts(indices));

    let mut best_gain = 0.0;
    let mut best_question = None;

    for col in 0..table.feature_count() {
        let mut seen: IndexSet<&str> = IndexSet::new();
        for &i in indices {
            seen.insert(table.rows[i][col].as_str());
        }

        for value in seen {
            let question = Question::new(&table.columns[col], value);
            let (yes, no) = partition(table, indices, &question);

            if yes.is_empty() || no.is_empty() {
                continue;
            }

            let gain = information_gain(
                &table.label_counts(&yes),
                &table.label_counts(&no),
                parent_impurity,
            );

            if gain >= best_gain {
                best_gain = gain;
                best_question = Some(question);
            }
        }
    }

    (best_gain, best_question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    fn fruit_table() -> Table {
        Table::from_str_rows(
            &["Color", "Diameter", "Label"],
            &[
                &["Green", "3", "Apple"],
                &["Yellow", "3", "Apple"],
                &["Red", "1", "Grape"],
                &["Red", "1", "Grape"],
                &["Yellow", "3", "Lemon"],
            ],
        )
    }

    fn all_rows(table: &Table) -> Vec<usize> {
        (0..table.rows.len()).collect()
    }

    #[test]
    fn gini_of_a_pure_set_is_zero() {
        let counts = indexmap! { "Apple".to_string() => 7u32 };
        assert_eq!(gini(&counts), 0.0);
    }

    #[test]
    fn gini_of_equal_classes_is_one_minus_one_over_k() {
        let two = indexmap! {
            "Apple".to_string() => 5u32,
            "Grape".to_string() => 5u32,
        };
        assert!((gini(&two) - 0.5).abs() < 1e-12);

        let four = indexmap! {
            "A".to_string() => 3u32,
            "B".to_string() => 3u32,
            "C".to_string() => 3u32,
            "D".to_string() => 3u32,
        };
        assert!((gini(&four) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn perfect_split_recovers_the_parent_impurity() {
        let parent = indexmap! {
            "Apple".to_string() => 3u32,
            "Grape".to_string() => 3u32,
        };
        let yes = indexmap! { "Apple".to_string() => 3u32 };
        let no = indexmap! { "Grape".to_string() => 3u32 };

        let gain = information_gain(&yes, &no, gini(&parent));
        assert!((gain - 0.5).abs() < 1e-12, "gain should equal parent gini");
    }

    #[test]
    fn useless_split_has_zero_gain() {
        // Both sides keep the parent's class mix, so nothing is gained.
        let yes = indexmap! {
            "Apple".to_string() => 2u32,
            "Grape".to_string() => 2u32,
        };
        let no = yes.clone();
        let parent = indexmap! {
            "Apple".to_string() => 4u32,
            "Grape".to_string() => 4u32,
        };

        let gain = information_gain(&yes, &no, gini(&parent));
        assert!(gain.abs() < 1e-12);
    }

    #[test]
    fn partition_splits_on_numeric_threshold() {
        let table = fruit_table();
        let q = Question::new("Diameter", "3");
        let (yes, no) = partition(&table, &all_rows(&table), &q);

        assert_eq!(yes, [0, 1, 4], "diameter >= 3 rows");
        assert_eq!(no, [2, 3], "the grapes");
    }

    #[test]
    fn best_split_on_fruit_is_the_diameter_threshold() {
        let table = fruit_table();
        let (gain, question) = find_best_split(&table, &all_rows(&table));

        let question = question.expect("fruit table is splittable");
        assert_eq!(question, Question::new("Diameter", "3"));
        assert!(gain > 0.0);
    }

    #[test]
    fn pure_subset_yields_no_question() {
        let table = fruit_table();
        // Rows 2 and 3 are both Grape.
        let (gain, question) = find_best_split(&table, &[2, 3]);

        assert_eq!(gain, 0.0);
        assert!(question.is_none(), "pure subset must not produce a split");
    }

    #[test]
    fn unsplittable_subset_yields_no_question() {
        // Identical feature values with different labels: every candidate
        // leaves one side empty and is discarded.
        let table = Table::from_str_rows(
            &["Color", "Label"],
            &[&["Red", "Apple"], &["Red", "Grape"]],
        );
        let (gain, question) = find_best_split(&table, &[0, 1]);

        assert_eq!(gain, 0.0);
        assert!(question.is_none());
    }

    #[test]
    fn tied_gains_go_to_the_later_candidate() {
        // Color and Shade are copies of each other, so their candidate
        // splits tie exactly. The `>=` rule must pick the later column.
        let table = Table::from_str_rows(
            &["Color", "Shade", "Label"],
            &[&["Red", "Red", "Grape"], &["Green", "Green", "Apple"]],
        );
        let (gain, question) = find_best_split(&table, &[0, 1]);

        let question = question.expect("table is splittable");
        assert!(gain > 0.0);
        assert_eq!(
            question.column, "Shade",
            "tie must resolve to the later-examined column"
        );
        assert_eq!(
            question.value, "Green",
            "and to the later-seen value within it"
        );
    }
}
