//! Pairwise shared-theme similarity between individuals, computed from an
//! in-memory theme -> person index instead of a materialized self-join.

use std::collections::{HashMap, HashSet};

use crate::roster::Roster;
use crate::taxonomy::THEME_COUNT;

/// One directional person pair with its shared-theme count. Both (A,B) and
/// (B,A) are present; self-pairs are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityRow {
    pub a_last: String,
    pub a_first: String,
    pub b_last: String,
    pub b_first: String,
    pub shared: u32,
}

/// Full pairwise table over the whole roster, sorted by shared count
/// descending with a full-name ascending tiebreak so the output is
/// byte-stable across runs.
///
/// Identity is keyed by (last, first): two records belong to the same
/// person only when both names match, so distinct people sharing a surname
/// stay distinct.
pub fn pairwise(roster: &Roster) -> Vec<SimilarityRow> {
    // Unique persons in roster order.
    let mut ids: HashMap<(&str, &str), usize> = HashMap::new();
    let mut persons: Vec<(&str, &str)> = Vec::new();
    for rec in roster.records() {
        let key = (rec.last.as_str(), rec.first.as_str());
        ids.entry(key).or_insert_with(|| {
            persons.push(key);
            persons.len() - 1
        });
    }
    let n = persons.len();

    // Theme -> occurrence list. A duplicated (person, theme) row counts
    // once per occurrence pair, matching join semantics.
    let mut by_theme: Vec<Vec<usize>> = vec![Vec::new(); THEME_COUNT];
    for rec in roster.records() {
        let id = ids[&(rec.last.as_str(), rec.first.as_str())];
        by_theme[rec.theme_slot].push(id);
    }

    let mut shared = vec![0u32; n * n];
    for occurrences in &by_theme {
        for &a in occurrences {
            for &b in occurrences {
                if a != b {
                    shared[a * n + b] += 1;
                }
            }
        }
    }

    let mut rows = Vec::new();
    for a in 0..n {
        for b in 0..n {
            let count = shared[a * n + b];
            if count > 0 {
                rows.push(SimilarityRow {
                    a_last: persons[a].0.to_string(),
                    a_first: persons[a].1.to_string(),
                    b_last: persons[b].0.to_string(),
                    b_first: persons[b].1.to_string(),
                    shared: count,
                });
            }
        }
    }
    rows.sort_by(|x, y| {
        y.shared
            .cmp(&x.shared)
            .then_with(|| x.a_last.cmp(&y.a_last))
            .then_with(|| x.a_first.cmp(&y.a_first))
            .then_with(|| x.b_last.cmp(&y.b_last))
            .then_with(|| x.b_first.cmp(&y.b_first))
    });
    rows
}

/// Each person's single most similar other person: the first row per
/// (last, first) in the sorted pairwise table.
pub fn best_matches(rows: &[SimilarityRow]) -> Vec<SimilarityRow> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut best = Vec::new();
    for row in rows {
        if seen.insert((row.a_last.as_str(), row.a_first.as_str())) {
            best.push(row.clone());
        }
    }
    best
}

pub fn pairwise_csv(rows: &[SimilarityRow]) -> String {
    render_csv(rows)
}

pub fn best_match_csv(rows: &[SimilarityRow]) -> String {
    render_csv(rows)
}

fn render_csv(rows: &[SimilarityRow]) -> String {
    let mut csv =
        String::from(",last_name_a,first_name_a,last_name_b,first_name_b,shared_themes\n");
    for (i, row) in rows.iter().enumerate() {
        csv.push_str(&format!(
            "{i},{},{},{},{},{}\n",
            csv_field(&row.a_last),
            csv_field(&row.a_first),
            csv_field(&row.b_last),
            csv_field(&row.b_first),
            row.shared
        ));
    }
    csv
}

/// Quotes a field when it would break the column layout, doubling any
/// embedded quote. The roster parser accepts such names, so the writer has
/// to round-trip them.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Weighting;
    use std::path::PathBuf;

    fn roster(csv: &str) -> Roster {
        let contents = format!("First Name,Last Name,Theme,Rank\n{csv}");
        Roster::parse(&contents, &PathBuf::from("test.csv"), Weighting::Reciprocal).unwrap()
    }

    fn find<'a>(rows: &'a [SimilarityRow], a: &str, b: &str) -> Option<&'a SimilarityRow> {
        rows.iter().find(|r| r.a_first == a && r.b_first == b)
    }

    #[test]
    fn shared_theme_counts_are_directional_and_self_free() {
        // A and B share {Learner, Input}; A and C share {Learner}.
        let roster = roster(
            "Ada,Lovelace,Learner,1\n\
             Ada,Lovelace,Input,2\n\
             Ben,Franklin,Learner,1\n\
             Ben,Franklin,Input,3\n\
             Cal,Hobbes,Learner,2\n",
        );
        let rows = pairwise(&roster);

        assert_eq!(find(&rows, "Ada", "Ben").unwrap().shared, 2);
        assert_eq!(find(&rows, "Ben", "Ada").unwrap().shared, 2);
        assert_eq!(find(&rows, "Ada", "Cal").unwrap().shared, 1);
        assert_eq!(find(&rows, "Cal", "Ada").unwrap().shared, 1);
        assert!(rows
            .iter()
            .all(|r| (r.a_last.as_str(), r.a_first.as_str()) != (r.b_last.as_str(), r.b_first.as_str())));
        // Ben and Cal also share Learner.
        assert_eq!(rows.len(), 6);
        // Descending by count.
        assert!(rows.windows(2).all(|w| w[0].shared >= w[1].shared));
    }

    #[test]
    fn best_match_prefers_higher_count() {
        let roster = roster(
            "Ada,Lovelace,Learner,1\n\
             Ada,Lovelace,Input,2\n\
             Ben,Franklin,Learner,1\n\
             Ben,Franklin,Input,3\n\
             Cal,Hobbes,Learner,2\n",
        );
        let rows = pairwise(&roster);
        let best = best_matches(&rows);

        let ada = best.iter().find(|r| r.a_first == "Ada").unwrap();
        assert_eq!(ada.b_first, "Ben");
        assert_eq!(ada.shared, 2);
        assert_eq!(best.len(), 3, "one best-match row per person");
    }

    #[test]
    fn distinct_people_sharing_a_surname_are_kept_apart() {
        let roster = roster(
            "Jo,Smith,Learner,1\n\
             Sam,Smith,Learner,1\n",
        );
        let rows = pairwise(&roster);
        assert_eq!(rows.len(), 2);
        assert_eq!(find(&rows, "Jo", "Sam").unwrap().shared, 1);
    }

    #[test]
    fn csv_has_row_index_and_header() {
        let roster = roster(
            "Ada,Lovelace,Learner,1\n\
             Ben,Franklin,Learner,1\n",
        );
        let csv = pairwise_csv(&pairwise(&roster));
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            ",last_name_a,first_name_a,last_name_b,first_name_b,shared_themes"
        );
        assert_eq!(lines.next().unwrap(), "0,Franklin,Ben,Lovelace,Ada,1");
        assert_eq!(lines.next().unwrap(), "1,Lovelace,Ada,Franklin,Ben,1");
    }

    #[test]
    fn names_with_commas_stay_in_one_column() {
        let roster = roster(
            "Miles,\"O'Brien, Jr.\",Learner,1\n\
             Keiko,Ishikawa,Learner,2\n",
        );
        let csv = pairwise_csv(&pairwise(&roster));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "0,Ishikawa,Keiko,\"O'Brien, Jr.\",Miles,1");
        assert_eq!(lines[2], "1,\"O'Brien, Jr.\",Miles,Ishikawa,Keiko,1");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("O'Brien, Jr."), "\"O'Brien, Jr.\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
