use crate::models::repository::RepositorySummary;

/// Orders repositories by most recent push first.
///
/// `pushed_at` is compared as raw text, which is only calendar-correct when
/// every timestamp shares one sortable format (GitHub sends ISO-8601 UTC).
/// `sort_by` is stable, so equal timestamps keep their input order.
pub fn order_repositories(mut repositories: Vec<RepositorySummary>) -> Vec<RepositorySummary> {
    repositories.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
    repositories
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn repo(name: &str, pushed_at: &str) -> RepositorySummary {
        RepositorySummary::new(name, &format!("https://github.com/me/{name}"), pushed_at)
    }

    fn names(repos: &[RepositorySummary]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<RepositorySummary> {
        vec![
            repo("d", "2022-03-04T08:00:00Z"),
            repo("e", "2023-06-01T00:00:00Z"),
            repo("f", ""),
            repo("g", "2022-03-04T08:00:00Z"),
            repo("h", "not a date"),
            repo("i", "2023-06-01T00:00:00Z"),
        ]
    }

    #[test]
    fn test_newest_first_with_ties_in_input_order() {
        let ordered = order_repositories(vec![
            repo("A", "2023-01-01"),
            repo("B", "2023-06-01"),
            repo("C", "2023-06-01"),
        ]);
        assert_eq!(names(&ordered), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_empty_and_singleton_inputs() {
        assert!(order_repositories(vec![]).is_empty());
        assert_eq!(names(&order_repositories(vec![repo("solo", "x")])), vec!["solo"]);
    }

    #[test]
    fn test_malformed_timestamps_compare_as_text() {
        let ordered = order_repositories(sample());
        // "not a date" sorts above every digit-leading timestamp, "" sorts last.
        assert_eq!(ordered.first().unwrap().name, "h");
        assert_eq!(ordered.last().unwrap().name, "f");
    }

    /// Timestamps drawn from a small alphabet so ties are frequent. Includes
    /// an empty value and a non-date to exercise plain text comparison.
    fn pushed_at_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("2021-01-01T00:00:00Z"),
            Just("2022-03-04T08:00:00Z"),
            Just("2023-06-01T00:00:00Z"),
            Just("2023-06-01T12:30:00Z"),
            Just(""),
            Just("not a date"),
        ]
        .prop_map(str::to_string)
    }

    /// Repositories named after their input index.
    fn repositories_strategy() -> impl Strategy<Value = Vec<RepositorySummary>> {
        prop::collection::vec(pushed_at_strategy(), 0..24).prop_map(|stamps| {
            stamps
                .iter()
                .enumerate()
                .map(|(i, pushed_at)| repo(&i.to_string(), pushed_at))
                .collect()
        })
    }

    fn input_index(repo: &RepositorySummary) -> usize {
        repo.name
            .parse()
            .unwrap_or_else(|e| panic!("bad name {}: {e}", repo.name))
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

        #[test]
        fn prop_adjacent_pairs_descend(input in repositories_strategy()) {
            let ordered = order_repositories(input);
            for pair in ordered.windows(2) {
                prop_assert!(pair[0].pushed_at >= pair[1].pushed_at);
            }
        }

        #[test]
        fn prop_equal_timestamps_keep_input_order(input in repositories_strategy()) {
            let ordered = order_repositories(input);
            for (i, a) in ordered.iter().enumerate() {
                for b in &ordered[i + 1..] {
                    if a.pushed_at == b.pushed_at {
                        prop_assert!(input_index(a) < input_index(b));
                    }
                }
            }
        }

        #[test]
        fn prop_output_is_permutation(input in repositories_strategy()) {
            let ordered = order_repositories(input.clone());
            prop_assert_eq!(ordered.len(), input.len());

            let mut indices: Vec<usize> = ordered.iter().map(input_index).collect();
            indices.sort_unstable();
            prop_assert_eq!(indices, (0..input.len()).collect::<Vec<_>>());
            for repo in &ordered {
                prop_assert_eq!(repo, &input[input_index(repo)]);
            }
        }

        #[test]
        fn prop_ordering_is_idempotent(input in repositories_strategy()) {
            let once = order_repositories(input);
            let twice = order_repositories(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}
