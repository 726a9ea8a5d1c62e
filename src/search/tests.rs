//! Search Module Tests
//!
//! Validates query normalization, matching, ranking, capping and the shape of
//! the summary rows.
//!
//! ## Test Scopes
//! - **Normalization**: Short, empty and padded queries.
//! - **Matching**: Case-insensitive substring hits, records without an address.
//! - **Ranking**: Length ordering with stable ties, the 50-result cap.
//! - **Shortening**: The 100-character display form.

#[cfg(test)]
mod tests {
    use crate::dataset::{Dataset, Record};
    use crate::search::engine::{search, shorten, ELLIPSIS, MAX_RESULTS, SHORT_MAX_CHARS};
    use crate::search::types::{SearchParams, SearchResponse, SearchResult};

    fn record(address: Option<&str>, houseguid: Option<&str>) -> Record {
        Record {
            address: address.map(str::to_string),
            houseguid: houseguid.map(str::to_string),
            ..Record::default()
        }
    }

    fn lenina() -> Dataset {
        vec![
            record(Some("Moscow, Lenina 1"), Some("G1")),
            record(Some("Moscow, Lenina 12"), Some("G2")),
        ]
        .into_iter()
        .collect()
    }

    // ============================================================
    // NORMALIZATION TESTS
    // ============================================================

    #[test]
    fn test_search_empty_query() {
        assert!(search(&lenina(), "").is_empty());
    }

    #[test]
    fn test_search_single_char_query() {
        // "m" matches both addresses but is below the minimum length
        assert!(search(&lenina(), "m").is_empty());
    }

    #[test]
    fn test_search_whitespace_padded_short_query() {
        assert!(search(&lenina(), "   m   ").is_empty());
        assert!(search(&lenina(), "     ").is_empty());
    }

    #[test]
    fn test_search_trims_query() {
        let results = search(&lenina(), "  lenina  ");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_two_cyrillic_chars_is_long_enough() {
        // Two characters, four bytes
        let dataset: Dataset = vec![record(Some("г. Москва, ул. Мира, 5"), Some("M5"))]
            .into_iter()
            .collect();

        let results = search(&dataset, "ми");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].houseguid, "M5");
    }

    // ============================================================
    // MATCHING TESTS
    // ============================================================

    #[test]
    fn test_search_is_case_insensitive() {
        let upper = search(&lenina(), "LENINA");
        let lower = search(&lenina(), "lenina");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 2);
    }

    #[test]
    fn test_search_cyrillic_case_insensitive() {
        let dataset: Dataset = vec![record(Some("г. МОСКВА, ул. Ленина, д. 3"), Some("R3"))]
            .into_iter()
            .collect();

        assert_eq!(search(&dataset, "москва").len(), 1);
    }

    #[test]
    fn test_search_is_pure_substring() {
        // No word boundaries: "ina 1" spans the street name and house number
        let results = search(&lenina(), "ina 1");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_skips_records_without_address() {
        let dataset: Dataset = vec![
            record(None, Some("NOADDR")),
            record(Some("Lenina 5"), Some("G5")),
        ]
        .into_iter()
        .collect();

        let results = search(&dataset, "lenina");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].houseguid, "G5");
    }

    #[test]
    fn test_search_missing_houseguid_is_empty_string() {
        let dataset: Dataset = vec![record(Some("Lenina 7"), None)].into_iter().collect();

        let results = search(&dataset, "lenina");
        assert_eq!(results[0].houseguid, "");
    }

    #[test]
    fn test_search_no_matches() {
        assert!(search(&lenina(), "tverskaya").is_empty());
    }

    #[test]
    fn test_search_every_result_contains_query() {
        let dataset: Dataset = (0..200)
            .map(|i| record(Some(format!("Street {} building {}", i % 7, i).as_str()), None))
            .collect();

        for query in ["street 3", "BUILDING 1", "ing 2", "et 0"] {
            let needle = query.trim().to_lowercase();
            for result in search(&dataset, query) {
                assert!(
                    result.address.to_lowercase().contains(&needle),
                    "{} should contain {}",
                    result.address,
                    needle
                );
            }
        }
    }

    // ============================================================
    // RANKING TESTS
    // ============================================================

    #[test]
    fn test_search_scenario_orders_shorter_first() {
        let results = search(&lenina(), "lenina");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].houseguid, "G1");
        assert_eq!(results[1].houseguid, "G2");
        assert_eq!(results[0].short, "Moscow, Lenina 1");
        assert_eq!(results[1].short, "Moscow, Lenina 12");
    }

    #[test]
    fn test_search_sort_is_by_length_not_file_order() {
        let dataset: Dataset = vec![
            record(Some("Lenina street, building 100"), Some("LONG")),
            record(Some("Lenina 1"), Some("SHORT")),
        ]
        .into_iter()
        .collect();

        let results = search(&dataset, "lenina");
        assert_eq!(results[0].houseguid, "SHORT");
        assert_eq!(results[1].houseguid, "LONG");
    }

    #[test]
    fn test_search_ties_keep_file_order() {
        let dataset: Dataset = vec![
            record(Some("Lenina 3"), Some("A")),
            record(Some("Lenina 22"), Some("B")),
            record(Some("Lenina 1"), Some("C")),
            record(Some("Lenina 2"), Some("D")),
        ]
        .into_iter()
        .collect();

        let ids: Vec<String> = search(&dataset, "lenina")
            .into_iter()
            .map(|r| r.houseguid)
            .collect();
        assert_eq!(ids, vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_search_sorts_by_full_length_not_short_form() {
        let long_a = format!("Lenina {}", "a".repeat(150));
        let long_b = format!("Lenina {}", "b".repeat(120));
        let dataset: Dataset = vec![
            record(Some(long_a.as_str()), Some("A")),
            record(Some(long_b.as_str()), Some("B")),
        ]
        .into_iter()
        .collect();

        // Both short forms have equal length; the full lengths decide
        let results = search(&dataset, "lenina");
        assert_eq!(results[0].houseguid, "B");
        assert_eq!(results[1].houseguid, "A");
    }

    #[test]
    fn test_search_caps_results() {
        let dataset: Dataset = (0..120)
            .map(|i| record(Some(format!("Lenina {}", i).as_str()), Some(format!("G{}", i).as_str())))
            .collect();

        let results = search(&dataset, "lenina");
        assert_eq!(results.len(), MAX_RESULTS);

        // Lengths are non-decreasing
        for pair in results.windows(2) {
            assert!(pair[0].address.chars().count() <= pair[1].address.chars().count());
        }

        // The ten single-digit addresses come first, in file order
        assert_eq!(results[0].houseguid, "G0");
        assert_eq!(results[9].houseguid, "G9");
        assert_eq!(results[10].houseguid, "G10");
    }

    #[test]
    fn test_search_is_deterministic() {
        let dataset: Dataset = (0..80)
            .map(|i| record(Some(format!("Mira {}", i * 37 % 1000).as_str()), Some(i.to_string().as_str())))
            .collect();

        assert_eq!(search(&dataset, "mira"), search(&dataset, "mira"));
    }

    // ============================================================
    // SHORTENING TESTS
    // ============================================================

    #[test]
    fn test_shorten_keeps_short_address() {
        assert_eq!(shorten("Moscow, Lenina 1"), "Moscow, Lenina 1");
    }

    #[test]
    fn test_shorten_exactly_limit_is_unchanged() {
        let address = "x".repeat(SHORT_MAX_CHARS);
        assert_eq!(shorten(&address), address);
    }

    #[test]
    fn test_shorten_over_limit() {
        let address = "y".repeat(SHORT_MAX_CHARS + 1);
        let short = shorten(&address);

        assert_eq!(short, format!("{}{}", "y".repeat(SHORT_MAX_CHARS), ELLIPSIS));
    }

    #[test]
    fn test_shorten_counts_characters_not_bytes() {
        let address = "ж".repeat(SHORT_MAX_CHARS + 5);
        let short = shorten(&address);

        assert!(short.ends_with(ELLIPSIS));
        assert_eq!(short.chars().count(), SHORT_MAX_CHARS + ELLIPSIS.len());

        let exact = "ж".repeat(SHORT_MAX_CHARS);
        assert_eq!(shorten(&exact), exact);
    }

    #[test]
    fn test_search_result_uses_short_form() {
        let address = format!("Lenina {}", "z".repeat(200));
        let dataset: Dataset = vec![record(Some(address.as_str()), Some("Z"))].into_iter().collect();

        let results = search(&dataset, "lenina");
        assert_eq!(results[0].address, address);
        assert_eq!(results[0].short, shorten(&address));
        assert!(results[0].short.ends_with(ELLIPSIS));
    }

    // ============================================================
    // TYPES TESTS
    // ============================================================

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_search_params_first_q_wins() {
        let params = SearchParams::from_pairs(pairs(&[("q", "lenina"), ("q", "x")]));
        assert_eq!(params.q, "lenina");
    }

    #[test]
    fn test_search_params_missing_q_is_empty() {
        let params = SearchParams::from_pairs(pairs(&[("limit", "10")]));
        assert_eq!(params, SearchParams::default());
    }

    #[test]
    fn test_search_params_skips_other_keys() {
        let params = SearchParams::from_pairs(pairs(&[("page", "2"), ("q", "mira")]));
        assert_eq!(params.q, "mira");
    }

    #[test]
    fn test_search_response_json_shape() {
        let response = SearchResponse {
            results: vec![SearchResult {
                address: "Moscow, Lenina 1".to_string(),
                houseguid: "G1".to_string(),
                short: "Moscow, Lenina 1".to_string(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "results": [{
                    "address": "Moscow, Lenina 1",
                    "houseguid": "G1",
                    "short": "Moscow, Lenina 1"
                }]
            })
        );
    }
}
