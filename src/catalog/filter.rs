use super::Item;

/// Search items by query string
///
/// Matches against name, history and specifications (case-insensitive).
/// Keeps the input order; an empty query keeps everything.
pub fn filter<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    let query_lower = query.to_lowercase();

    let matches: Vec<&Item> = items
        .iter()
        .filter(|item| item.matches(&query_lower))
        .collect();

    tracing::debug!(
        "Filter '{}' kept {} of {} items",
        query,
        matches.len(),
        items.len()
    );
    matches
}

#[cfg(test)]
mod filter_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new(
                "Fusca",
                "img/fusca.jpg",
                "Motor 1.3 refrigerado a ar",
                "Produzido no Brasil a partir de 1959.",
                "https://example.com/fusca",
            ),
            Item::new(
                "Mustang",
                "img/mustang.jpg",
                "V8 289",
                "Lançado pela Ford em 1964.",
                "https://example.com/mustang",
            ),
            Item::new(
                "Opala",
                "img/opala.jpg",
                "<b>Motor:</b> 4.1 seis cilindros",
                "O primeiro carro de passeio da Chevrolet no Brasil.",
                "https://example.com/opala",
            ),
        ]
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let items = sample_items();
        let results = filter(&items, "");
        assert_eq!(names(&results), vec!["Fusca", "Mustang", "Opala"]);
    }

    #[test]
    fn test_case_insensitive() {
        let items = sample_items();
        assert_eq!(filter(&items, "Mustang"), filter(&items, "mustang"));
        assert_eq!(filter(&items, "MUSTANG"), filter(&items, "mustang"));
        assert_eq!(names(&filter(&items, "mustang")), vec!["Mustang"]);
    }

    #[test]
    fn test_matches_history_only() {
        let items = sample_items();
        let results = filter(&items, "chevrolet");
        assert_eq!(names(&results), vec!["Opala"]);
    }

    #[test]
    fn test_matches_specifications_markup() {
        let items = sample_items();
        assert_eq!(names(&filter(&items, "<b>motor")), vec!["Opala"]);
        assert_eq!(names(&filter(&items, "motor")), vec!["Fusca", "Opala"]);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let items = sample_items();
        let results = filter(&items, "brasil");
        assert_eq!(names(&results), vec!["Fusca", "Opala"]);

        let mut cursor = 0;
        for result in &results {
            let position = items[cursor..]
                .iter()
                .position(|item| std::ptr::eq(item, *result))
                .expect("result must come from the input, in order");
            cursor += position + 1;
        }
    }

    #[test]
    fn test_no_match() {
        let items = sample_items();
        assert!(filter(&items, "zzz").is_empty());
    }

    #[test]
    fn test_image_and_link_are_not_searched() {
        let items = sample_items();
        assert!(filter(&items, "img/").is_empty());
        assert!(filter(&items, "example.com").is_empty());
    }

    #[test]
    fn test_input_is_untouched() {
        let items = sample_items();
        let before = items.clone();
        let _ = filter(&items, "fusca");
        assert_eq!(items, before);
    }
}
