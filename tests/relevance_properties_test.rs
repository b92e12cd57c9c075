//! Property tests for ranking order and result counts

use pricescrape::listing::assembler::assemble;
use pricescrape::listing::relevance::{QueryMatcher, classify};
use pricescrape::listing::Listing;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "laptop", "funda", "mesa", "mesada", "de", "centro", "hp", "Dell", "LAPTOP", "gamer",
];

fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..6).prop_map(|words| words.join(" "))
}

fn listings_strategy() -> impl Strategy<Value = Vec<Listing>> {
    prop::collection::vec(title_strategy(), 0..20).prop_map(|titles| {
        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Listing {
                position: i + 1,
                title,
                price: format!("{}", (i + 1) * 100),
                link: format!("https://articulo.mercadolibre.com.mx/MLM-{i}"),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn ranking_is_a_stable_partition(
        listings in listings_strategy(),
        query in title_strategy(),
    ) {
        let matcher = QueryMatcher::new(&query);
        let expected_exact: Vec<String> = listings
            .iter()
            .filter(|l| matcher.matches_all(&l.title))
            .map(|l| l.link.clone())
            .collect();
        let expected_partial: Vec<String> = listings
            .iter()
            .filter(|l| !matcher.matches_all(&l.title))
            .map(|l| l.link.clone())
            .collect();

        let ranked = classify(listings, &query);

        let exact: Vec<String> = ranked.iter().filter(|r| r.exact_match).map(|r| r.link.clone()).collect();
        let partial: Vec<String> = ranked.iter().filter(|r| !r.exact_match).map(|r| r.link.clone()).collect();
        prop_assert_eq!(exact, expected_exact);
        prop_assert_eq!(partial, expected_partial);

        // every exact match precedes every partial match
        let first_partial = ranked.iter().position(|r| !r.exact_match).unwrap_or(ranked.len());
        prop_assert!(ranked[first_partial..].iter().all(|r| !r.exact_match));
    }

    #[test]
    fn positions_and_counts_are_consistent(
        listings in listings_strategy(),
        query in title_strategy(),
    ) {
        let result = assemble(&query, classify(listings, &query));

        for (index, listing) in result.listings().iter().enumerate() {
            prop_assert_eq!(listing.position, index + 1);
        }
        prop_assert_eq!(result.total_count(), result.listings().len());
        prop_assert_eq!(result.exact_count() + result.partial_count(), result.total_count());
        prop_assert_eq!(
            result.exact_count(),
            result.listings().iter().filter(|l| l.exact_match).count()
        );
    }

    #[test]
    fn matching_ignores_case(title in title_strategy(), query in title_strategy()) {
        let matcher = QueryMatcher::new(&query);
        prop_assert_eq!(
            matcher.matches_all(&title),
            matcher.matches_all(&title.to_uppercase())
        );
    }
}
