use brickctl::filter::ListFilter;
use brickctl::model::SqlQuery;
use proptest::prelude::*;

fn query_strategy() -> impl Strategy<Value = SqlQuery> {
    (
        "[a-z0-9]{1,4}",
        "[A-Za-z ]{0,8}",
        prop::option::of(prop::collection::vec("[a-cA-C]{1,2}", 0..3)),
    )
        .prop_map(|(id, name, tags)| SqlQuery {
            id,
            name,
            tags,
            user: None,
            is_favourite: false,
            is_draft: false,
            updated_at: None,
        })
}

fn filter_strategy() -> impl Strategy<Value = ListFilter> {
    (
        prop::option::of("[a-cA-C]{1,2}(,[a-cA-C]{1,2}){0,2}"),
        prop::option::of("[A-Za-z]{0,2}"),
    )
        .prop_map(|(tags, name)| ListFilter::new(tags.as_deref(), name.as_deref()))
}

proptest! {
    /// Output is an order-preserving subsequence of the input.
    #[test]
    fn result_is_ordered_subset(
        queries in prop::collection::vec(query_strategy(), 0..10),
        filter in filter_strategy(),
    ) {
        let kept = filter.apply(&queries);
        let mut rest = queries.iter();
        for q in &kept {
            prop_assert!(rest.any(|candidate| candidate == q));
        }
    }

    /// Filtering twice gives the same result as filtering once.
    #[test]
    fn filtering_is_idempotent(
        queries in prop::collection::vec(query_strategy(), 0..10),
        filter in filter_strategy(),
    ) {
        let once = filter.apply(&queries);
        let twice = filter.apply(&once);
        prop_assert_eq!(once, twice);
    }

    /// An absent filter keeps everything.
    #[test]
    fn empty_filter_keeps_everything(queries in prop::collection::vec(query_strategy(), 0..10)) {
        let filter = ListFilter::new(None, None);
        prop_assert_eq!(filter.apply(&queries), queries);
    }
}
