//! Property-based tests for the view pipeline and the page window.
//!
//! Tests validate:
//! 1. Every visible row passes the filters and the search
//! 2. Counts do not depend on the requested page or the sort
//! 3. Page count arithmetic and clamping
//! 4. Sorting is ordered, stable and idempotent
//! 5. Concatenated pages reproduce the full filtered list
//! 6. page_window keeps both ends, increases strictly and marks every gap

use adminview::model::{Order, OrderField, OrderStatus, Record, ServiceType};
use adminview::view_state::sort::compare_values;
use adminview::view_state::{
    compute_view, page_window, FilterSpec, Page, PageMarker, SortDirection, SortSpec,
    TextCollator, ViewQuery,
};
use proptest::prelude::*;
use std::cmp::Ordering;

// ===== Strategies =====

const USERNAMES: [&str; 6] = ["alice", "Bob", "carol", "dave", "Eve", "mallory"];
const DATES: [&str; 4] = ["2024-01-05", "2024-01-17", "2024-02-01", "2023-12-31"];

fn order_strategy() -> impl Strategy<Value = (usize, usize, usize, u32, u32, usize)> {
    (
        0..USERNAMES.len(),
        0..ServiceType::ALL.len(),
        0..OrderStatus::ALL.len(),
        0u32..5_000,
        0u32..20_000,
        0..DATES.len(),
    )
}

fn orders_strategy(max: usize) -> impl Strategy<Value = Vec<Order>> {
    prop::collection::vec(order_strategy(), 0..max).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (user, service, status, quantity, cents, date))| Order {
                id: format!("ORD-{:04}", i + 1),
                username: USERNAMES[user].to_string(),
                service_type: ServiceType::ALL[service],
                quantity,
                price: f64::from(cents) / 100.0,
                status: OrderStatus::ALL[status],
                date: DATES[date].to_string(),
            })
            .collect()
    })
}

fn sortable_field() -> impl Strategy<Value = OrderField> {
    prop::sample::select(vec![
        OrderField::Id,
        OrderField::ServiceType,
        OrderField::Quantity,
        OrderField::Price,
        OrderField::Status,
        OrderField::Date,
    ])
}

fn direction() -> impl Strategy<Value = SortDirection> {
    prop::sample::select(vec![SortDirection::Asc, SortDirection::Desc])
}

fn collator() -> TextCollator {
    TextCollator::new("en").unwrap()
}

fn query(page: usize, size: usize) -> ViewQuery<OrderField> {
    ViewQuery::new(vec![OrderField::Id, OrderField::Username], Page::new(page, size))
}

// ===== Property 1: Visible rows pass the filters and search =====

proptest! {
    #[test]
    fn visible_rows_match_filter_and_search(
        orders in orders_strategy(60),
        status in 0..OrderStatus::ALL.len(),
        term in prop::sample::select(vec!["", "a", "AL", "ord-00", "e", "zzz"]),
        page in 1usize..8,
        size in 1usize..15,
    ) {
        let wanted = OrderStatus::ALL[status];
        let mut q = query(page, size);
        q.filters = FilterSpec::new().with(OrderField::Status, wanted.as_str());
        q.search.term = term.to_string();

        let view = compute_view(&orders, &q, &collator()).unwrap();
        let needle = term.to_lowercase();
        for row in &view.visible {
            prop_assert_eq!(row.status, wanted);
            prop_assert!(
                row.id.to_lowercase().contains(&needle)
                    || row.username.to_lowercase().contains(&needle),
                "{} / {} does not contain {}", row.id, row.username, term
            );
        }
    }
}

// ===== Property 2: Counts ignore page and sort =====

proptest! {
    #[test]
    fn total_filtered_ignores_page_and_sort(
        orders in orders_strategy(60),
        field in sortable_field(),
        dir in direction(),
        page_a in 1usize..10,
        page_b in 1usize..10,
        size in 1usize..12,
    ) {
        let collator = collator();
        let mut q = query(page_a, size);
        q.filters = FilterSpec::new().with(OrderField::Status, "completed");
        let unsorted = compute_view(&orders, &q, &collator).unwrap();

        q.page = Page::new(page_b, size);
        q.sort = Some(SortSpec { field, direction: dir });
        let sorted = compute_view(&orders, &q, &collator).unwrap();

        prop_assert_eq!(unsorted.total_filtered, sorted.total_filtered);
        prop_assert_eq!(unsorted.total_pages, sorted.total_pages);
        let expected = orders.iter().filter(|o| o.status == OrderStatus::Completed).count();
        prop_assert_eq!(sorted.total_filtered, expected);
    }
}

// ===== Property 3: Page arithmetic =====

proptest! {
    #[test]
    fn page_count_and_clamp(
        orders in orders_strategy(80),
        page in 1usize..40,
        size in 1usize..20,
    ) {
        let view = compute_view(&orders, &query(page, size), &collator()).unwrap();
        let n = orders.len();

        prop_assert_eq!(view.total_pages, n.div_ceil(size).max(1));
        prop_assert_eq!(view.effective_page, page.min(view.total_pages));
        prop_assert!(view.visible.len() <= size);
        if n > 0 {
            prop_assert!(!view.visible.is_empty(), "clamped page must not be empty");
        }
        prop_assert_eq!(view.page_size, size);
    }
}

// ===== Property 4: Sorting =====

proptest! {
    #[test]
    fn sorted_rows_are_ordered(
        orders in orders_strategy(50),
        field in sortable_field(),
        dir in direction(),
    ) {
        let collator = collator();
        let mut q = query(1, orders.len().max(1));
        q.sort = Some(SortSpec { field, direction: dir });
        let view = compute_view(&orders, &q, &collator).unwrap();

        for pair in view.visible.windows(2) {
            let ordering = dir.apply(compare_values(
                pair[0].value(field),
                pair[1].value(field),
                &collator,
            ));
            prop_assert_ne!(ordering, Ordering::Greater);
        }
    }

    #[test]
    fn sort_is_stable(
        orders in orders_strategy(50),
        field in sortable_field(),
        dir in direction(),
    ) {
        let collator = collator();
        let mut q = query(1, orders.len().max(1));
        q.sort = Some(SortSpec { field, direction: dir });
        let view = compute_view(&orders, &q, &collator).unwrap();

        // Ids are generated in source order, so ties must keep ascending ids
        for pair in view.visible.windows(2) {
            let tie = compare_values(pair[0].value(field), pair[1].value(field), &collator)
                == Ordering::Equal;
            if tie {
                prop_assert!(pair[0].id < pair[1].id, "{} before {}", pair[0].id, pair[1].id);
            }
        }
    }

    #[test]
    fn sorting_sorted_rows_changes_nothing(
        orders in orders_strategy(50),
        field in sortable_field(),
        dir in direction(),
    ) {
        let collator = collator();
        let mut q = query(1, orders.len().max(1));
        q.sort = Some(SortSpec { field, direction: dir });

        let once: Vec<Order> = compute_view(&orders, &q, &collator)
            .unwrap()
            .visible
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<&str> = compute_view(&once, &q, &collator)
            .unwrap()
            .visible
            .iter()
            .map(|o| o.id())
            .collect();
        let once_ids: Vec<&str> = once.iter().map(|o| o.id()).collect();
        prop_assert_eq!(once_ids, twice);
    }
}

// ===== Property 5: Pages partition the filtered list =====

proptest! {
    #[test]
    fn pages_concatenate_to_full_list(
        orders in orders_strategy(70),
        field in sortable_field(),
        dir in direction(),
        size in 1usize..13,
    ) {
        let collator = collator();
        let mut full = query(1, orders.len().max(1));
        full.sort = Some(SortSpec { field, direction: dir });
        let expected: Vec<&str> = compute_view(&orders, &full, &collator)
            .unwrap()
            .visible
            .iter()
            .map(|o| o.id())
            .collect();

        let mut paged = full.clone();
        paged.page = Page::new(1, size);
        let total_pages = compute_view(&orders, &paged, &collator).unwrap().total_pages;

        let mut collected = Vec::new();
        for number in 1..=total_pages {
            paged.page = Page::new(number, size);
            let view = compute_view(&orders, &paged, &collator).unwrap();
            collected.extend(view.visible.iter().map(|o| o.id()));
        }
        prop_assert_eq!(collected, expected);
    }
}

// ===== Property 6: page_window =====

fn window_case() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..200, 1usize..12).prop_flat_map(|(total, max_visible)| {
        (1..=total, Just(total), Just(max_visible))
    })
}

proptest! {
    #[test]
    fn window_keeps_both_ends_and_current((current, total, max_visible) in window_case()) {
        let window = page_window(current, total, max_visible).unwrap();
        let pages: Vec<usize> = window
            .iter()
            .filter_map(|m| match m {
                PageMarker::Page(n) => Some(*n),
                PageMarker::Ellipsis => None,
            })
            .collect();

        prop_assert_eq!(pages.first().copied(), Some(1));
        prop_assert_eq!(pages.last().copied(), Some(total));
        prop_assert!(pages.contains(&current));
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]), "{:?}", pages);
        if total <= max_visible {
            prop_assert_eq!(pages, (1..=total).collect::<Vec<_>>());
        } else {
            prop_assert!(pages.len() <= max_visible.max(3));
        }
    }

    #[test]
    fn ellipsis_marks_exactly_the_gaps((current, total, max_visible) in window_case()) {
        let window = page_window(current, total, max_visible).unwrap();

        prop_assert!(matches!(window.first(), Some(PageMarker::Page(1))));
        prop_assert!(matches!(window.last(), Some(PageMarker::Page(n)) if *n == total));
        for pair in window.windows(2) {
            match (pair[0], pair[1]) {
                (PageMarker::Page(a), PageMarker::Page(b)) => prop_assert_eq!(b, a + 1),
                (PageMarker::Ellipsis, PageMarker::Ellipsis) => {
                    prop_assert!(false, "adjacent ellipses in {:?}", window)
                }
                _ => {}
            }
        }
        for triple in window.windows(3) {
            if let [PageMarker::Page(a), PageMarker::Ellipsis, PageMarker::Page(b)] = triple {
                prop_assert!(*b >= a + 2, "ellipsis between {} and {}", a, b);
            }
        }
    }

    #[test]
    fn window_rejects_out_of_range_current(total in 1usize..100, extra in 1usize..10) {
        prop_assert!(page_window(0, total, 5).is_err());
        prop_assert!(page_window(total + extra, total, 5).is_err());
    }
}
