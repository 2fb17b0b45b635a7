use rust_decimal::Decimal;

use crate::domain::order::{format_money, Order, OrderStatus, OrderStore};

use super::types::{CustomerOrders, LargestOrder, Statistics, StatusCount};

/// Order value with two decimals
pub fn calculate_order_total(order: &Order) -> String {
    order.formatted_total()
}

/// Revenue across completed orders; `"0.00"` when there are none
pub fn calculate_total_revenue(store: &OrderStore) -> String {
    let revenue: Decimal = store
        .iter()
        .filter(|order| order.is_completed())
        .map(Order::total)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    format_money(revenue)
}

/// Orders whose status tag matches `status` exactly, in store order
pub fn filter_orders_by_status<'a>(store: &'a OrderStore, status: &OrderStatus) -> Vec<&'a Order> {
    store.iter().filter(|order| &order.status == status).collect()
}

/// Order with the strictly greatest unrounded total.
///
/// Ties keep the earliest order. `None` for an empty store.
pub fn find_largest_order(store: &OrderStore) -> Option<LargestOrder<'_>> {
    let mut iter = store.iter();
    let first = iter.next()?;

    let (order, value) = iter.fold((first, first.total()), |(best, best_value), order| {
        let value = order.total();
        if value > best_value {
            (order, value)
        } else {
            (best, best_value)
        }
    });

    Some(LargestOrder {
        order,
        total_value: format_money(value),
    })
}

/// Partition orders by customer name.
///
/// Customers appear in the order they were first seen; each group keeps
/// store order.
pub fn group_orders_by_customer(store: &OrderStore) -> Vec<CustomerOrders<'_>> {
    let mut groups: Vec<CustomerOrders<'_>> = Vec::new();

    for order in store {
        match groups
            .iter()
            .position(|group| group.customer_name == order.customer_name)
        {
            Some(index) => groups[index].orders.push(order),
            None => groups.push(CustomerOrders {
                customer_name: &order.customer_name,
                orders: vec![order],
            }),
        }
    }

    groups
}

/// Number of orders per distinct status, in first-seen order
pub fn count_orders_by_status(store: &OrderStore) -> Vec<StatusCount<'_>> {
    let mut counts: Vec<StatusCount<'_>> = Vec::new();

    for order in store {
        match counts.iter().position(|entry| *entry.status == order.status) {
            Some(index) => counts[index].count += 1,
            None => counts.push(StatusCount {
                status: &order.status,
                count: 1,
            }),
        }
    }

    counts
}

pub fn summarize(store: &OrderStore) -> Statistics<'_> {
    Statistics {
        total_revenue: calculate_total_revenue(store),
        largest_order: find_largest_order(store),
        status_counts: count_orders_by_status(store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::LineItem;

    fn single_item(price_cents: i64) -> Vec<LineItem> {
        vec![LineItem::new("Widget", 1, Decimal::new(price_cents, 2))]
    }

    #[test]
    fn test_seed_order_totals() {
        let store = OrderStore::seeded();

        let totals: Vec<String> = store.iter().map(calculate_order_total).collect();
        assert_eq!(
            totals,
            vec!["1050.99", "739.96", "479.98", "438.95", "149.99"]
        );
    }

    #[test]
    fn test_order_total_matches_item_sum() {
        let store = OrderStore::seeded();

        for order in &store {
            let expected: Decimal = order
                .items
                .iter()
                .map(|item| Decimal::from(item.quantity) * item.price)
                .sum();
            assert_eq!(calculate_order_total(order), format_money(expected));
        }
    }

    #[test]
    fn test_total_revenue_counts_completed_only() {
        let store = OrderStore::seeded();
        assert_eq!(calculate_total_revenue(&store), "1680.96");
    }

    #[test]
    fn test_total_revenue_without_completed_orders() {
        let mut store = OrderStore::new();
        assert_eq!(calculate_total_revenue(&store), "0.00");

        store.add_order("Ada", single_item(1000), None);
        store.add_order("Bob", single_item(2000), Some(OrderStatus::Shipped));
        assert_eq!(calculate_total_revenue(&store), "0.00");
    }

    #[test]
    fn test_revenue_follows_status_updates() {
        let mut store = OrderStore::seeded();

        store.update_order_status(2, OrderStatus::Completed);
        assert_eq!(calculate_total_revenue(&store), "2420.92");

        store.update_order_status(1, OrderStatus::from("refunded"));
        assert_eq!(calculate_total_revenue(&store), "1369.93");
    }

    fn store_with_spelled_out_completed() -> OrderStore {
        let mut store = OrderStore::new();
        store.add_order("Ada", single_item(1000), Some(OrderStatus::Completed));
        store.add_order(
            "Bob",
            single_item(2000),
            Some(OrderStatus::Other("completed".to_string())),
        );
        store
    }

    #[test]
    fn test_revenue_includes_spelled_out_completed_tag() {
        let store = store_with_spelled_out_completed();
        assert_eq!(calculate_total_revenue(&store), "30.00");
    }

    #[test]
    fn test_revenue_with_huge_orders_does_not_panic() {
        let mut store = OrderStore::new();
        let huge = vec![LineItem::new("Big", u32::MAX, Decimal::MAX)];
        store.add_order("Whale", huge.clone(), Some(OrderStatus::Completed));
        store.add_order("Orca", huge, Some(OrderStatus::Completed));

        assert_eq!(calculate_total_revenue(&store), format_money(Decimal::MAX));
        assert_eq!(find_largest_order(&store).map(|l| l.order.id), Some(1));
    }

    #[test]
    fn test_filter_orders_by_status() {
        let store = OrderStore::seeded();

        let completed = filter_orders_by_status(&store, &OrderStatus::Completed);
        let ids: Vec<u32> = completed.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);

        let non_matching = store
            .iter()
            .filter(|o| o.status != OrderStatus::Completed)
            .count();
        assert_eq!(completed.len() + non_matching, store.len());
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let store = OrderStore::seeded();

        assert!(filter_orders_by_status(&store, &OrderStatus::from("Completed")).is_empty());
        assert!(filter_orders_by_status(&store, &OrderStatus::from("cancelled")).is_empty());
        assert_eq!(filter_orders_by_status(&store, &OrderStatus::Shipped).len(), 1);
    }

    #[test]
    fn test_largest_seed_order() {
        let store = OrderStore::seeded();

        let largest = find_largest_order(&store).unwrap();
        assert_eq!(largest.order.id, 1);
        assert_eq!(largest.order.customer_name, "Edelbert");
        assert!(largest.order.items.iter().any(|item| item.name == "Laptop"));
        assert_eq!(largest.total_value, "1050.99");
    }

    #[test]
    fn test_largest_order_tie_keeps_first() {
        let mut store = OrderStore::new();
        store.add_order("Ada", single_item(500), None);
        store.add_order("Bob", single_item(900), None);
        store.add_order("Cy", single_item(900), None);

        let largest = find_largest_order(&store).unwrap();
        assert_eq!(largest.order.customer_name, "Bob");
        assert_eq!(largest.total_value, "9.00");
    }

    #[test]
    fn test_filter_matches_spelled_out_completed_tag() {
        let store = store_with_spelled_out_completed();

        let ids: Vec<u32> = filter_orders_by_status(&store, &OrderStatus::Completed)
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_largest_order_with_only_negative_totals() {
        let mut store = OrderStore::new();
        store.add_order("Ada", single_item(-500), None);
        store.add_order("Bob", single_item(-100), None);

        let largest = find_largest_order(&store).unwrap();
        assert_eq!(largest.order.id, 2);
        assert_eq!(largest.total_value, "-1.00");
    }

    #[test]
    fn test_largest_order_empty_store() {
        let store = OrderStore::new();
        assert!(find_largest_order(&store).is_none());
    }

    #[test]
    fn test_largest_order_with_only_empty_orders() {
        let mut store = OrderStore::new();
        store.add_order("Ada", vec![], None);
        store.add_order("Bob", vec![], None);

        let largest = find_largest_order(&store).unwrap();
        assert_eq!(largest.order.id, 1);
        assert_eq!(largest.total_value, "0.00");
    }

    #[test]
    fn test_group_orders_by_customer() {
        let store = OrderStore::seeded();

        let groups = group_orders_by_customer(&store);
        let customers: Vec<&str> = groups.iter().map(|g| g.customer_name).collect();
        assert_eq!(customers, vec!["Edelbert", "Mark Ace", "Mark Labitag", "Justine"]);

        let edelbert: Vec<u32> = groups[0].orders.iter().map(|o| o.id).collect();
        assert_eq!(edelbert, vec![1, 4]);
    }

    #[test]
    fn test_grouping_partitions_every_order_once() {
        let mut store = OrderStore::seeded();
        store.add_order("Justine", single_item(100), None);
        store.add_order("Edelbert", single_item(100), None);

        let groups = group_orders_by_customer(&store);

        let grouped: usize = groups.iter().map(|g| g.orders.len()).sum();
        assert_eq!(grouped, store.len());

        for order in &store {
            let holders: Vec<&CustomerOrders<'_>> = groups
                .iter()
                .filter(|g| g.orders.iter().any(|o| o.id == order.id))
                .collect();
            assert_eq!(holders.len(), 1);
            assert_eq!(holders[0].customer_name, order.customer_name);
        }
    }

    #[test]
    fn test_count_orders_by_status_first_seen_order() {
        let store = OrderStore::seeded();

        let counts: Vec<(&str, usize)> = count_orders_by_status(&store)
            .iter()
            .map(|entry| (entry.status.as_str(), entry.count))
            .collect();

        assert_eq!(
            counts,
            vec![("completed", 3), ("pending", 1), ("shipped", 1)]
        );
    }

    #[test]
    fn test_count_merges_spelled_out_completed_tag() {
        let store = store_with_spelled_out_completed();

        let counts: Vec<(&str, usize)> = count_orders_by_status(&store)
            .iter()
            .map(|entry| (entry.status.as_str(), entry.count))
            .collect();
        assert_eq!(counts, vec![("completed", 2)]);
    }

    #[test]
    fn test_summarize_seed_store() {
        let store = OrderStore::seeded();

        let stats = summarize(&store);
        assert_eq!(stats.total_revenue, "1680.96");
        assert_eq!(stats.largest_order.map(|l| l.order.id), Some(1));
        assert_eq!(stats.status_counts.len(), 3);
    }

    #[test]
    fn test_statistics_serialize_to_json() {
        let store = OrderStore::seeded();

        let json = serde_json::to_value(summarize(&store)).unwrap();
        assert_eq!(json["total_revenue"], "1680.96");
        assert_eq!(json["largest_order"]["order"]["id"], 1);
        assert_eq!(json["status_counts"][0]["status"], "completed");
        assert_eq!(json["status_counts"][0]["count"], 3);
    }
}
