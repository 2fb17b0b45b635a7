use std::io::{self, Write};

use crate::domain::order::{format_price, Order, OrderStatus, OrderStore};
use crate::feed::OrderFeed;
use crate::reports::{
    calculate_order_total, filter_orders_by_status, group_orders_by_customer, summarize,
};

// ============================================================================
// Report Driver - Line-oriented rendering of the order reports
// ============================================================================
//
// Sequence: all orders, statistics, grouped view, completed-only view, fetch,
// fetched orders, statistics again. A failed fetch is reported in the output
// and ends the sequence without an error; only writer failures propagate.
//
// ============================================================================

pub const BANNER: &str = "🚀 ORDER PROCESSING SYSTEM DEMO";

pub async fn run_demo<W: Write>(
    store: &mut OrderStore,
    feed: &dyn OrderFeed,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{BANNER}\n")?;

    render_all_orders(store, out)?;
    render_statistics(store, out)?;
    render_orders_by_customer(store, out)?;
    render_completed_orders(store, out)?;

    writeln!(out, "\n=== FETCHING NEW ORDERS ===")?;
    writeln!(out, "Fetching new orders...")?;

    match feed.fetch_new_orders(store).await {
        Ok(new_orders) => {
            writeln!(out, "New orders fetched successfully!")?;
            render_new_orders(&new_orders, out)?;

            writeln!(out, "\n=== UPDATED STATISTICS ===")?;
            render_statistics(store, out)?;
        }
        Err(e) => {
            tracing::error!(error = %e, "Fetching new orders failed");
            writeln!(out, "Error fetching new orders: {e}")?;
        }
    }

    out.flush()
}

pub fn render_order<W: Write>(order: &Order, out: &mut W) -> io::Result<()> {
    let items = order
        .items
        .iter()
        .map(|item| {
            format!(
                "{} ({} x ${})",
                item.name,
                item.quantity,
                format_price(item.price)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out, "Order #{} - {}", order.id, order.customer_name)?;
    writeln!(out, "Status: {}", order.status)?;
    writeln!(out, "Items: {items}")?;
    writeln!(out, "Total: ${}", calculate_order_total(order))?;
    writeln!(out, "---")
}

pub fn render_all_orders<W: Write>(store: &OrderStore, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== ALL ORDERS ===")?;
    for order in store {
        render_order(order, out)?;
    }
    Ok(())
}

pub fn render_statistics<W: Write>(store: &OrderStore, out: &mut W) -> io::Result<()> {
    let stats = summarize(store);

    writeln!(out, "\n=== ORDER STATISTICS ===")?;
    writeln!(
        out,
        "Total Revenue (Completed Orders): ${}",
        stats.total_revenue
    )?;

    match &stats.largest_order {
        Some(largest) => writeln!(
            out,
            "Largest Order: #{} by {} - ${}",
            largest.order.id, largest.order.customer_name, largest.total_value
        )?,
        None => writeln!(out, "Largest Order: none")?,
    }

    writeln!(out, "Orders by Status:")?;
    for entry in &stats.status_counts {
        writeln!(out, "  {}: {} orders", entry.status, entry.count)?;
    }

    Ok(())
}

pub fn render_orders_by_customer<W: Write>(store: &OrderStore, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== ORDERS GROUPED BY CUSTOMER ===")?;

    for group in group_orders_by_customer(store) {
        writeln!(out, "\nCustomer: {}", group.customer_name)?;
        for order in group.orders {
            writeln!(
                out,
                "  Order #{} - Status: {} - Total: ${}",
                order.id,
                order.status,
                calculate_order_total(order)
            )?;
        }
    }

    Ok(())
}

pub fn render_completed_orders<W: Write>(store: &OrderStore, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== FILTERED ORDERS (COMPLETED) ===")?;

    for order in filter_orders_by_status(store, &OrderStatus::Completed) {
        writeln!(
            out,
            "Order #{} - {} - ${}",
            order.id,
            order.customer_name,
            calculate_order_total(order)
        )?;
    }

    Ok(())
}

fn render_new_orders<W: Write>(orders: &[Order], out: &mut W) -> io::Result<()> {
    writeln!(out, "New orders added:")?;
    for order in orders {
        writeln!(
            out,
            "  Order #{} - {} - ${}",
            order.id,
            order.customer_name,
            calculate_order_total(order)
        )?;
    }
    Ok(())
}
