//! Command handlers
//!
//! Each handler returns the text to show; `run` prints it.

use super::{ItemArg, KitchenCommand, MenuCommand, MenuEditArgs, MenuItemArgs, OrderArgs, ReportArgs};
use crate::billing::{PaymentProcessor, initiate_checkout, qr_image_url, qr_payload};
use crate::cart::Cart;
use crate::catalog::CatalogError;
use crate::core::{Config, PosState};
use crate::kitchen::KitchenBoard;
use crate::printing::{KitchenTicketRenderer, host_printer, print_receipt};
use crate::reporting::{DashboardReport, dashboard_report};
use crate::storage::StateStore;
use crate::utils::time::{format_millis, now_in};
use anyhow::{Context, anyhow, bail};
use chrono::Local;
use pos_printer::TextBuilder;
use shared::util::{format_amount, now_millis};
use shared::{MenuItem, MenuItemCreate, MenuItemUpdate, Order, PaymentMethod, User};
use std::fmt::Write as _;
use std::io::{BufRead, Write as _};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub(super) fn login_summary(user: &User) -> String {
    let views: Vec<&str> = user.role.allowed_views().iter().map(|v| v.label()).collect();
    format!(
        "Logged in as {} ({})\nViews: {}\nLanding: {}",
        user.name,
        user.role,
        views.join(", "),
        user.role.landing_view()
    )
}

// ========== Menu ==========

pub(super) fn menu<S: StateStore>(state: &mut PosState<S>, cmd: MenuCommand) -> anyhow::Result<String> {
    match cmd {
        MenuCommand::List { category, search } => {
            let items = state.catalog().filter(category, &search);
            Ok(render_menu(&items))
        }
        MenuCommand::Add(args) => {
            let item = state.create_menu_item(args.into())?;
            Ok(format!("Added #{} {} ({})", item.id, item.name, format_amount(item.price)))
        }
        MenuCommand::Edit { id, fields } => {
            let item = state.update_menu_item(&id, fields.into())?;
            Ok(format!("Updated #{} {} ({})", item.id, item.name, format_amount(item.price)))
        }
        MenuCommand::Delete { id, yes } => {
            let name = state
                .catalog()
                .get(&id)
                .map(|i| i.name.clone())
                .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
            if !yes && !confirm(&format!("Delete '{}'?", name))? {
                return Ok("Cancelled".to_string());
            }
            state.delete_menu_item(&id)?;
            Ok(format!("Deleted #{} {}", id, name))
        }
        MenuCommand::Availability { id, available } => {
            let item = state.set_item_availability(&id, available)?;
            let label = if item.available { "in stock" } else { "sold out" };
            Ok(format!("#{} {} is {}", item.id, item.name, label))
        }
    }
}

impl From<MenuItemArgs> for MenuItemCreate {
    fn from(args: MenuItemArgs) -> Self {
        MenuItemCreate {
            name: args.name,
            price: args.price,
            category: args.category,
            description: args.description,
            image: args.image,
            is_vegetarian: args.vegetarian.then_some(true),
            is_vegan: args.vegan.then_some(true),
            available: Some(!args.unavailable),
        }
    }
}

impl From<MenuEditArgs> for MenuItemUpdate {
    fn from(args: MenuEditArgs) -> Self {
        MenuItemUpdate {
            name: args.name,
            price: args.price,
            category: args.category,
            description: args.description,
            image: args.image,
            is_vegetarian: args.vegetarian,
            is_vegan: args.vegan,
            available: None,
        }
    }
}

fn render_menu(items: &[&MenuItem]) -> String {
    if items.is_empty() {
        return "No items found".to_string();
    }
    let mut out = String::new();
    for item in items {
        let mut tags = Vec::new();
        if item.is_vegan == Some(true) {
            tags.push("vegan");
        } else if item.is_vegetarian == Some(true) {
            tags.push("veg");
        }
        if !item.available {
            tags.push("SOLD OUT");
        }
        let _ = writeln!(
            out,
            "{:>4}  {:<28} {:<12} {:>8}  {}",
            item.id,
            item.name,
            item.category.label(),
            format_amount(item.price),
            tags.join(", ")
        );
    }
    out
}

/// Ask on stdin, default no
fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

// ========== Order ==========

/// Build the cart from `--item` specs (and `--surprise`)
pub(super) fn build_cart<S: StateStore>(state: &PosState<S>, args: &OrderArgs) -> anyhow::Result<Cart> {
    let mut cart = Cart::new();
    for entry in &args.items {
        add_entry(state, &mut cart, entry)?;
    }
    if args.surprise {
        let item = state
            .catalog()
            .pick_random(&mut rand::thread_rng())
            .context("no available items to pick from")?;
        cart.add_item(item);
    }
    cart.set_discount_percent(args.discount)?;
    Ok(cart)
}

fn add_entry<S: StateStore>(state: &PosState<S>, cart: &mut Cart, entry: &ItemArg) -> anyhow::Result<()> {
    let item = state
        .catalog()
        .get(&entry.id)
        .ok_or_else(|| CatalogError::NotFound(entry.id.clone()))?;
    if !cart.add_item(item) {
        bail!("{} is sold out", item.name);
    }
    if entry.quantity > 1 {
        let extra = i32::try_from(entry.quantity - 1)
            .map_err(|_| anyhow!("quantity {} for {} is too large", entry.quantity, item.name))?;
        cart.update_quantity(&item.id, extra);
    }
    if let Some(note) = &entry.note {
        cart.set_note(&item.id, note);
    }
    Ok(())
}

pub(super) async fn order<S: StateStore>(
    state: &mut PosState<S>,
    config: &Config,
    user: &User,
    args: OrderArgs,
) -> anyhow::Result<String> {
    let mut cart = build_cart(state, &args)?;
    let mut session = initiate_checkout(&cart)?;
    session.set_payment_method(args.pay);
    if args.pay == PaymentMethod::Cash {
        session.set_amount_tendered(args.tendered);
    }

    let totals = session.totals();
    println!(
        "Total {} {} ({} items, discount {})",
        config.currency,
        format_amount(totals.total),
        session.lines().len(),
        format_amount(totals.discount)
    );
    if args.pay == PaymentMethod::Qr {
        let payload = qr_payload(now_millis(), totals.total);
        println!("Scan to pay: {}", qr_image_url(&payload));
    }

    let cancel = CancellationToken::new();
    let on_ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };
    let processed = PaymentProcessor::from_config(config)
        .process(&session, &cancel)
        .await;
    on_ctrl_c.abort();
    let payment = processed?;

    let table = args.table.as_deref().unwrap_or(&config.table_id);
    let order = state.complete_checkout(&mut cart, payment, table, &user.name)?;

    if args.print {
        let printer = host_printer(config)?;
        if let Err(e) = print_receipt(&printer, config, &order).await {
            warn!(order_id = %order.id, error = %e, "Receipt printing failed");
        }
    }
    Ok(order_summary(&order, &config.currency))
}

fn order_summary(order: &Order, currency: &str) -> String {
    let mut out = format!(
        "Order #{} placed for table {}: {} {} by {}",
        order.id,
        order.table_id,
        currency,
        format_amount(order.total),
        order.payment_method
    );
    if order.payment_method == PaymentMethod::Cash {
        if let Some(change) = order.change {
            let _ = write!(out, ", change {}", format_amount(change));
        }
    }
    out
}

// ========== Kitchen ==========

pub(super) fn kitchen<S: StateStore>(
    state: &mut PosState<S>,
    config: &Config,
    cmd: KitchenCommand,
) -> anyhow::Result<String> {
    match cmd {
        KitchenCommand::List => {
            let board = KitchenBoard::new(config.late_after_minutes);
            let tickets = board.tickets(state.orders().all(), now_millis());
            Ok(KitchenTicketRenderer::new(config.receipt_width).render_board(&tickets))
        }
        KitchenCommand::Advance { id } => {
            let order = state.advance_order(&id)?;
            info!(order_id = %order.id, status = %order.status, "Ticket advanced");
            Ok(format!("Order #{} is now {}", order.id, order.status))
        }
    }
}

// ========== Report ==========

pub(super) fn report<S: StateStore>(
    state: &PosState<S>,
    config: &Config,
    args: ReportArgs,
) -> anyhow::Result<String> {
    let orders = state.orders().all();
    let report = match config.timezone {
        Some(tz) => dashboard_report(orders, args.range, &now_in(&tz), config.top_items),
        None => dashboard_report(orders, args.range, &Local::now(), config.top_items),
    };
    if args.json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(render_report(&report, config))
}

fn render_report(report: &DashboardReport, config: &Config) -> String {
    let money = |v: i64| format!("{} {}", config.currency, format_amount(v));
    let mut b = TextBuilder::new(config.receipt_width);

    b.text_center(&format!("Dashboard ({})", report.range));
    b.eq_sep();
    b.pair("Total Revenue", &money(report.metrics.total_revenue));
    b.pair("Transactions", &report.metrics.total_transactions.to_string());
    b.pair("Discounts Given", &money(report.metrics.total_discounts));
    b.pair(
        "Average Order",
        &format!("{} {:.2}", config.currency, report.metrics.average_order_value),
    );

    b.dash_sep();
    b.write_line("Top Selling Items");
    if report.top_items.is_empty() {
        b.write_line("  (none)");
    }
    for (rank, top) in report.top_items.iter().enumerate() {
        b.pair(&format!("  {}. {}", rank + 1, top.name), &top.quantity.to_string());
    }

    b.dash_sep();
    b.write_line("Sales Trend");
    let active: Vec<_> = report.trend.iter().filter(|p| p.orders > 0).collect();
    if active.is_empty() {
        b.write_line("  (no sales)");
    }
    for point in active {
        b.pair(
            &format!("  {}", point.label),
            &format!("{} ({})", format_amount(point.revenue), point.orders),
        );
    }

    b.dash_sep();
    b.write_line("Recent Activity");
    if report.recent_orders.is_empty() {
        b.write_line("  (none)");
    }
    for order in &report.recent_orders {
        b.pair(
            &format!(
                "  #{} {}",
                order.id,
                format_millis(order.timestamp, config.timezone, "%H:%M")
            ),
            &format!("{} {}", format_amount(order.total), order.status),
        );
    }
    b.finalize()
}
