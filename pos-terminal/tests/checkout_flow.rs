//! End-to-end: menu → cart → payment → order → kitchen → dashboard,
//! against a real redb file.

use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use pos_terminal::reporting::{aggregate_top_items, dashboard_report, filter_by_range};
use pos_terminal::{
    Cart, KitchenBoard, PaymentProcessor, PosState, RedbStateStore, StateStore, TimeRange,
    initiate_checkout,
};
use shared::{CartItem, Category, MenuItem, MenuItemCreate, Order, OrderStatus, PaymentMethod};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn draft(name: &str, price: i64) -> MenuItemCreate {
    MenuItemCreate {
        name: name.to_string(),
        price,
        category: Some(Category::Dosa),
        ..Default::default()
    }
}

fn instant_payments() -> PaymentProcessor {
    PaymentProcessor::new(Duration::ZERO, Duration::ZERO)
}

#[tokio::test]
async fn test_cash_checkout_persists_pending_order() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("pos.redb");

    let order_id = {
        let mut state = PosState::load(RedbStateStore::open(&db_path).unwrap());
        let dosa = state.create_menu_item(draft("Plain Dosa", 500)).unwrap();
        let vada = state.create_menu_item(draft("Vada", 300)).unwrap();

        let mut cart = Cart::new();
        assert!(cart.add_item(&dosa));
        assert!(cart.add_item(&dosa));
        assert!(cart.add_item(&vada));
        cart.set_discount_percent(10).unwrap();

        let totals = cart.totals();
        assert_eq!((totals.subtotal, totals.discount, totals.total), (1300, 130, 1170));

        let mut session = initiate_checkout(&cart).unwrap();
        session.set_payment_method(PaymentMethod::Cash);
        session.set_amount_tendered(Some(1100));
        assert!(!session.can_confirm());
        session.set_amount_tendered(Some(1200));
        assert_eq!(session.change_preview(), Some(30));

        let payment = instant_payments()
            .process(&session, &CancellationToken::new())
            .await
            .unwrap();
        let order = state
            .complete_checkout(&mut cart, payment, "3", "nimal")
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, 1170);
        assert_eq!(order.amount_tendered, Some(1200));
        assert_eq!(order.change, Some(30));
        order.id
    };

    // 重新打开：菜单与订单都在
    let mut state = PosState::load(RedbStateStore::open(&db_path).unwrap());
    assert_eq!(state.catalog().items()[0].name, "Vada");
    let reloaded = state.orders().get(&order_id).unwrap();
    assert_eq!(reloaded.items.len(), 2);
    assert_eq!(reloaded.items[0].quantity, 2);

    // Kitchen flow
    let tickets = KitchenBoard::default().tickets(state.orders().all(), reloaded.timestamp);
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].action, Some("Start Cooking"));

    assert_eq!(state.advance_order(&order_id).unwrap().status, OrderStatus::Kitchen);
    assert_eq!(state.advance_order(&order_id).unwrap().status, OrderStatus::Ready);
    assert_eq!(state.advance_order(&order_id).unwrap().status, OrderStatus::Completed);
    assert!(state.advance_order(&order_id).is_err());
    assert!(KitchenBoard::default().tickets(state.orders().all(), 0).is_empty());

    // Next order continues the sequence
    let stored = state.store().load_order_seq().unwrap();
    assert_eq!(stored, 100_001);
}

#[tokio::test]
async fn test_cancelled_payment_places_nothing() {
    let mut state = PosState::load(RedbStateStore::open_in_memory().unwrap());
    let item = state.catalog().get("11").unwrap().clone();
    let mut cart = Cart::new();
    cart.add_item(&item);

    let mut session = initiate_checkout(&cart).unwrap();
    session.set_payment_method(PaymentMethod::Qr);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let slow = PaymentProcessor::new(Duration::from_secs(60), Duration::from_secs(60));
    assert!(slow.process(&session, &cancel).await.is_err());
    assert!(state.orders().is_empty());
    assert_eq!(cart.lines().len(), 1);

    // 卡支付不需要现金
    session.set_payment_method(PaymentMethod::Card);
    let payment = instant_payments()
        .process(&session, &CancellationToken::new())
        .await
        .unwrap();
    let order = state.complete_checkout(&mut cart, payment, "7", "anne").unwrap();
    assert_eq!(order.change, Some(0));
    assert_eq!(order.amount_tendered, None);
}

fn sold(id: &str, timestamp: i64, lines: &[(&str, u32)]) -> Order {
    let items: Vec<CartItem> = lines
        .iter()
        .map(|(name, qty)| {
            let mut line = CartItem::new(MenuItem {
                id: name.to_lowercase(),
                name: name.to_string(),
                price: 100,
                category: Category::MainCourse,
                description: None,
                image: None,
                is_vegetarian: None,
                is_vegan: None,
                available: true,
            });
            line.quantity = *qty;
            line
        })
        .collect();
    let subtotal = items.iter().map(|l| l.line_total()).sum();
    Order {
        id: id.to_string(),
        table_id: "3".to_string(),
        items,
        subtotal,
        discount: 0,
        total: subtotal,
        status: OrderStatus::Completed,
        timestamp,
        payment_method: PaymentMethod::Card,
        cashier_name: "nimal".to_string(),
        amount_tendered: None,
        change: Some(0),
    }
}

#[test]
fn test_dashboard_over_stored_orders() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let yesterday = (now - ChronoDuration::days(1)).timestamp_millis();
    let morning = (now - ChronoDuration::hours(3)).timestamp_millis();

    let orders = vec![
        sold("100001", morning, &[("Dosa", 2), ("Biryani", 1)]),
        sold("100002", now.timestamp_millis(), &[("Dosa", 2), ("Biryani", 2)]),
        sold("100003", yesterday, &[("Vada", 9)]),
    ];

    let today = filter_by_range(&orders, TimeRange::Daily, &now);
    assert_eq!(today.len(), 2);
    assert!(today.iter().all(|o| o.id != "100003"));

    let top = aggregate_top_items(today.iter().copied(), 5);
    let top: Vec<(&str, u64)> = top.iter().map(|t| (t.name.as_str(), t.quantity)).collect();
    assert_eq!(top, vec![("Dosa", 4), ("Biryani", 3)]);

    let report = dashboard_report(&orders, TimeRange::Daily, &now, 5);
    assert_eq!(report.metrics.total_transactions, 2);
    assert_eq!(report.metrics.total_revenue, 700);
    assert_eq!(report.trend.len(), 24);
    assert_eq!(report.trend[12].orders, 1);
    assert_eq!(report.recent_orders[0].id, "100002");

    let monthly = dashboard_report(&orders, TimeRange::Monthly, &now, 5);
    assert_eq!(monthly.metrics.total_transactions, 3);
    assert_eq!(monthly.trend.len(), 31);
}
