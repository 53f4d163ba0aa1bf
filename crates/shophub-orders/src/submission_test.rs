use chrono::TimeZone;
use shophub_core::{Product, Rating};

use super::*;

fn product(id: u64, title: &str, cents: i64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: Decimal::new(cents, 2),
        description: String::new(),
        category: "electronics".to_string(),
        image: String::new(),
        rating: Rating::default(),
    }
}

fn form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        address: "12 Analytical Way".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62701".to_string(),
        ..CheckoutForm::default()
    }
}

fn cart() -> Cart {
    let mut cart = Cart::new();
    cart.add(&product(1, "Backpack", 10_995), 2).unwrap();
    cart.add(&product(21, "Wireless Earbuds", 7_999), 1).unwrap();
    cart
}

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
}

fn field<'a>(fields: &'a [(&'static str, String)], name: &str) -> &'a str {
    fields
        .iter()
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.as_str())
        .unwrap_or_else(|| panic!("missing field {name}"))
}

#[test]
fn fields_are_emitted_in_relay_order() {
    let fields = OrderSubmission::new(&form(), &cart(), at())
        .unwrap()
        .to_form_fields()
        .unwrap();
    let names: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        names,
        [
            "name",
            "email",
            "phone",
            "shippingAddress",
            "products",
            "subtotal",
            "tax",
            "totalPrice",
            "totalItems",
            "notes",
            "orderDate",
        ]
    );
}

#[test]
fn totals_are_currency_strings() {
    // subtotal 2 * 109.95 + 79.99 = 299.89, tax 23.9912, total 323.8812
    let fields = OrderSubmission::new(&form(), &cart(), at())
        .unwrap()
        .to_form_fields()
        .unwrap();
    assert_eq!(field(&fields, "subtotal"), "$299.89");
    assert_eq!(field(&fields, "tax"), "$23.99");
    assert_eq!(field(&fields, "totalPrice"), "$323.88");
    assert_eq!(field(&fields, "totalItems"), "3");
}

#[test]
fn contact_fields_are_composed() {
    let fields = OrderSubmission::new(&form(), &cart(), at())
        .unwrap()
        .to_form_fields()
        .unwrap();
    assert_eq!(field(&fields, "name"), "Ada Lovelace");
    assert_eq!(field(&fields, "phone"), "555-0100");
    assert_eq!(
        field(&fields, "shippingAddress"),
        "12 Analytical Way, Springfield, IL 62701, United States"
    );
}

#[test]
fn blank_notes_get_placeholder() {
    let mut form = form();
    form.notes = "   ".to_string();
    let fields = OrderSubmission::new(&form, &cart(), at())
        .unwrap()
        .to_form_fields()
        .unwrap();
    assert_eq!(field(&fields, "notes"), "No additional notes");

    form.notes = "Leave at the door".to_string();
    let fields = OrderSubmission::new(&form, &cart(), at())
        .unwrap()
        .to_form_fields()
        .unwrap();
    assert_eq!(field(&fields, "notes"), "Leave at the door");
}

#[test]
fn order_date_is_utc_with_millis() {
    let fields = OrderSubmission::new(&form(), &cart(), at())
        .unwrap()
        .to_form_fields()
        .unwrap();
    assert_eq!(field(&fields, "orderDate"), "2024-03-09T14:05:07.000Z");
}

#[test]
fn products_field_is_pretty_json_with_numeric_prices() {
    let fields = OrderSubmission::new(&form(), &cart(), at())
        .unwrap()
        .to_form_fields()
        .unwrap();
    let products = field(&fields, "products");
    assert!(products.contains('\n'), "expected pretty-printed JSON");

    let parsed: serde_json::Value = serde_json::from_str(products).unwrap();
    let lines = parsed.as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[0]["title"], "Backpack");
    assert_eq!(lines[0]["quantity"], 2);
    assert_eq!(lines[0]["price"].as_f64(), Some(109.95));
    assert_eq!(lines[0]["total"].as_f64(), Some(219.9));
    assert_eq!(lines[1]["id"], 21);
}

#[test]
fn snapshot_counts_items_and_lines() {
    let submission = OrderSubmission::new(&form(), &cart(), at()).unwrap();
    assert_eq!(submission.lines.len(), 2);
    assert_eq!(submission.total_items, 3);
    assert_eq!(submission.lines[0].total, Decimal::new(21_990, 2));
}

#[test]
fn stored_cart_with_overflowing_line_is_an_error() {
    let mut huge = product(1, "Huge", 0);
    huge.price = Decimal::MAX;
    let cart = Cart::from_lines(vec![CartLine {
        product: huge,
        quantity: 2,
    }]);

    let result = OrderSubmission::new(&form(), &cart, at());
    assert!(
        matches!(result, Err(OrderError::Amount(_))),
        "expected Amount error, got: {result:?}"
    );
}
