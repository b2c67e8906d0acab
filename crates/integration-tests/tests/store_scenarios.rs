//! Integration tests for the store driven through whole shopping sessions.
//!
//! Each test replays a sequence of shopper actions and checks the derived
//! values (cart count, total price, saved count) after every step.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use brightcart_core::{Price, ProductId, QuantityError, QuantityInput};
use brightcart_integration_tests::{expected_total, huge_price_catalog, two_product_store};
use brightcart_storefront::store::{AddOutcome, LogNotifier, Store, StoreError};

fn id(raw: &str) -> ProductId {
    ProductId::new(raw)
}

fn assert_consistent(store: &Store) {
    assert_eq!(store.total_price(), expected_total(store));
    assert_eq!(store.cart_item_count(), store.cart().len());
    for product in store.products() {
        assert_eq!(
            product.in_cart,
            store.cart_entry(&product.id).is_some(),
            "in_cart flag out of sync for {}",
            product.id
        );
    }
}

// =============================================================================
// Cart Scenarios
// =============================================================================

#[test]
fn test_two_product_price_scenario() {
    let mut store = two_product_store();

    store.add_to_cart(&id("A")).unwrap();
    assert_eq!(store.total_price(), Price::from_cents(1000));
    assert_consistent(&store);

    store.increment_qty(&id("A")).unwrap();
    assert_eq!(store.total_price(), Price::from_cents(2000));
    assert_consistent(&store);

    store.add_to_cart(&id("B")).unwrap();
    assert_eq!(store.total_price(), Price::from_cents(4000));
    assert_eq!(store.cart_item_count(), 2);
    assert_consistent(&store);

    store.delete_from_cart(&id("A")).unwrap().unwrap();
    assert_eq!(store.total_price(), Price::from_cents(2000));
    assert_eq!(store.cart_item_count(), 1);
    assert!(!store.product(&id("A")).unwrap().in_cart);
    assert_consistent(&store);
}

#[test]
fn test_add_twice_equals_add_once() {
    let mut once = two_product_store();
    once.add_to_cart(&id("B")).unwrap();

    let mut twice = two_product_store();
    assert_eq!(twice.add_to_cart(&id("B")).unwrap(), AddOutcome::Added);
    assert_eq!(twice.add_to_cart(&id("B")).unwrap(), AddOutcome::AlreadyInCart);

    assert_eq!(once.snapshot().cart, twice.snapshot().cart);
    assert_eq!(once.total_price(), twice.total_price());
    assert_eq!(once.cart_item_count(), twice.cart_item_count());
}

#[test]
fn test_mixed_session_keeps_total_consistent() {
    let mut store = Store::initialize(Arc::new(LogNotifier));
    let echo = id("echo-dot-4");
    let kindle = id("kindle-paperwhite");
    let book = id("atomic-habits");

    store.add_to_cart(&echo).unwrap();
    assert_consistent(&store);
    store.add_to_cart(&kindle).unwrap();
    assert_consistent(&store);
    store
        .set_quantity(&QuantityInput::from("3"), &kindle)
        .unwrap();
    assert_consistent(&store);
    store.add_to_cart(&book).unwrap();
    store.set_quantity(&QuantityInput::from(5), &book).unwrap();
    assert_consistent(&store);
    store.decrement_qty(&book).unwrap();
    assert_consistent(&store);
    store.delete_from_cart(&echo).unwrap().unwrap();
    assert_consistent(&store);

    // 3 x 139.99 + 4 x 11.99
    assert_eq!(store.total_price(), Price::from_cents(46_793));
    assert_eq!(store.total_price().display(), "$467.93");
    assert_eq!(store.cart_item_count(), 2);
}

#[test]
fn test_rejected_quantity_leaves_session_untouched() {
    let mut store = two_product_store();
    store.add_to_cart(&id("A")).unwrap();
    store.set_quantity(&QuantityInput::from(4), &id("A")).unwrap();
    let before = store.snapshot();

    for bad in ["", "abc", "0", "-2", "1.5"] {
        let err = store
            .set_quantity(&QuantityInput::from(bad), &id("A"))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidQuantity(_)), "input {bad:?}");
    }

    let after = store.snapshot();
    assert_eq!(before.cart, after.cart);
    assert_eq!(before.total_price, after.total_price);
}

#[test]
fn test_quantity_past_decimal_range_leaves_session_untouched() {
    let mut store = Store::with_catalog(huge_price_catalog(), Arc::new(LogNotifier));
    let heavy = id("H");
    store.add_to_cart(&heavy).unwrap();
    store.set_quantity(&QuantityInput::from(3), &heavy).unwrap();
    let before = store.snapshot();

    let err = store
        .set_quantity(&QuantityInput::from("4294967295"), &heavy)
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::InvalidQuantity(QuantityError::TooLarge("4294967295".to_string()))
    );

    let after = store.snapshot();
    assert_eq!(before.cart, after.cart);
    assert_eq!(before.total_price, after.total_price);
    assert_consistent(&store);

    // The session carries on normally afterwards
    store.increment_qty(&heavy).unwrap();
    assert_eq!(store.cart_entry(&heavy).unwrap().quantity.get(), 4);
    assert_consistent(&store);
}

#[test]
fn test_empty_cart_after_removing_everything() {
    let mut store = two_product_store();
    store.add_to_cart(&id("A")).unwrap();
    store.add_to_cart(&id("B")).unwrap();

    store.delete_from_cart(&id("B")).unwrap().unwrap();
    store.delete_from_cart(&id("A")).unwrap().unwrap();
    assert!(store.delete_from_cart(&id("A")).unwrap().is_none());

    assert_eq!(store.cart_item_count(), 0);
    assert_eq!(store.total_price(), Price::ZERO);
    assert_consistent(&store);
}

#[test]
fn test_readd_after_delete_starts_at_quantity_one() {
    let mut store = two_product_store();
    store.add_to_cart(&id("A")).unwrap();
    store.increment_qty(&id("A")).unwrap();
    store.increment_qty(&id("A")).unwrap();
    store.delete_from_cart(&id("A")).unwrap().unwrap();

    assert_eq!(store.add_to_cart(&id("A")).unwrap(), AddOutcome::Added);
    assert_eq!(store.cart_entry(&id("A")).unwrap().quantity.get(), 1);
    assert_eq!(store.total_price(), Price::from_cents(1000));
}

// =============================================================================
// Saved Items Scenarios
// =============================================================================

#[test]
fn test_toggle_saved_twice_restores_state() {
    let mut store = two_product_store();

    assert!(store.toggle_saved(&id("A")).unwrap());
    assert_eq!(store.saved_items_count(), 1);
    assert!(!store.toggle_saved(&id("A")).unwrap());

    assert_eq!(store.saved_items_count(), 0);
    assert!(!store.product(&id("A")).unwrap().is_saved);
}

#[test]
fn test_saved_and_cart_are_independent() {
    let mut store = two_product_store();
    store.toggle_saved(&id("A")).unwrap();
    store.add_to_cart(&id("A")).unwrap();
    store.toggle_saved(&id("B")).unwrap();
    store.delete_from_cart(&id("A")).unwrap().unwrap();

    assert_eq!(store.saved_items_count(), 2);
    assert_eq!(store.saved_products().count(), 2);
    assert_eq!(store.cart_item_count(), 0);
}

#[test]
fn test_unknown_product_is_rejected_everywhere() {
    let mut store = two_product_store();
    let ghost = id("ghost");

    assert_eq!(
        store.toggle_saved(&ghost),
        Err(StoreError::UnknownProduct(ghost.clone()))
    );
    assert_eq!(
        store.add_to_cart(&ghost),
        Err(StoreError::UnknownProduct(ghost.clone()))
    );
    assert_eq!(
        store.increment_qty(&ghost),
        Err(StoreError::NotInCart(ghost.clone()))
    );
    assert_eq!(store.saved_items_count(), 0);
    assert_eq!(store.cart_item_count(), 0);
}
