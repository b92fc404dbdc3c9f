use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

#[test]
fn test_money_zero() {
    let money = Money::zero(Currency::Pkr);
    assert!(money.is_zero());
    assert_eq!(money.amount, Decimal::ZERO);
    assert_eq!(money.currency, Currency::Pkr);
}

#[test]
fn test_money_with_amount_keeps_currency() {
    let money = Money::new(dec!(2500), Currency::Inr).with_amount(dec!(2700));
    assert_eq!(money.amount, dec!(2700));
    assert_eq!(money.currency, Currency::Inr);
}

#[test]
fn test_money_is_negative() {
    assert!(!Money::new(dec!(10), Currency::Usd).is_negative());
    assert!(Money::new(dec!(-10), Currency::Usd).is_negative());
    assert!(!Money::new(dec!(0), Currency::Usd).is_negative());
}

#[test]
fn test_money_display() {
    assert_eq!(Money::new(dec!(4500.50), Currency::Pkr).to_string(), "PKR 4500.50");
}

#[test]
fn test_currency_from_str() {
    assert_eq!(Currency::from_str("PKR").unwrap(), Currency::Pkr);
    assert_eq!(Currency::from_str("pkr").unwrap(), Currency::Pkr);
    assert_eq!(Currency::from_str("INR").unwrap(), Currency::Inr);
    assert_eq!(Currency::from_str("aed").unwrap(), Currency::Aed);

    assert!(Currency::from_str("XXX").is_err());
    assert!(Currency::from_str("").is_err());
}
