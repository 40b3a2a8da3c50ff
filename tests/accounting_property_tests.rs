//! Property-based tests for the accounting core.
//!
//! These verify the algebraic invariants of deposits, transfers, buys and
//! sells across randomly generated inputs, using the `proptest` crate.

use proptest::prelude::*;
use rust_decimal::Decimal;

use corretora::accounts::{transfer, Account, DepositChannel};
use corretora::assets::{AssetCatalog, Instrument, PayoutFrequency};
use corretora::portfolio::Portfolio;

// =============================================================================
// Generators
// =============================================================================

/// Generates a positive monetary amount with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_00).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a deposit channel.
fn arb_channel() -> impl Strategy<Value = DepositChannel> {
    prop_oneof![Just(DepositChannel::Pix), Just(DepositChannel::Ted)]
}

/// Generates a unit price with two decimal places.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..=500_00).prop_map(|cents| Decimal::new(cents, 2))
}

fn catalog_with_price(price: Decimal) -> AssetCatalog {
    AssetCatalog::new(vec![Instrument {
        ticker: "PROP3".to_string(),
        name: "Property Test Asset".to_string(),
        price,
        payout_per_period: Decimal::new(10, 2),
        payout_frequency: PayoutFrequency::Monthly,
        tax_exempt: false,
    }])
}

fn funded(amount: Decimal) -> Account {
    let mut account = Account::new("Investments");
    account.deposit(amount, DepositChannel::Pix).unwrap();
    account
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For every valid deposit, `new = old + amount - fee` and the
    /// appended ledger entry carries the matching signed amount.
    #[test]
    fn prop_deposit_balance_arithmetic(
        amount in arb_amount(),
        channel in arb_channel(),
    ) {
        let mut account = Account::new("Bank");
        let old = account.balance();

        let credited = account.deposit(amount, channel).unwrap();
        let fee = channel.fee_for(amount);

        prop_assert_eq!(credited, amount - fee);
        prop_assert_eq!(account.balance(), old + amount - fee);

        let entry = account.ledger().entries().last().unwrap();
        prop_assert_eq!(entry.amount, credited);
        prop_assert_eq!(entry.fee, fee);
        prop_assert_eq!(entry.balance_after, account.balance());
    }

    /// Transfers conserve total cash and never drive a balance negative.
    #[test]
    fn prop_transfer_conserves_cash(
        funding in arb_amount(),
        requested in arb_amount(),
    ) {
        let mut source = funded(funding);
        let mut destination = Account::new("Bank");
        let total_before = source.balance() + destination.balance();

        let _ = transfer(&mut source, &mut destination, requested);

        prop_assert_eq!(source.balance() + destination.balance(), total_before);
        prop_assert!(source.balance() >= Decimal::ZERO);
        prop_assert!(destination.balance() >= Decimal::ZERO);
    }

    /// A buy debits exactly `price * quantity`.
    #[test]
    fn prop_buy_debits_exact_cost(
        price in arb_price(),
        quantity in 1u32..100,
    ) {
        let catalog = catalog_with_price(price);
        let cost = price * Decimal::from(quantity);
        let mut cash = funded(cost);
        let mut portfolio = Portfolio::new();

        portfolio.buy(&catalog, &mut cash, "PROP3", quantity).unwrap();

        prop_assert_eq!(cash.balance(), Decimal::ZERO);
        prop_assert_eq!(portfolio.holding("PROP3").unwrap().quantity, quantity);
    }

    /// Buying q1 at p1 then q2 at p2 yields the quantity-weighted mean
    /// average cost `(q1*p1 + q2*p2) / (q1 + q2)`.
    #[test]
    fn prop_weighted_average_cost(
        p1 in arb_price(),
        p2 in arb_price(),
        q1 in 1u32..100,
        q2 in 1u32..100,
    ) {
        let cost1 = p1 * Decimal::from(q1);
        let cost2 = p2 * Decimal::from(q2);
        let mut cash = funded(cost1 + cost2);
        let mut portfolio = Portfolio::new();

        portfolio.buy(&catalog_with_price(p1), &mut cash, "PROP3", q1).unwrap();
        portfolio.buy(&catalog_with_price(p2), &mut cash, "PROP3", q2).unwrap();

        let holding = portfolio.holding("PROP3").unwrap();
        let expected = (cost1 + cost2) / Decimal::from(q1 + q2);
        prop_assert_eq!(holding.quantity, q1 + q2);
        prop_assert_eq!(holding.average_cost, expected);
    }

    /// Partial sells leave the average cost unchanged; a full sell removes
    /// the holding.
    #[test]
    fn prop_sell_preserves_average_cost(
        price in arb_price(),
        bought in 2u32..100,
        sold_fraction in 1u32..100,
    ) {
        let catalog = catalog_with_price(price);
        let mut cash = funded(price * Decimal::from(bought));
        let mut portfolio = Portfolio::new();
        portfolio.buy(&catalog, &mut cash, "PROP3", bought).unwrap();
        let average_before = portfolio.holding("PROP3").unwrap().average_cost;

        let sold = (sold_fraction % bought) + 1;
        portfolio.sell(&catalog, &mut cash, "PROP3", sold).unwrap();

        if sold == bought {
            prop_assert!(portfolio.holding("PROP3").is_none());
        } else {
            let holding = portfolio.holding("PROP3").unwrap();
            prop_assert_eq!(holding.quantity, bought - sold);
            prop_assert_eq!(holding.average_cost, average_before);
        }
    }

    /// After any buy/sell sequence, valuation equals cash plus the market
    /// value of the remaining holdings.
    #[test]
    fn prop_valuation_equals_cash_plus_holdings(
        price in arb_price(),
        buys in proptest::collection::vec(1u32..20, 1..5),
        sells in proptest::collection::vec(1u32..20, 0..5),
    ) {
        let catalog = catalog_with_price(price);
        let funding = price * Decimal::from(10_000u32);
        let mut cash = funded(funding);
        let mut portfolio = Portfolio::new();

        for quantity in buys {
            portfolio.buy(&catalog, &mut cash, "PROP3", quantity).unwrap();
        }
        for quantity in sells {
            // Sells beyond the held quantity are rejected without mutation.
            let _ = portfolio.sell(&catalog, &mut cash, "PROP3", quantity);
        }

        let held = portfolio.holding("PROP3").map(|h| h.quantity).unwrap_or(0);
        let valuation = portfolio.valuation(&catalog, cash.balance()).unwrap();

        prop_assert_eq!(valuation.market_value, price * Decimal::from(held));
        prop_assert_eq!(valuation.total_value, cash.balance() + valuation.market_value);
        // Trading at a fixed price never creates or destroys value.
        prop_assert_eq!(valuation.total_value, funding);
    }
}
