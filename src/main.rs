//! Interactive menu driver for the corretora core.
//!
//! This binary is a thin CLI layer: it parses and re-prompts on malformed
//! input, then calls into the library with validated values. All rendering
//! of ledgers, balances and valuations happens here.

use std::io::{self, Write};

use rust_decimal::Decimal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use corretora::accounts::{transfer, Account, DepositChannel};
use corretora::assets::AssetCatalog;
use corretora::constants::DISPLAY_DECIMAL_PRECISION;
use corretora::portfolio::payout;
use corretora::users::{CredentialVerifier, InMemoryVerifier, NewUser, User};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let catalog = AssetCatalog::default();
    let mut verifier = InMemoryVerifier::new();

    println!("=== Corretora ===");
    let mut user = register(&mut verifier)?;
    if !login(&verifier) {
        println!("Too many failed attempts, exiting.");
        return Ok(());
    }
    println!("Welcome, {}.", user.name);

    main_menu(&mut user, &catalog);
    println!("Goodbye.");
    Ok(())
}

// ==================== Registration & login ====================

fn register(verifier: &mut InMemoryVerifier) -> anyhow::Result<User> {
    loop {
        println!("\n=== Registration ===");
        let input = NewUser {
            name: prompt("Name: ")?,
            document: prompt("CPF: ")?,
            password: prompt("Password: ")?,
        };
        match User::register(&input) {
            Ok(user) => {
                verifier.enroll(input.document.as_str(), input.password.as_str());
                println!("User {} registered.", user.name);
                return Ok(user);
            }
            Err(e) => println!("Registration rejected: {e}"),
        }
    }
}

fn login(verifier: &impl CredentialVerifier) -> bool {
    for _ in 0..3 {
        println!("\n=== Login ===");
        let document = prompt("CPF: ").unwrap_or_default();
        let password = prompt("Password: ").unwrap_or_default();
        if verifier.verify(document.trim(), &password) {
            return true;
        }
        println!("CPF or password incorrect.");
    }
    false
}

// ==================== Menus ====================

fn main_menu(user: &mut User, catalog: &AssetCatalog) {
    loop {
        println!("\n=== Main Menu ===");
        println!("1 - Bank account");
        println!("2 - Investment account");
        println!("0 - Exit");
        match read_u32("Choice: ") {
            1 => bank_menu(user),
            2 => investment_menu(user, catalog),
            0 => return,
            _ => println!("Invalid option."),
        }
    }
}

fn bank_menu(user: &mut User) {
    loop {
        println!("\n=== Bank Account ===");
        println!(
            "Balance: {}",
            user.bank.balance().round_dp(DISPLAY_DECIMAL_PRECISION)
        );
        println!("1 - Deposit (PIX, no fee)");
        println!("2 - Deposit (TED, 1% fee)");
        println!("3 - Transfer to investments");
        println!("4 - Transfer to another bank");
        println!("5 - Statement");
        println!("0 - Back");
        match read_u32("Choice: ") {
            1 => {
                let amount = read_decimal("Amount: ");
                report(user.bank.deposit(amount, DepositChannel::Pix).map(|_| ()));
            }
            2 => {
                let amount = read_decimal("Amount: ");
                report(user.bank.deposit(amount, DepositChannel::Ted).map(|_| ()));
            }
            3 => {
                let amount = read_decimal("Amount: ");
                report(transfer(&mut user.bank, &mut user.investment, amount));
            }
            4 => {
                let amount = read_decimal("Amount: ");
                report(user.bank.transfer_external(amount, "external bank"));
            }
            5 => print_statement(&user.bank),
            0 => return,
            _ => println!("Invalid option."),
        }
    }
}

fn investment_menu(user: &mut User, catalog: &AssetCatalog) {
    loop {
        println!("\n=== Investment Account ===");
        println!(
            "Cash: {}",
            user.investment
                .balance()
                .round_dp(DISPLAY_DECIMAL_PRECISION)
        );
        println!("1 - Statement");
        println!("2 - Available instruments");
        println!("3 - Buy");
        println!("4 - Sell");
        println!("5 - Portfolio");
        println!("6 - Redeem to bank");
        println!("7 - Simulate payouts");
        println!("0 - Back");
        match read_u32("Choice: ") {
            1 => print_statement(&user.investment),
            2 => print_catalog(catalog),
            3 => {
                let ticker = prompt("Ticker: ").unwrap_or_default().trim().to_string();
                let quantity = read_u32("Quantity: ");
                report(
                    user.portfolio
                        .buy(catalog, &mut user.investment, &ticker, quantity),
                );
            }
            4 => {
                let ticker = prompt("Ticker: ").unwrap_or_default().trim().to_string();
                let quantity = read_u32("Quantity: ");
                match user
                    .portfolio
                    .sell(catalog, &mut user.investment, &ticker, quantity)
                {
                    Ok(proceeds) => println!(
                        "Sold for {}",
                        proceeds.round_dp(DISPLAY_DECIMAL_PRECISION)
                    ),
                    Err(e) => println!("Operation rejected: {e}"),
                }
            }
            5 => print_portfolio(user, catalog),
            6 => {
                let amount = read_decimal("Amount: ");
                report(transfer(&mut user.investment, &mut user.bank, amount));
            }
            7 => {
                let months = read_u32("Months to simulate: ");
                match payout::simulate(&user.portfolio, &mut user.bank, catalog, months) {
                    Ok(summary) => {
                        for event in &summary.events {
                            println!(
                                "Month {:>2}: {} paid {}",
                                event.month,
                                event.ticker,
                                event.amount.round_dp(DISPLAY_DECIMAL_PRECISION)
                            );
                        }
                        println!(
                            "Credited {} to the bank account over {} months.",
                            summary
                                .total_credited
                                .round_dp(DISPLAY_DECIMAL_PRECISION),
                            summary.months
                        );
                    }
                    Err(e) => println!("Operation rejected: {e}"),
                }
            }
            0 => return,
            _ => println!("Invalid option."),
        }
    }
}

// ==================== Rendering ====================

fn print_statement(account: &Account) {
    println!("\n=== Statement: {} ===", account.name);
    for entry in account.ledger().entries() {
        println!(
            "[{}] {:<17} | {:<32} | {:>10} | fee {:>6} | balance {:>10}",
            entry.timestamp.format("%d/%m/%Y %H:%M"),
            entry.category.as_str(),
            entry.description,
            entry.amount.round_dp(DISPLAY_DECIMAL_PRECISION),
            entry.fee.round_dp(DISPLAY_DECIMAL_PRECISION),
            entry.balance_after.round_dp(DISPLAY_DECIMAL_PRECISION),
        );
    }
    println!(
        "Current balance: {}",
        account.balance().round_dp(DISPLAY_DECIMAL_PRECISION)
    );
}

fn print_catalog(catalog: &AssetCatalog) {
    println!("\n=== Available Instruments ===");
    for instrument in catalog.all() {
        println!(
            "{:<7} {:<20} price {:>8} | payout {:>6} x{}/year{}",
            instrument.ticker,
            instrument.name,
            instrument.price.round_dp(DISPLAY_DECIMAL_PRECISION),
            instrument
                .payout_per_period
                .round_dp(DISPLAY_DECIMAL_PRECISION),
            instrument.payout_frequency.per_year(),
            if instrument.tax_exempt {
                " (tax exempt)"
            } else {
                ""
            },
        );
    }
}

fn print_portfolio(user: &User, catalog: &AssetCatalog) {
    println!("\n=== Portfolio ===");
    match user
        .portfolio
        .valuation(catalog, user.investment.balance())
    {
        Ok(valuation) => {
            for position in &valuation.positions {
                println!(
                    "{:<7} qty {:>5} | avg cost {:>8} | value {:>10} | {:>5.1}%",
                    position.ticker,
                    position.quantity,
                    position.average_cost.round_dp(DISPLAY_DECIMAL_PRECISION),
                    position.market_value.round_dp(DISPLAY_DECIMAL_PRECISION),
                    position.allocation * Decimal::ONE_HUNDRED,
                );
            }
            println!(
                "Holdings: {} | Cash: {} | Total: {}",
                valuation.market_value.round_dp(DISPLAY_DECIMAL_PRECISION),
                valuation.cash.round_dp(DISPLAY_DECIMAL_PRECISION),
                valuation.total_value.round_dp(DISPLAY_DECIMAL_PRECISION),
            );
        }
        Err(e) => println!("Valuation failed: {e}"),
    }
}

// ==================== Input helpers ====================

fn report<T>(result: corretora::Result<T>) {
    match result {
        Ok(_) => println!("Done."),
        Err(e) => println!("Operation rejected: {e}"),
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Re-prompts until the input parses; the core never sees malformed input.
fn read_decimal(label: &str) -> Decimal {
    loop {
        match prompt(label) {
            Ok(line) => match line.trim().parse::<Decimal>() {
                Ok(value) => return value,
                Err(_) => println!("Enter a valid number."),
            },
            Err(_) => println!("Enter a valid number."),
        }
    }
}

fn read_u32(label: &str) -> u32 {
    loop {
        match prompt(label) {
            Ok(line) => match line.trim().parse::<u32>() {
                Ok(value) => return value,
                Err(_) => println!("Enter a whole number."),
            },
            Err(_) => println!("Enter a whole number."),
        }
    }
}
