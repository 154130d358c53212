//! Demonstrates tracing integration with outcomes
//!
//! Run with: cargo run --example tracing_demo --features tracing

use std::time::Duration;

use twotrack::async_outcome::{self, OutcomeFutureExt};
use twotrack::tracing::{OutcomeFutureTracingExt, OutcomeTracingExt};
use twotrack::Outcome;

#[tokio::main]
async fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let parsed = parse_quantity("12").traced("parse-quantity");
    tracing::info!("Parsed: {:?}", parsed);

    let order = async_outcome::combine((fetch_stock("apples"), fetch_price("apples")))
        .instrument_outcome(tracing::info_span!("load_order", item = "apples"))
        .map_success(|(stock, price): (u32, f64)| stock.min(10) as f64 * price)
        .await;

    match order {
        Outcome::Success(total) => tracing::info!("Order total: {:.2}", total),
        Outcome::Failure(e) => tracing::error!("Order failed: {}", e),
    }

    // A failing lookup surfaces through combine's trace event
    let missing = async_outcome::combine((fetch_stock("durian"), fetch_price("durian")))
        .instrument_outcome(tracing::info_span!("load_order", item = "durian"))
        .await;
    tracing::info!("Missing item result: {:?}", missing);
}

fn parse_quantity(raw: &str) -> Outcome<u32, String> {
    raw.parse::<u32>().map_err(|e| e.to_string()).into()
}

async fn fetch_stock(item: &'static str) -> Outcome<u32, String> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    match item {
        "apples" => Outcome::success(40),
        other => Outcome::failure(format!("no stock record for {other}")),
    }
}

async fn fetch_price(item: &'static str) -> Outcome<f64, String> {
    tokio::time::sleep(Duration::from_millis(2)).await;
    match item {
        "apples" => Outcome::success(0.35),
        other => Outcome::failure(format!("no price for {other}")),
    }
}
