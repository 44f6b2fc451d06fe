//! Demonstrates tracing integration with named needs
//!
//! Run with: cargo run --example tracing_demo --features tracing

use needs::prelude::*;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let maintenance = Switch::new(false);
    let writes = maintenance.clone().negate().named("writes-enabled");
    let login = Const::new(true).named("login");
    let admin = Const::new(false).named("admin");

    let publish = login.and_with(writes).guard(|| "published");
    match publish.call() {
        Ok(msg) => tracing::info!("publish: {}", msg),
        Err(e) => tracing::warn!("publish denied: {}", e),
    }

    maintenance.set(true);
    match publish.call() {
        Ok(msg) => tracing::info!("publish: {}", msg),
        Err(e) => tracing::warn!("publish denied: {}", e),
    }

    // Or only consults the second operand when the first is unmet
    let moderate = admin.or_with(Const::new(false).named("moderator"));
    if let Err(e) = moderate.enforce() {
        tracing::warn!("moderation denied: {}", e);
    }
}
