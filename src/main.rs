//! Memo Cache - demonstration binary
//!
//! Embeds a set of named caches the way a mapping engine would: one cache per
//! kind of derived metadata, all reporting to a single statistics manager.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memo_cache::{CacheManager, Config, StatisticsManager};

/// Type pairs whose conversion plan is looked up repeatedly.
const LOOKUPS: &[(&str, &str)] = &[
    ("Order", "OrderDto"),
    ("Customer", "CustomerDto"),
    ("Order", "OrderDto"),
    ("Address", "AddressDto"),
    ("Customer", "CustomerDto"),
    ("Invoice", "InvoiceDto"),
    ("Order", "OrderDto"),
];

/// Stand-in for an expensive reflection-driven computation.
fn build_plan(source: &str, destination: &str) -> String {
    format!("{source} -> {destination}")
}

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memo_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_max_size={}, statistics_enabled={}",
        config.default_max_size, config.statistics_enabled
    );

    let statistics = Arc::new(StatisticsManager::from_config(&config));
    let manager: CacheManager<(String, String), String> =
        CacheManager::with_config(statistics.clone(), &config);

    let plans = manager
        .add_default_cache("mapping-plans")
        .context("failed to register mapping plan cache")?;
    manager
        .add_cache("super-types", 3)
        .context("failed to register super type cache")?;

    for (source, destination) in LOOKUPS {
        let key = (source.to_string(), destination.to_string());
        let plan = plans.get_or_insert_with(key, || build_plan(source, destination));
        info!(plan = %plan, "Resolved mapping plan");
    }

    manager.log_caches();

    let report = serde_json::to_string_pretty(&statistics.report())
        .context("failed to render statistics report")?;
    println!("{report}");

    Ok(())
}
