//! Example: A short scripted swipe session
//!
//! Loads configuration, initialises tracing, and drives the match queue
//! controller over the mock profile source: waits for the first batch,
//! swipes through a few cards, undoes a pass, and runs a shortened boost.
//!
//! Run with: `cargo run -p inferno-infra --example swipe_session`
//!
//! The boost runs for three seconds unless `INFERNO_BOOST_DURATION_SECS` is
//! set.

use std::sync::Arc;
use std::time::Duration;

use inferno_domain::FeedSnapshot;
use inferno_infra::{config, init_tracing, MatchQueueController, MockProfileSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = config::load()?;
    if std::env::var_os("INFERNO_BOOST_DURATION_SECS").is_none() {
        config.boost.duration_secs = 3;
    }
    init_tracing(&config.logging);

    println!("Inferno Swipe Session Example");
    println!("=============================\n");

    let controller = MatchQueueController::new(Arc::new(MockProfileSource::new()), &config);
    let mut updates = controller.subscribe();
    controller.start()?;

    while controller.snapshot().show_loading() {
        updates.changed().await?;
    }
    print_card("Loaded", &controller.snapshot());

    if let Some(profile) = controller.pass() {
        println!("✗ Passed on {}", profile.name);
    }
    if controller.rewind().is_some() {
        print_card("Rewound", &controller.snapshot());
    }
    if let Some(profile) = controller.like() {
        println!("♥ Liked {}", profile.name);
    }
    if let Some(profile) = controller.super_like() {
        println!("★ Super liked {}", profile.name);
    }
    for _ in 0..3 {
        controller.pass();
    }
    print_card("After swiping", &controller.snapshot());

    controller.activate_boost();
    while controller.snapshot().boost_active {
        let snapshot = controller.snapshot();
        println!("🔥 Boost {}", snapshot.boost_countdown.as_deref().unwrap_or("--:--"));
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    println!("Boost over");

    print_card("Final", &controller.snapshot());
    controller.teardown().await?;
    Ok(())
}

fn print_card(label: &str, snapshot: &FeedSnapshot) {
    match &snapshot.current_profile {
        Some(profile) => println!(
            "{label}: {} ({}), {} queued, loading={}",
            profile.name, profile.age, snapshot.queue_len, snapshot.loading
        ),
        None => println!("{label}: no cards, loading={}", snapshot.loading),
    }
}
