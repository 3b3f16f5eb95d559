//! Swipe feed: queue, undo, refill policy and boost window

pub mod boost;
pub mod ports;
pub mod queue;
pub mod service;
