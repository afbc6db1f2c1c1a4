//! Typed engine events and the subscriber bus.
//!
//! The engine publishes typed events; any number of subscribers
//! (presentation, logging, tests) attach without the engine knowing their
//! identity. Dispatch is synchronous and in
//! subscription order, so every subscriber sees mutations in the order they
//! were applied.

use std::fmt;

use tui_wordfall_types::ResultEvent;

use crate::round::FallingWord;
use crate::snapshot::RoundSnapshot;

/// Everything the round engine tells the outside world.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A new word entered play (hand it to the motion simulator)
    Spawned(FallingWord),
    /// A word was resolved
    Result(ResultEvent),
    /// State after a mutation, one per mutation, in mutation order
    State(RoundSnapshot),
}

type Subscriber = Box<dyn FnMut(&EngineEvent) + Send>;

/// Subscriber registry with ordered synchronous fan-out.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&EngineEvent) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn publish(&mut self, event: &EngineEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
