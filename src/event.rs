use color_eyre::eyre::OptionExt;
use crossterm::event::Event as CrosstermEvent;
use futures::{FutureExt, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::api::types::ClassifiedTweet;

/// Representation of all possible events.
#[derive(Clone, Debug)]
pub enum Event {
    /// An event that is emitted on a regular schedule.
    Tick,
    /// Crossterm events from the terminal.
    Crossterm(CrosstermEvent),
    /// Application-level events.
    App(Box<AppEvent>),
}

/// Application events for navigation, backend requests, and their results.
#[derive(Clone, Debug)]
pub enum AppEvent {
    // -- Navigation --
    Quit,
    ToggleMenu,
    CloseMenu,
    GoTo(PageId),

    // -- Backend request triggers (sent from key handlers) --
    FetchClassifications,
    ShowDisasterMap,

    // -- Backend results (sent from async tasks back to the event loop) --
    ClassificationsLoaded {
        /// Token issued at dispatch; stale responses are discarded.
        request_id: u64,
        result: ApiResult<Vec<ClassifiedTweet>>,
    },
    MapFinished(ApiResult<()>),

    // -- Overlays --
    DismissError,
}

/// Result type using `Arc<String>` errors so events stay `Clone`.
pub type ApiResult<T> = Result<T, Arc<String>>;

/// Identifies which of the three mutually exclusive pages is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Home,
    Tweets,
    About,
}

/// Terminal event handler.
///
/// Spawns a background task that emits tick and crossterm events, and exposes
/// an unbounded channel for application events.
#[derive(Debug)]
pub struct EventHandler {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver channel.
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] and spawns the event
    /// task emitting ticks at the given frequency.
    pub fn new(tick_fps: f64) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = EventTask::new(sender.clone(), tick_fps);
        tokio::spawn(async { actor.run().await });
        Self { sender, receiver }
    }

    /// Receives the next event, blocking until one is available.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }

    /// Queue an app event to be processed by the event loop.
    pub fn send(&self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(Box::new(app_event)));
    }

    /// Clone the underlying sender for use in spawned async tasks.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }
}

/// Background task that reads crossterm events and emits ticks.
struct EventTask {
    sender: mpsc::UnboundedSender<Event>,
    tick_fps: f64,
}

impl EventTask {
    fn new(sender: mpsc::UnboundedSender<Event>, tick_fps: f64) -> Self {
        Self { sender, tick_fps }
    }

    async fn run(self) -> color_eyre::Result<()> {
        // Clamp so a zero or absurd configured rate cannot produce an
        // invalid interval.
        let tick_rate = Duration::from_secs_f64(1.0 / self.tick_fps.clamp(1.0, 240.0));
        let mut reader = crossterm::event::EventStream::new();
        let mut tick = tokio::time::interval(tick_rate);
        loop {
            let tick_delay = tick.tick();
            let crossterm_event = reader.next().fuse();
            tokio::select! {
                _ = self.sender.closed() => {
                    break;
                }
                _ = tick_delay => {
                    self.send(Event::Tick);
                }
                Some(Ok(evt)) = crossterm_event => {
                    self.send(Event::Crossterm(evt));
                }
            };
        }
        Ok(())
    }

    fn send(&self, event: Event) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn app_events_round_trip_through_configured_handler() {
        let mut events = EventHandler::new(10.0);
        events.send(AppEvent::Quit);

        // Ticks may interleave; the queued app event must still arrive.
        loop {
            match events.next().await.unwrap() {
                Event::App(evt) => {
                    assert!(matches!(*evt, AppEvent::Quit));
                    break;
                }
                _ => {}
            }
        }
    }
}
