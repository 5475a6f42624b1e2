use std::fmt;

use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;

use super::{Message, Session, Task};

/// Drives [`Task`]s to completion, feeding each message back into the
/// session in arrival order.
#[derive(Default)]
pub struct Runtime {
    in_flight: FuturesUnordered<BoxFuture<'static, Message>>,
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("in_flight", &self.in_flight.len())
            .finish()
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, task: Task) {
        for future in task.into_futures() {
            self.in_flight.push(future);
        }
    }

    /// Apply a message now and queue whatever work it produced.
    pub fn dispatch(&mut self, session: &mut Session, message: Message) {
        let task = session.update(message);
        self.spawn(task);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }

    /// Wait for the next completion and apply it. Returns `false` once
    /// nothing is left in flight.
    pub async fn step(&mut self, session: &mut Session) -> bool {
        match self.in_flight.next().await {
            Some(message) => {
                self.dispatch(session, message);
                true
            }
            None => false,
        }
    }

    pub async fn run_until_idle(&mut self, session: &mut Session) {
        while self.step(session).await {}
    }
}
