use std::fmt;
use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::messages::Message;

/// Deferred work produced by [`Session::update`](super::Session::update).
///
/// Each future resolves to exactly one message that is fed back into the
/// session by whoever drives it.
#[must_use = "a Task does nothing unless handed to a Runtime"]
pub struct Task {
    futures: Vec<BoxFuture<'static, Message>>,
}

impl Task {
    pub fn none() -> Self {
        Self {
            futures: Vec::new(),
        }
    }

    /// A message delivered on the next runtime step.
    pub fn done(message: Message) -> Self {
        Self {
            futures: vec![async move { message }.boxed()],
        }
    }

    pub fn perform<F, T>(
        future: F,
        map: impl FnOnce(T) -> Message + Send + 'static,
    ) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        Self {
            futures: vec![future.map(map).boxed()],
        }
    }

    pub fn batch(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            futures: tasks.into_iter().flat_map(|task| task.futures).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.futures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.futures.is_empty()
    }

    pub(crate) fn into_futures(self) -> Vec<BoxFuture<'static, Message>> {
        self.futures
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("futures", &self.futures.len())
            .finish()
    }
}
