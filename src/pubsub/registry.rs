use std::{
    collections::HashMap,
    pin::Pin,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    task::{Context, Poll},
};

use futures::{stream, stream::BoxStream, Stream, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::LeaderboardRow,
    pubsub::{PubSub, Topic},
};

type Payload = Vec<LeaderboardRow>;

struct RegistryState {
    open: bool,
    topics: HashMap<Topic, broadcast::Sender<Payload>>,
}

struct RegistryInner {
    state: Mutex<RegistryState>,
    listener_buffer: usize,
}

impl RegistryInner {
    fn state(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn deregister(&self, topic: &Topic, listener_id: &Uuid) {
        let mut state = self.state();
        if state
            .topics
            .get(topic)
            .is_some_and(|sender| sender.receiver_count() == 0)
        {
            state.topics.remove(topic);
        }
        log::debug!("Listener {} left {}", listener_id, topic);
    }
}

/// Process-wide topic → channel map. Cloning shares the same map.
///
/// Each topic holds a bounded broadcast channel of `listener_buffer` boards. A
/// listener that falls further behind loses its oldest pending boards, never the
/// newest one.
#[derive(Clone)]
pub struct TopicRegistry {
    inner: Arc<RegistryInner>,
}

impl TopicRegistry {
    pub fn new(listener_buffer: usize) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                state: Mutex::new(RegistryState {
                    open: true,
                    topics: HashMap::new(),
                }),
                listener_buffer: listener_buffer.max(1),
            }),
        }
    }

    pub fn listener_count(&self, topic: &Topic) -> usize {
        self.inner
            .state()
            .topics
            .get(topic)
            .map_or(0, broadcast::Sender::receiver_count)
    }

    pub fn topic_count(&self) -> usize {
        self.inner.state().topics.len()
    }

    pub fn is_open(&self) -> bool {
        self.inner.state().open
    }

    /// Closes every topic, which ends their streams once drained, and refuses
    /// further use. Returns how many listeners were attached.
    pub fn shutdown(&self) -> usize {
        let mut state = self.inner.state();
        state.open = false;
        let dropped = state
            .topics
            .values()
            .map(broadcast::Sender::receiver_count)
            .sum();
        state.topics.clear();
        log::info!("Topic registry shut down, dropped {} listener(s)", dropped);
        dropped
    }
}

impl PubSub for TopicRegistry {
    fn publish(&self, topic: &Topic, payload: Payload) -> AppResult<usize> {
        let mut state = self.inner.state();
        if !state.open {
            return Err(AppError::ConfigurationError(
                "Pub/sub bus has been shut down".to_string(),
            ));
        }

        let Some(sender) = state.topics.get(topic) else {
            return Ok(0);
        };

        match sender.send(payload) {
            Ok(listeners) => Ok(listeners),
            Err(_) => {
                state.topics.remove(topic);
                Ok(0)
            }
        }
    }

    fn subscribe(&self, topic: &Topic) -> AppResult<LeaderboardStream> {
        let mut state = self.inner.state();
        if !state.open {
            return Err(AppError::ConfigurationError(
                "Pub/sub bus has been shut down".to_string(),
            ));
        }

        let listener_buffer = self.inner.listener_buffer;
        let receiver = state
            .topics
            .entry(topic.clone())
            .or_insert_with(|| broadcast::channel(listener_buffer).0)
            .subscribe();
        let listener_id = Uuid::new_v4();

        log::debug!("Listener {} joined {}", listener_id, topic);

        Ok(LeaderboardStream {
            updates: receive(receiver, topic.clone(), listener_id),
            registration: Registration {
                registry: Arc::downgrade(&self.inner),
                topic: topic.clone(),
                listener_id,
            },
        })
    }
}

fn receive(
    receiver: broadcast::Receiver<Payload>,
    topic: Topic,
    listener_id: Uuid,
) -> BoxStream<'static, Payload> {
    stream::unfold(receiver, move |mut receiver| {
        let topic = topic.clone();
        async move {
            loop {
                match receiver.recv().await {
                    Ok(payload) => return Some((payload, receiver)),
                    Err(RecvError::Lagged(skipped)) => log::warn!(
                        "Listener {} on {} fell behind, skipped {} older update(s)",
                        listener_id,
                        topic,
                        skipped
                    ),
                    Err(RecvError::Closed) => return None,
                }
            }
        }
    })
    .boxed()
}

struct Registration {
    registry: Weak<RegistryInner>,
    topic: Topic,
    listener_id: Uuid,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.deregister(&self.topic, &self.listener_id);
        }
    }
}

/// Every payload broadcast on one topic, in publish order, until dropped.
///
/// Dropping the stream detaches the listener immediately. The stream only ends
/// on its own when the registry shuts down.
pub struct LeaderboardStream {
    // dropped before `registration` so the receiver count is already updated
    updates: BoxStream<'static, Payload>,
    registration: Registration,
}

impl LeaderboardStream {
    #[cfg(test)]
    fn topic(&self) -> &Topic {
        &self.registration.topic
    }
}

impl Stream for LeaderboardStream {
    type Item = Payload;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.updates.poll_next_unpin(cx)
    }
}
