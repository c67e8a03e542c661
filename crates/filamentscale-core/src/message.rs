//! Plugin push-message channel
//!
//! Provides:
//! - The message type pushed by the host for each scale reading
//! - A dispatcher for publishing messages to subscribers

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Source identifier the scale plugin publishes under.
pub const PLUGIN_CHANNEL: &str = "filament_scale";

/// One push message from the host message bus.
///
/// The payload is the raw reading text; interpretation is left to the
/// consumer so that mismatched channels can be discarded without parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMessage {
    /// Source identifier of the publishing plugin.
    pub plugin: String,
    /// Raw payload, a scalar-or-text weight reading.
    pub payload: String,
}

impl PluginMessage {
    /// Create a message from an arbitrary source.
    pub fn new(plugin: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            payload: payload.into(),
        }
    }

    /// Create a reading message on the scale plugin's own channel.
    pub fn reading(payload: impl Into<String>) -> Self {
        Self::new(PLUGIN_CHANNEL, payload)
    }
}

/// Dispatcher for publishing plugin messages to subscribers
#[derive(Clone)]
pub struct MessageDispatcher {
    /// Broadcast sender channel for plugin messages.
    tx: broadcast::Sender<PluginMessage>,
}

impl MessageDispatcher {
    /// Create a new message dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 100)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    /// Create a new message dispatcher with default buffer size
    pub fn default_with_buffer() -> Self {
        Self::new(100)
    }

    /// Subscribe to messages
    pub fn subscribe(&self) -> broadcast::Receiver<PluginMessage> {
        self.tx.subscribe()
    }

    /// Publish a message to all subscribers
    pub fn publish(
        &self,
        message: PluginMessage,
    ) -> Result<usize, broadcast::error::SendError<PluginMessage>> {
        self.tx.send(message)
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for MessageDispatcher {
    fn default() -> Self {
        Self::default_with_buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_message_channel() {
        let msg = PluginMessage::reading("750");
        assert_eq!(msg.plugin, PLUGIN_CHANNEL);
        assert_eq!(msg.payload, "750");
    }

    #[test]
    fn test_publish_and_receive() {
        let dispatcher = MessageDispatcher::default();
        let mut rx = dispatcher.subscribe();
        assert_eq!(dispatcher.subscriber_count(), 1);

        dispatcher
            .publish(PluginMessage::reading("123"))
            .expect("Should publish");

        let received = rx.try_recv().expect("Should receive");
        assert_eq!(received, PluginMessage::reading("123"));
    }

    #[test]
    fn test_publish_without_subscribers() {
        let dispatcher = MessageDispatcher::new(8);
        assert!(dispatcher.publish(PluginMessage::reading("1")).is_err());
    }
}
