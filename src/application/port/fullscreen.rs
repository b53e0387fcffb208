// SPDX-License-Identifier: MPL-2.0
//! Fullscreen host port definition.
//!
//! Fullscreen is requested for the player container, not the bare media
//! element, so the control overlay stays visible. The host answers with a
//! [`MediaEvent::FullscreenChange`](super::MediaEvent::FullscreenChange) on
//! the subscribed sink, or with nothing if it denies the request.

use super::media::{EventSink, SubscriptionId};

/// Port for the host's fullscreen API.
pub trait FullscreenHost {
    /// Whether the player container is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Asks the host to make the container fullscreen.
    fn request_fullscreen(&mut self);

    /// Asks the host to leave fullscreen.
    fn exit_fullscreen(&mut self);

    /// Registers a sink for fullscreen change notifications.
    fn subscribe(&mut self, sink: EventSink) -> SubscriptionId;

    /// Releases a sink. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::MediaEvent;
    use tokio::sync::mpsc::unbounded_channel;

    fn _assert_object_safe(_: &dyn FullscreenHost) {}

    struct MockHost {
        fullscreen: bool,
        deny: bool,
        sink: Option<EventSink>,
    }

    impl FullscreenHost for MockHost {
        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }

        fn request_fullscreen(&mut self) {
            if self.deny {
                return;
            }
            self.fullscreen = true;
            if let Some(sink) = &self.sink {
                let _ = sink.send(MediaEvent::FullscreenChange {
                    is_fullscreen: true,
                });
            }
        }

        fn exit_fullscreen(&mut self) {
            self.fullscreen = false;
            if let Some(sink) = &self.sink {
                let _ = sink.send(MediaEvent::FullscreenChange {
                    is_fullscreen: false,
                });
            }
        }

        fn subscribe(&mut self, sink: EventSink) -> SubscriptionId {
            self.sink = Some(sink);
            SubscriptionId::new(1)
        }

        fn unsubscribe(&mut self, _id: SubscriptionId) {
            self.sink = None;
        }
    }

    #[test]
    fn denied_request_raises_no_event() {
        let mut host = MockHost {
            fullscreen: false,
            deny: true,
            sink: None,
        };
        let (tx, mut rx) = unbounded_channel();
        host.subscribe(tx);

        host.request_fullscreen();
        assert!(!host.is_fullscreen());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn granted_request_notifies_sink() {
        let mut host = MockHost {
            fullscreen: false,
            deny: false,
            sink: None,
        };
        let (tx, mut rx) = unbounded_channel();
        host.subscribe(tx);

        host.request_fullscreen();
        assert_eq!(
            rx.try_recv(),
            Ok(MediaEvent::FullscreenChange {
                is_fullscreen: true
            })
        );
    }
}
