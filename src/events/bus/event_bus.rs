// events/bus/event_bus.rs
//
// Core event bus implementation.
//
// The bus is the diagnostic channel of the crate: capability failures are
// swallowed by the services and published here instead of propagating.
//
// - Synchronous: handlers execute immediately in subscription order
// - Observable: every emission is logged and kept in a bounded event log

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock};

use crate::events::types::DomainEvent;

/// Type-erased event handler function
type EventHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// The Event Bus
///
/// Services emit events without knowing who listens. Handlers are
/// executed in the order they are subscribed; a panicking handler is
/// caught and logged so the remaining handlers still run.
pub struct EventBus {
    /// Map from event TypeId to list of handlers
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,

    /// Most recent emissions, oldest first
    event_log: Arc<RwLock<VecDeque<EventLogEntry>>>,

    log_capacity: usize,
}

/// A logged event for debugging and tests
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

impl EventBus {
    /// Entries kept by `new()`
    pub const DEFAULT_LOG_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        Self::with_log_capacity(Self::DEFAULT_LOG_CAPACITY)
    }

    /// Bus whose log keeps only the last `capacity` emissions
    pub fn with_log_capacity(capacity: usize) -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            event_log: Arc::new(RwLock::new(VecDeque::with_capacity(capacity.min(Self::DEFAULT_LOG_CAPACITY)))),
            log_capacity: capacity,
        }
    }

    pub fn log_capacity(&self) -> usize {
        self.log_capacity
    }

    /// Subscribe to a specific event type
    ///
    /// ```ignore
    /// bus.subscribe::<PhotoCaptured, _>(|event| {
    ///     log::info!("captured {}", event.image_uri);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<E>();

        let wrapped: EventHandler = Box::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            } else {
                log::error!(
                    "Failed to downcast event in handler for {}",
                    std::any::type_name::<E>()
                );
            }
        });

        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        handlers.entry(type_id).or_default().push(wrapped);
    }

    /// Emit an event: log it, record it, then run its handlers in order
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let type_id = TypeId::of::<E>();

        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let event_handlers = handlers.get(&type_id);

        let log_entry = EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count: event_handlers.map(|h| h.len()).unwrap_or(0),
        };

        log::debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            log_entry.event_type,
            log_entry.event_id,
            log_entry.handler_count
        );

        {
            let mut event_log = self.event_log.write().unwrap_or_else(PoisonError::into_inner);
            if self.log_capacity > 0 {
                while event_log.len() >= self.log_capacity {
                    event_log.pop_front();
                }
                event_log.push_back(log_entry);
            }
        }

        if let Some(handlers) = event_handlers {
            for (idx, handler) in handlers.iter().enumerate() {
                let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    handler(&event as &dyn Any);
                }));

                if let Err(e) = result {
                    log::error!(
                        "Handler {} for {} panicked: {:?}",
                        idx,
                        event.event_type(),
                        e
                    );
                }
            }
        }
    }

    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.event_log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Number of logged emissions of one event type
    pub fn count_of(&self, event_type: &str) -> usize {
        self.event_log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|entry| entry.event_type == event_type)
            .count()
    }

    pub fn clear_event_log(&self) {
        self.event_log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        let type_id = TypeId::of::<E>();
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        handlers.get(&type_id).map(|h| h.len()).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Clones share handlers and log
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            event_log: Arc::clone(&self.event_log),
            log_capacity: self.log_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Capability, PermissionState};
    use crate::events::types::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use uuid::Uuid;

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<PhotoCaptured, _>(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(PhotoCaptured::new(Uuid::new_v4(), "file:///tmp/a.jpg".to_string()));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_multiple_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(RwLock::new(Vec::new()));

        for n in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<PermissionRequested, _>(move |_| {
                seq.write().unwrap().push(n);
            });
        }

        bus.emit(PermissionRequested::new(Capability::Camera));

        assert_eq!(*sequence.read().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_event_log_records_emissions() {
        let bus = EventBus::new();

        bus.emit(PermissionRequested::new(Capability::Location));
        bus.emit(PermissionResolved::new(Capability::Location, PermissionState::Denied));

        let log = bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].event_type, "PermissionRequested");
        assert_eq!(log[1].event_type, "PermissionResolved");
        assert_eq!(bus.count_of("PermissionRequested"), 1);

        bus.clear_event_log();
        assert!(bus.get_event_log().is_empty());
    }

    #[test]
    fn test_event_log_keeps_only_latest_entries() {
        let bus = EventBus::with_log_capacity(3);

        bus.emit(PermissionRequested::new(Capability::Camera));
        for _ in 0..10 {
            bus.emit(CaptureFailed::new("device busy".to_string()));
        }
        bus.emit(PermissionRequested::new(Capability::Location));

        let log = bus.get_event_log();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].event_type, "CaptureFailed");
        assert_eq!(log[2].event_type, "PermissionRequested");
        assert_eq!(bus.count_of("PermissionRequested"), 1);
    }

    #[test]
    fn test_default_log_is_bounded() {
        let bus = EventBus::new();
        for _ in 0..(EventBus::DEFAULT_LOG_CAPACITY + 500) {
            bus.emit(PhotoCaptured::new(Uuid::new_v4(), "file:///tmp/a.jpg".to_string()));
        }
        assert_eq!(bus.get_event_log().len(), EventBus::DEFAULT_LOG_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_still_runs_handlers() {
        let bus = EventBus::with_log_capacity(0);
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<CaptureFailed, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(CaptureFailed::new("device busy".to_string()));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(bus.get_event_log().is_empty());
    }

    #[test]
    fn test_subscriber_count() {
        let bus = EventBus::new();

        assert_eq!(bus.subscriber_count::<PhotoCaptured>(), 0);

        bus.subscribe::<PhotoCaptured, _>(|_| {});
        bus.subscribe::<PhotoCaptured, _>(|_| {});
        assert_eq!(bus.subscriber_count::<PhotoCaptured>(), 2);

        assert_eq!(bus.subscriber_count::<CaptureFailed>(), 0);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<CaptureFailed, _>(|_| {
            panic!("Intentional panic");
        });

        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<CaptureFailed, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(CaptureFailed::new("device busy".to_string()));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
