use std::sync::{Arc, Mutex};

use log::debug;

type BackHandler = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Default)]
struct DispatcherInner {
    next_id: u64,
    handlers: Vec<(u64, BackHandler)>,
}

/// Routes the platform back action through explicitly scoped handlers.
/// Handlers run newest-first; the first one returning true suppresses the
/// default navigation.
#[derive(Clone, Default)]
pub struct BackDispatcher {
    inner: Arc<Mutex<DispatcherInner>>,
}

impl BackDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for as long as the returned subscription lives.
    pub fn subscribe(&self, handler: impl Fn() -> bool + Send + Sync + 'static) -> BackSubscription {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, Arc::new(handler)));
        BackSubscription {
            dispatcher: self.inner.clone(),
            id,
        }
    }

    /// Fires the back action. Returns whether any handler claimed it.
    pub fn dispatch(&self) -> bool {
        // Snapshot first; handlers run outside the registry lock so they
        // may subscribe or deregister without deadlocking.
        let handlers: Vec<BackHandler> = {
            let inner = self.inner.lock().unwrap();
            inner
                .handlers
                .iter()
                .rev()
                .map(|(_, handler)| handler.clone())
                .collect()
        };

        handlers.into_iter().any(|handler| handler())
    }
}

/// Scoped back-handler registration; dropping it deregisters.
pub struct BackSubscription {
    dispatcher: Arc<Mutex<DispatcherInner>>,
    id: u64,
}

impl Drop for BackSubscription {
    fn drop(&mut self) {
        let mut inner = match self.dispatcher.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.handlers.retain(|(id, _)| *id != self.id);
        debug!("Back handler {} deregistered", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn unhandled_back_falls_through() {
        let dispatcher = BackDispatcher::new();
        assert!(!dispatcher.dispatch());
    }

    #[test]
    fn subscribed_handler_claims_the_back_action() {
        let dispatcher = BackDispatcher::new();
        let hits = Arc::new(AtomicU32::new(0));

        let hits_clone = hits.clone();
        let subscription = dispatcher.subscribe(move || {
            hits_clone.fetch_add(1, Ordering::SeqCst);
            true
        });

        assert!(dispatcher.dispatch());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        drop(subscription);
    }

    #[test]
    fn dropping_the_subscription_deregisters() {
        let dispatcher = BackDispatcher::new();
        let subscription = dispatcher.subscribe(|| true);
        drop(subscription);
        assert!(!dispatcher.dispatch());
    }

    #[test]
    fn newest_handler_runs_first() {
        let dispatcher = BackDispatcher::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = order.clone();
        let _a = dispatcher.subscribe(move || {
            first.lock().unwrap().push("old");
            false
        });
        let second = order.clone();
        let _b = dispatcher.subscribe(move || {
            second.lock().unwrap().push("new");
            true
        });

        assert!(dispatcher.dispatch());
        assert_eq!(*order.lock().unwrap(), vec!["new"]);
    }
}
