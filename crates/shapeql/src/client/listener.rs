use crate::client::RequestResult;
use indexmap::IndexMap;
use std::sync::Arc;

/// Receives the result of every request a client dispatches.
///
/// Called on whichever thread delivered the transport completion, with no
/// client lock held.
pub trait ResultListener: Send + Sync {
    fn on_result(&self, result: &RequestResult);
}
impl<F> ResultListener for F
where
    F: Fn(&RequestResult) + Send + Sync,
{
    fn on_result(&self, result: &RequestResult) {
        self(result)
    }
}

/// Handle returned by
/// [`GraphQLClient::register_listener()`](crate::client::GraphQLClient::register_listener).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ListenerId(u64);

#[derive(Default)]
pub(super) struct ListenerRegistry {
    listeners: IndexMap<ListenerId, Arc<dyn ResultListener>>,
    next_id: u64,
}
impl ListenerRegistry {
    pub(super) fn register(&mut self, listener: Arc<dyn ResultListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    pub(super) fn unregister(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    pub(super) fn len(&self) -> usize {
        self.listeners.len()
    }

    /// The listeners registered right now, in registration order.
    pub(super) fn snapshot(&self) -> Vec<Arc<dyn ResultListener>> {
        self.listeners.values().cloned().collect()
    }
}
