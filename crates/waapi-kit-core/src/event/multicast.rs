use std::sync::{
    Arc, PoisonError, RwLock,
    atomic::{AtomicU64, Ordering},
};

/// Callback connected to an [`Event`].
pub type Listener<A> = Arc<dyn Fn(&A) + Send + Sync>;

///
/// ListenerId
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ListenerId(u64);

///
/// Event
///
/// Local multicast event. Listeners run synchronously, in the order they
/// were connected, on the thread that calls `emit`.
///

pub struct Event<A> {
    listeners: RwLock<Vec<(ListenerId, Listener<A>)>>,
    next_id: AtomicU64,
}

impl<A> Event<A> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn connect(&self, listener: impl Fn(&A) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));

        id
    }

    /// Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ListenerId) -> bool {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);

        listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn has_listeners(&self) -> bool {
        self.listener_count() > 0
    }

    /// emit
    /// Invoke every listener with `args`; returns how many ran.
    /// The list is snapshotted first so listeners may connect or disconnect.
    pub fn emit(&self, args: &A) -> usize {
        let snapshot: Vec<Listener<A>> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in &snapshot {
            listener(args);
        }

        snapshot.len()
    }
}

impl<A> Default for Event<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
