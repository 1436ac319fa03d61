//! Client construction points
//!
//! The orchestrator never names a concrete client type. It asks a
//! [`ClientFactory`] for one, which is what lets tests swap the client (or
//! single operations of it) without touching the orchestrator.

use crate::client::{ApiClient, DemoApiClient};
use std::cell::{Cell, RefCell};
use std::fmt;

/// Builds a fresh client for each orchestrated request
pub trait ClientFactory {
    type Client: ApiClient;

    /// Construct a new client instance
    fn create(&self) -> Self::Client;
}

/// Production factory building [`DemoApiClient`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoClientFactory;

impl ClientFactory for DemoClientFactory {
    type Client = DemoApiClient;

    fn create(&self) -> DemoApiClient {
        DemoApiClient::new()
    }
}

impl<F, C> ClientFactory for F
where
    F: Fn() -> C,
    C: ApiClient,
{
    type Client = C;

    fn create(&self) -> C {
        self()
    }
}

type BoxedFactory = Box<dyn Fn() -> Box<dyn ApiClient>>;

fn boxed<F>(factory: F) -> BoxedFactory
where
    F: ClientFactory + 'static,
    F::Client: 'static,
{
    Box::new(move || Box::new(factory.create()) as Box<dyn ApiClient>)
}

/// A named construction point that can be rebound for a limited scope
///
/// [`patch`](Self::patch) swaps in another factory and returns a guard. The
/// most recent live patch is the one in effect; dropping a guard removes only
/// its own patch, whatever order guards are dropped in.
pub struct ClientSlot {
    base: BoxedFactory,
    patches: RefCell<Vec<(u64, BoxedFactory)>>,
    next_id: Cell<u64>,
}

impl ClientSlot {
    pub fn new<F>(factory: F) -> Self
    where
        F: ClientFactory + 'static,
        F::Client: 'static,
    {
        Self {
            base: boxed(factory),
            patches: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Rebind the slot until the returned guard is dropped
    #[must_use = "the patch is undone as soon as the guard is dropped"]
    pub fn patch<F>(&self, factory: F) -> PatchGuard<'_>
    where
        F: ClientFactory + 'static,
        F::Client: 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.patches.borrow_mut().push((id, boxed(factory)));
        PatchGuard { slot: self, id }
    }

    /// Whether any patch is currently active
    pub fn is_patched(&self) -> bool {
        !self.patches.borrow().is_empty()
    }

    fn unpatch(&self, id: u64) {
        self.patches.borrow_mut().retain(|(patch_id, _)| *patch_id != id);
    }
}

impl Default for ClientSlot {
    fn default() -> Self {
        Self::new(DemoClientFactory)
    }
}

impl fmt::Debug for ClientSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSlot")
            .field("patched", &self.is_patched())
            .finish_non_exhaustive()
    }
}

impl ClientFactory for ClientSlot {
    type Client = Box<dyn ApiClient>;

    fn create(&self) -> Box<dyn ApiClient> {
        match self.patches.borrow().last() {
            Some((_, factory)) => factory(),
            None => (self.base)(),
        }
    }
}

/// Removes one [`ClientSlot`] patch on drop
pub struct PatchGuard<'a> {
    slot: &'a ClientSlot,
    id: u64,
}

impl Drop for PatchGuard<'_> {
    fn drop(&mut self) {
        self.slot.unpatch(self.id);
    }
}

impl fmt::Debug for PatchGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatchGuard")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
