//=========================================================================
// Broadcast
//=========================================================================
//
// Minimal multi-subscriber notification primitive.
//
// Architecture:
//   add()/add_unique() → handlers: Vec<(HandlerId, Rc<dyn Fn(&T)>)>
//                              ↓
//   raise(&value) → snapshot → call each still-subscribed handler
//
// Handlers are invoked in subscription order. The handler list is
// snapshotted before iteration, so a handler may remove itself (or any
// other handler) while the broadcast is being raised.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

//=== HandlerId ===========================================================

/// Identifies one subscription on a [`Broadcast`].
///
/// Returned by [`Broadcast::add`] and used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Shared handler type accepted by [`Broadcast::add_unique`].
pub type Handler<T> = Rc<dyn Fn(&T)>;

//=== Broadcast ===========================================================

/// Multi-subscriber event with subscription-ordered delivery.
///
/// All methods take `&self`, so a broadcast can be shared with the
/// handlers subscribed to it.
pub struct Broadcast<T = ()> {
    handlers: RefCell<Vec<(HandlerId, Handler<T>)>>,
    next_id: Cell<u64>,
}

impl<T> Broadcast<T> {
    /// Creates a broadcast with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    //--- Subscription -----------------------------------------------------

    /// Subscribes a handler and returns its id.
    pub fn add<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&T) + 'static,
    {
        self.insert(Rc::new(handler))
    }

    /// Subscribes a shared handler unless that exact handler is already
    /// subscribed, in which case the existing id is returned.
    pub fn add_unique(&self, handler: Handler<T>) -> HandlerId {
        let existing = self
            .handlers
            .borrow()
            .iter()
            .find(|(_, h)| same_handler(h, &handler))
            .map(|(id, _)| *id);

        match existing {
            Some(id) => id,
            None => self.insert(handler),
        }
    }

    /// Unsubscribes a handler. Unknown ids are ignored.
    ///
    /// Returns `true` if a handler was removed.
    pub fn remove(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        match handlers.iter().position(|(h, _)| *h == id) {
            Some(pos) => {
                handlers.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Unsubscribes a shared handler by identity. Absent handlers are ignored.
    pub fn remove_handler(&self, handler: &Handler<T>) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        match handlers.iter().position(|(_, h)| same_handler(h, handler)) {
            Some(pos) => {
                handlers.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes every subscriber.
    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }

    //--- Queries ----------------------------------------------------------

    /// Returns true if the handler id is currently subscribed.
    pub fn contains(&self, id: HandlerId) -> bool {
        self.handlers.borrow().iter().any(|(h, _)| *h == id)
    }

    /// Returns the number of subscribers.
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Returns true if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    //--- Raising ----------------------------------------------------------

    /// Invokes every subscriber with `value`, in subscription order.
    ///
    /// Handlers added during the raise are not called until the next raise.
    /// Handlers removed during the raise are skipped if they have not been
    /// called yet.
    pub fn raise(&self, value: &T) {
        let snapshot: Vec<(HandlerId, Handler<T>)> = self.handlers.borrow().clone();

        for (id, handler) in snapshot {
            if self.contains(id) {
                handler(value);
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn insert(&self, handler: Handler<T>) -> HandlerId {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, handler));
        id
    }
}

impl Broadcast<()> {
    /// Raises a payload-less broadcast.
    pub fn notify(&self) {
        self.raise(&());
    }
}

impl<T> Default for Broadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("subscribers", &self.len())
            .finish()
    }
}

// Compares data pointers only; vtable pointers may differ across codegen units.
fn same_handler<T>(a: &Handler<T>, b: &Handler<T>) -> bool {
    std::ptr::eq(
        Rc::as_ptr(a) as *const (),
        Rc::as_ptr(b) as *const (),
    )
}

//=========================================================================
// Tests
//=========================================================================
