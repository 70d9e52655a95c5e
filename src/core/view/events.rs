//=========================================================================
// View Events
//=========================================================================
//
// Outward notifications raised on every state change of a view.
//
// Order on a change: `state_changed(new)`, then the per-state event.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::ViewState;
use crate::core::broadcast::{Broadcast, Handler, HandlerId};

//=== ViewEvents ==========================================================

#[derive(Debug, Default)]
pub struct ViewEvents {
    pub opened: Broadcast,
    pub closed: Broadcast,
    pub opening: Broadcast,
    pub closing: Broadcast,
    state_changed: Broadcast<ViewState>,
}

impl ViewEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to state changes. Subscribing the same handler twice
    /// keeps a single subscription.
    pub fn on_state_changed(&self, handler: Handler<ViewState>) -> HandlerId {
        self.state_changed.add_unique(handler)
    }

    pub fn remove_state_changed(&self, id: HandlerId) -> bool {
        self.state_changed.remove(id)
    }

    /// Detaches every subscriber from every event.
    pub fn clear(&self) {
        self.opened.clear();
        self.closed.clear();
        self.opening.clear();
        self.closing.clear();
        self.state_changed.clear();
    }

    pub(crate) fn raise(&self, state: ViewState) {
        self.state_changed.raise(&state);
        match state {
            ViewState::Open => self.opened.notify(),
            ViewState::Opening => self.opening.notify(),
            ViewState::Closed => self.closed.notify(),
            ViewState::Closing => self.closing.notify(),
            ViewState::None => {}
        }
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn raise_fires_state_changed_then_specific_event() {
        let events = ViewEvents::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = Rc::clone(&log);
        events.on_state_changed(Rc::new(move |s: &ViewState| {
            l.borrow_mut().push(format!("{:?}", s))
        }));
        let l = Rc::clone(&log);
        events.opened.add(move |_| l.borrow_mut().push("opened".to_string()));

        events.raise(ViewState::Open);

        assert_eq!(*log.borrow(), vec!["Open".to_string(), "opened".to_string()]);
    }

    #[test]
    fn state_changed_is_unique_per_handler() {
        let events = ViewEvents::new();
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        let handler: Handler<ViewState> = Rc::new(move |_| *c.borrow_mut() += 1);

        events.on_state_changed(Rc::clone(&handler));
        events.on_state_changed(handler);
        events.raise(ViewState::Closing);

        assert_eq!(*count.borrow(), 1);
    }
}
