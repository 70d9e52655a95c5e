//=========================================================================
// View System
//=========================================================================
//
// Owns every view, the view (focus) stack and the back-press consumer
// stack, and runs the view lifecycle state machine.
//
// Architecture:
//   ViewSystem
//     ├─ views: HashMap<K, ViewEntry>      lifecycle data + Box<dyn View>
//     ├─ view_stack: ViewStack<K>          top = focused view
//     ├─ consumers: ConsumerStack          back-press dispatch + lock gate
//     ├─ awaiters: Vec<Awaiter>            suspended continuations
//     └─ completion channel                sequence → scheduler signals
//
// Frame:
//   frame(dt, actions) → back_pressed()* → update(dt)
//   update(dt) → tick sequences → resume awaiters → apply commands
//              → focus requests → deferred unlocks
//
// Everything runs on one thread. Suspension points are awaiters, resumed
// only from `update()`, so a synchronous operation is never interleaved
// with another view's continuation.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::error::ViewError;
use crate::core::input::Action;
use crate::core::selection::{ControlId, SelectionAuthority, SelectionSignals, SelectionState};
use crate::core::stack::{BackPressedConsumer, ConsumerId, ConsumerStack, ViewStack};
use crate::core::view::{View, ViewCommand, ViewCommands, ViewConfig, ViewEvents, ViewKey, ViewState};

//=== Module Declarations =================================================

mod builder;
mod dispatch;
mod focus;
mod lifecycle;
mod scheduler;


//=== Public API ==========================================================

pub use builder::ViewSystemBuilder;
pub use scheduler::Ticket;

use focus::{FocusRequest, FocusSubscriptions};
use scheduler::{Awaiter, Running};

//=== Intent ==============================================================

/// Opposite-direction request recorded while a transition is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Open,
    Close,
}

//=== ViewEntry ===========================================================

struct ViewEntry<K: ViewKey> {
    view: Box<dyn View<K>>,
    config: ViewConfig,
    state: ViewState,
    is_visible: bool,
    is_or_will_open: bool,
    pending: Option<Intent>,
    cycle: u64,
    last_selected: Option<ControlId>,
    show: Option<Running>,
    hide: Option<Running>,
    events: ViewEvents,
    focus: Option<FocusSubscriptions>,
}

impl<K: ViewKey> ViewEntry<K> {
    fn new(view: Box<dyn View<K>>, config: ViewConfig) -> Self {
        let is_visible = config.start_visible;
        Self {
            view,
            config,
            state: ViewState::None,
            is_visible,
            is_or_will_open: false,
            pending: None,
            cycle: 0,
            last_selected: None,
            show: None,
            hide: None,
            events: ViewEvents::new(),
            focus: None,
        }
    }
}

//=== ViewSystem ==========================================================

/// Coordinates view lifecycles, focus handoff and back-press dispatch.
///
/// Create via [`ViewSystemBuilder`]. One view system is the process-wide
/// owner of both stacks for a UI root.
///
/// # Example
///
/// ```rust
/// # use aetheric_views::prelude::*;
/// # use std::time::Duration;
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Screen { Hud, Pause }
/// impl ViewKey for Screen {}
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum UiAction { Back }
/// impl Action for UiAction {}
///
/// let mut views = ViewSystemBuilder::new()
///     .with_back_action(UiAction::Back)
///     .with_selection(SelectionState::new())
///     .build()
///     .expect("collaborators configured");
///
/// views.register(Screen::Hud, Hud::new(), ViewConfig::new().scene_object(true)).unwrap();
/// views.register(Screen::Pause, Hud::new(), ViewConfig::new().hide_underlying_ui(true)).unwrap();
/// views.start();
///
/// views.open(Screen::Pause);
/// for _ in 0..60 {
///     views.frame(Duration::from_millis(16), &[]);
/// }
/// assert_eq!(views.state(Screen::Pause), Some(ViewState::Open));
/// assert_eq!(views.focused(), Some(Screen::Pause));
/// ```
pub struct ViewSystem<K: ViewKey, A: Action, S: SelectionAuthority = SelectionState> {
    views: HashMap<K, ViewEntry<K>>,
    order: Vec<K>,
    view_stack: ViewStack<K>,
    consumers: ConsumerStack<ConsumerId<K>>,
    external: HashMap<u32, Box<dyn BackPressedConsumer<K>>>,
    selection: S,
    signals: SelectionSignals,
    back_action: A,
    commands: ViewCommands<K>,
    command_tx: Sender<ViewCommand<K>>,
    command_rx: Receiver<ViewCommand<K>>,
    awaiters: Vec<Awaiter<K>>,
    completion_tx: Sender<Ticket>,
    completion_rx: Receiver<Ticket>,
    focus_tx: Sender<FocusRequest<K>>,
    focus_rx: Receiver<FocusRequest<K>>,
    next_ticket: u64,
    started: bool,
}

impl<K: ViewKey, A: Action, S: SelectionAuthority> ViewSystem<K, A, S> {
    //--- Construction -----------------------------------------------------

    fn new(back_action: A, selection: S) -> Self {
        let (command_tx, command_rx) = crossbeam_channel::unbounded();
        let (completion_tx, completion_rx) = crossbeam_channel::unbounded();
        let (focus_tx, focus_rx) = crossbeam_channel::unbounded();

        Self {
            views: HashMap::new(),
            order: Vec::new(),
            view_stack: ViewStack::new(),
            consumers: ConsumerStack::new(),
            external: HashMap::new(),
            selection,
            signals: SelectionSignals::new(),
            back_action,
            commands: ViewCommands::new(),
            command_tx,
            command_rx,
            awaiters: Vec::new(),
            completion_tx,
            completion_rx,
            focus_tx,
            focus_rx,
            next_ticket: 0,
            started: false,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a view under `key`.
    ///
    /// The view starts in [`ViewState::None`] and reports the configured
    /// start visibility. Fails if the key is taken or the configuration is
    /// inconsistent.
    pub fn register<V>(&mut self, key: K, view: V, config: ViewConfig) -> Result<(), ViewError<K>>
    where
        V: View<K> + 'static,
    {
        if self.views.contains_key(&key) {
            warn!("View {:?} is already registered", key);
            return Err(ViewError::AlreadyRegistered(key));
        }

        if let Some(first) = config.first_selected {
            if !config.controls.contains(&first) {
                warn!("View {:?} first selection {:?} is not one of its controls", key, first);
                return Err(ViewError::UnknownFirstSelection(key, first));
            }
        }

        let mut view: Box<dyn View<K>> = Box::new(view);
        view.on_awake(config.start_visible);

        debug!("Registered view {:?}", key);
        self.views.insert(key, ViewEntry::new(view, config));
        self.order.push(key);
        Ok(())
    }

    /// Returns true if a view is registered under `key`.
    pub fn is_registered(&self, key: K) -> bool {
        self.views.contains_key(&key)
    }

    //--- Host Lifecycle ---------------------------------------------------

    /// Brings scene-object views up as already open, in registration order.
    ///
    /// Call once after registering the initial views and before the first
    /// lifecycle operation.
    pub fn start(&mut self) {
        if self.started {
            warn!("View system already started");
            return;
        }
        self.started = true;

        let scene_objects: Vec<K> = self
            .order
            .iter()
            .copied()
            .filter(|key| {
                self.views
                    .get(key)
                    .is_some_and(|e| e.config.scene_object && e.state == ViewState::None)
            })
            .collect();

        info!("Starting view system ({} scene views)", scene_objects.len());

        for key in scene_objects {
            self.set_state(key, ViewState::Open);

            let Some(entry) = self.views.get_mut(&key) else {
                continue;
            };
            entry.is_or_will_open = true;
            let standalone = entry.config.standalone;
            let start_visible = entry.config.start_visible;

            if !standalone {
                self.add_to_stack(key);
                self.consumers.push_unique(ConsumerId::View(key));
            }
            if !start_visible {
                self.show(key);
            }
        }
    }

    /// Tears a view down: stops its sequences, detaches every subscription
    /// and removes it from both stacks.
    ///
    /// If it held focus, the next view on the stack gains focus and is
    /// shown again when the destroyed view had hidden it.
    pub fn destroy(&mut self, key: K) -> bool {
        let Some(hid_underlying) = self.views.get(&key).map(|e| e.config.hide_underlying_ui) else {
            debug!("View {:?} not registered, skipping destroy", key);
            return false;
        };

        self.kill_running(key);
        self.unsubscribe_focus(key);

        let had_focus = self.view_stack.try_peek() == Some(key);
        self.view_stack.remove(key);
        self.consumers.remove(ConsumerId::View(key));

        if let Some(entry) = self.views.remove(&key) {
            entry.events.clear();
        }
        self.order.retain(|&k| k != key);
        debug!("Destroyed view {:?}", key);

        if had_focus {
            if let Some(next) = self.view_stack.try_peek() {
                self.gain_focus(next);
                if hid_underlying {
                    self.reveal(next);
                }
            }
        }
        true
    }

    /// Destroys every view and resets the back-press gate.
    pub fn shutdown(&mut self) {
        info!("Shutting down view system ({} views)", self.views.len());

        for key in self.order.clone() {
            self.destroy(key);
        }

        for id in self.external.keys().copied().collect::<Vec<_>>() {
            self.consumers.remove(ConsumerId::External(id));
        }
        self.external.clear();
        self.awaiters.clear();
        self.consumers.reset_locks();
        self.commands.take();

        while self.completion_rx.try_recv().is_ok() {}
        while self.focus_rx.try_recv().is_ok() {}
        while self.command_rx.try_recv().is_ok() {}

        self.started = false;
    }

    //--- External Consumers -----------------------------------------------

    /// Registers a non-view back-press consumer on top of the consumer stack.
    pub fn add_consumer<C>(&mut self, id: u32, consumer: C)
    where
        C: BackPressedConsumer<K> + 'static,
    {
        if self.external.insert(id, Box::new(consumer)).is_some() {
            warn!("Back press consumer {} was already registered and has been replaced", id);
        }
        self.consumers.push_unique(ConsumerId::External(id));
    }

    /// Removes a non-view back-press consumer.
    pub fn remove_consumer(&mut self, id: u32) -> bool {
        self.consumers.remove(ConsumerId::External(id));
        self.external.remove(&id).is_some()
    }

    //--- Back-Press Gate --------------------------------------------------

    /// Suppresses back-press dispatch until a matching unlock is applied.
    pub fn lock_back_press(&mut self) {
        self.consumers.lock();
    }

    /// Releases one lock at the end of the current frame.
    pub fn unlock_back_press(&mut self) {
        self.consumers.unlock();
    }

    //--- Selectables ------------------------------------------------------

    /// Makes every control of the view interactable.
    pub fn enable_selectables(&mut self, key: K) {
        self.set_selectables_interactable(key, true);
    }

    /// Makes every control of the view non-interactable.
    pub fn disable_selectables(&mut self, key: K) {
        self.set_selectables_interactable(key, false);
    }

    fn set_selectables_interactable(&mut self, key: K, interactable: bool) {
        let Some(entry) = self.views.get(&key) else {
            warn!("Attempted to change selectables of unregistered view {:?}", key);
            return;
        };

        for &control in &entry.config.controls {
            if !self.selection.set_interactable(control, interactable) {
                warn!("Cached control {:?} of view {:?} no longer exists", control, key);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the lifecycle state, or `None` for unknown keys.
    pub fn state(&self, key: K) -> Option<ViewState> {
        self.views.get(&key).map(|e| e.state)
    }

    /// Returns true once a show has completed and no hide has since.
    pub fn is_visible(&self, key: K) -> bool {
        self.views.get(&key).is_some_and(|e| e.is_visible)
    }

    /// Returns the intent of the most recent open/close call.
    pub fn is_or_will_open(&self, key: K) -> bool {
        self.views.get(&key).is_some_and(|e| e.is_or_will_open)
    }

    pub fn is_or_will_close(&self, key: K) -> bool {
        self.views.get(&key).is_some_and(|e| !e.is_or_will_open)
    }

    /// Returns true if the view has no running sequence and no suspended
    /// continuation.
    pub fn is_settled(&self, key: K) -> bool {
        self.views
            .get(&key)
            .is_some_and(|e| e.show.is_none() && e.hide.is_none())
            && !self.awaiters.iter().any(|a| a.owner == key)
    }

    /// Returns the focused view (top of the view stack).
    pub fn focused(&self) -> Option<K> {
        self.view_stack.try_peek()
    }

    pub fn view_stack(&self) -> &ViewStack<K> {
        &self.view_stack
    }

    pub fn consumers(&self) -> &ConsumerStack<ConsumerId<K>> {
        &self.consumers
    }

    /// Outward lifecycle events of a view.
    pub fn events(&self, key: K) -> Option<&ViewEvents> {
        self.views.get(&key).map(|e| &e.events)
    }

    pub fn config(&self, key: K) -> Option<&ViewConfig> {
        self.views.get(&key).map(|e| &e.config)
    }

    /// The control the view will try to restore on its next focus gain.
    pub fn last_selected(&self, key: K) -> Option<ControlId> {
        self.views.get(&key).and_then(|e| e.last_selected)
    }

    pub fn view(&self, key: K) -> Option<&dyn View<K>> {
        self.views.get(&key).map(|e| e.view.as_ref())
    }

    pub fn view_mut(&mut self, key: K) -> Option<&mut (dyn View<K> + 'static)> {
        self.views.get_mut(&key).map(|e| e.view.as_mut())
    }

    /// Signals the host raises on navigation and scheme changes.
    pub fn signals(&self) -> &SelectionSignals {
        &self.signals
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut S {
        &mut self.selection
    }

    pub fn back_action(&self) -> A {
        self.back_action
    }

    /// Sender for lifecycle commands issued from event handlers. Commands
    /// are applied at the next update or back-press dispatch.
    pub fn command_sender(&self) -> Sender<ViewCommand<K>> {
        self.command_tx.clone()
    }

    //--- Internal Helpers -------------------------------------------------

    fn entry_or_warn(&mut self, key: K) -> Option<&mut ViewEntry<K>> {
        let entry = self.views.get_mut(&key);
        if entry.is_none() {
            warn!("Attempted to use unregistered view {:?}", key);
        }
        entry
    }
}
