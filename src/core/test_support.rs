//=========================================================================
// Test Support
//=========================================================================
//
// Scriptable views and hand-driven sequences for unit tests.
//
//   Probe            shared log of hook calls + sequence handles
//   ManualSequence   runs until its `SequenceHandle` finishes it
//   ScriptedView     records every hook into a `Probe`
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use crate::core::sequence::{Completion, CompletionCallback, InstantSequence, Sequence, SequenceStatus};
use crate::core::view::{View, ViewCommand, ViewCommands, ViewKey};

//=== ManualSequence ======================================================

/// Sequence that only ends when the test says so.
pub(crate) struct ManualSequence {
    completion: Rc<RefCell<Completion>>,
}

impl Sequence for ManualSequence {
    fn is_alive(&self) -> bool {
        self.completion.borrow().is_running()
    }

    fn stop(&mut self) {
        self.completion.borrow_mut().stop();
    }

    fn complete(&mut self) {
        self.completion.borrow_mut().finish();
    }

    fn on_complete(&mut self, callback: CompletionCallback) {
        self.completion.borrow_mut().register(callback);
    }
}

/// Test-side handle of a [`ManualSequence`].
#[derive(Clone)]
pub(crate) struct SequenceHandle {
    completion: Rc<RefCell<Completion>>,
}

impl SequenceHandle {
    /// Ends the sequence naturally.
    pub(crate) fn finish(&self) {
        self.completion.borrow_mut().finish();
    }

    pub(crate) fn status(&self) -> SequenceStatus {
        self.completion.borrow().status()
    }
}

fn manual_sequence() -> (ManualSequence, SequenceHandle) {
    let completion = Rc::new(RefCell::new(Completion::new()));
    (
        ManualSequence {
            completion: Rc::clone(&completion),
        },
        SequenceHandle { completion },
    )
}

//=== Probe ===============================================================

/// Shared recorder for hook calls, as `"<view>.<hook>"` strings.
#[derive(Clone, Default)]
pub(crate) struct Probe {
    log: Rc<RefCell<Vec<String>>>,
    sequences: Rc<RefCell<Vec<(String, SequenceHandle)>>>,
}

impl Probe {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn record(&self, entry: String) {
        self.log.borrow_mut().push(entry);
    }

    pub(crate) fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    /// Returns and clears the log.
    pub(crate) fn take_log(&self) -> Vec<String> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    pub(crate) fn count(&self, entry: &str) -> usize {
        self.log.borrow().iter().filter(|e| *e == entry).count()
    }

    /// Handle of the most recent manual sequence recorded as `name`,
    /// e.g. `"menu.show"`.
    pub(crate) fn sequence(&self, name: &str) -> SequenceHandle {
        self.sequences
            .borrow()
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, handle)| handle.clone())
            .unwrap_or_else(|| panic!("no sequence recorded as {name}"))
    }

    /// Number of sequences created under `name`.
    pub(crate) fn sequence_count(&self, name: &str) -> usize {
        self.sequences.borrow().iter().filter(|(n, _)| n == name).count()
    }
}

//=== ScriptedView ========================================================

/// How a scripted view answers a back press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BackResponse<K: ViewKey> {
    Ignore,
    Consume,
    /// Consume and queue a close of the given view.
    CloseView(K),
}

/// View whose hooks are recorded into a [`Probe`].
///
/// Sequences are instant (done on the first tick) unless `manual()` is
/// set, in which case the test finishes them through the probe.
pub(crate) struct ScriptedView<K: ViewKey> {
    name: &'static str,
    probe: Probe,
    manual: bool,
    back: BackResponse<K>,
}

impl<K: ViewKey> ScriptedView<K> {
    pub(crate) fn new(name: &'static str, probe: &Probe) -> Self {
        Self {
            name,
            probe: probe.clone(),
            manual: false,
            back: BackResponse::Ignore,
        }
    }

    pub(crate) fn manual(mut self) -> Self {
        self.manual = true;
        self
    }

    pub(crate) fn on_back(mut self, back: BackResponse<K>) -> Self {
        self.back = back;
        self
    }

    fn sequence(&mut self, hook: &str) -> Box<dyn Sequence> {
        let name = format!("{}.{}", self.name, hook);
        self.probe.record(name.clone());

        if !self.manual {
            return Box::new(InstantSequence::new());
        }
        let (sequence, handle) = manual_sequence();
        self.probe.sequences.borrow_mut().push((name, handle));
        Box::new(sequence)
    }
}

impl<K: ViewKey> View<K> for ScriptedView<K> {
    fn show_sequence(&mut self) -> Box<dyn Sequence> {
        self.sequence("show")
    }

    fn hide_sequence(&mut self) -> Box<dyn Sequence> {
        self.sequence("hide")
    }

    fn consume_back_pressed(&mut self, commands: &mut ViewCommands<K>) -> bool {
        self.probe.record(format!("{}.back", self.name));
        match self.back {
            BackResponse::Ignore => false,
            BackResponse::Consume => true,
            BackResponse::CloseView(key) => {
                commands.push(ViewCommand::Close(key));
                true
            }
        }
    }

    fn on_gain_focus(&mut self) {
        self.probe.record(format!("{}.gain_focus", self.name));
    }

    fn on_lose_focus(&mut self) {
        self.probe.record(format!("{}.lose_focus", self.name));
    }

    fn set_active(&mut self, active: bool) {
        self.probe.record(format!("{}.active({})", self.name, active));
    }

    fn on_awake(&mut self, start_visible: bool) {
        self.probe.record(format!("{}.awake({})", self.name, start_visible));
    }
}
