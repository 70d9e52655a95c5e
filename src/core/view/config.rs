//=========================================================================
// View Configuration
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::selection::ControlId;

//=== OpenSegment =========================================================

/// When an opening view starts receiving back press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenSegment {
    #[default]
    BeforeOpenSequence,
    AfterOpenSequence,
}

//=== CloseSegment ========================================================

/// When a closing view stops receiving back press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseSegment {
    #[default]
    BeforeCloseSequence,
    AfterCloseSequence,
}

//=== ViewConfig ==========================================================

/// Static configuration of a registered view.
///
/// # Default Values
///
/// - **standalone**: false
/// - **hide_underlying_ui**: false
/// - **start_visible**: true
/// - **scene_object**: false
/// - **auto_select_first**: true
/// - **gain back press**: before the open sequence
/// - **lose back press**: before the close sequence
///
/// # Example
///
/// ```rust
/// # use aetheric_views::prelude::*;
/// let config = ViewConfig::new()
///     .hide_underlying_ui(true)
///     .gain_back_pressed_during(OpenSegment::AfterOpenSequence)
///     .controls([ControlId(1), ControlId(2)]);
/// assert!(config.is_hiding_underlying_ui());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub(crate) standalone: bool,
    pub(crate) hide_underlying_ui: bool,
    pub(crate) start_visible: bool,
    pub(crate) scene_object: bool,
    pub(crate) auto_select_first: bool,
    pub(crate) first_selected: Option<ControlId>,
    pub(crate) gain_back_pressed: OpenSegment,
    pub(crate) lose_back_pressed: CloseSegment,
    pub(crate) controls: Vec<ControlId>,
}

impl ViewConfig {
    pub fn new() -> Self {
        Self {
            standalone: false,
            hide_underlying_ui: false,
            start_visible: true,
            scene_object: false,
            auto_select_first: true,
            first_selected: None,
            gain_back_pressed: OpenSegment::default(),
            lose_back_pressed: CloseSegment::default(),
            controls: Vec::new(),
        }
    }

    //--- Setters ----------------------------------------------------------

    /// Standalone views never join the view stack or the consumer stack.
    pub fn standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Opening this view hides whichever view currently has focus.
    pub fn hide_underlying_ui(mut self, hide: bool) -> Self {
        self.hide_underlying_ui = hide;
        self
    }

    pub fn start_visible(mut self, visible: bool) -> Self {
        self.start_visible = visible;
        self
    }

    /// Scene objects are already open when the view system starts.
    pub fn scene_object(mut self, scene_object: bool) -> Self {
        self.scene_object = scene_object;
        self
    }

    pub fn auto_select_first(mut self, auto_select: bool) -> Self {
        self.auto_select_first = auto_select;
        self
    }

    pub fn first_selected(mut self, control: ControlId) -> Self {
        self.first_selected = Some(control);
        self
    }

    pub fn gain_back_pressed_during(mut self, segment: OpenSegment) -> Self {
        self.gain_back_pressed = segment;
        self
    }

    pub fn lose_back_pressed_during(mut self, segment: CloseSegment) -> Self {
        self.lose_back_pressed = segment;
        self
    }

    /// Selectable controls owned by the view, in navigation order.
    pub fn controls<I>(mut self, controls: I) -> Self
    where
        I: IntoIterator<Item = ControlId>,
    {
        self.controls = controls.into_iter().collect();
        self
    }

    //--- Getters ----------------------------------------------------------

    pub fn is_standalone(&self) -> bool {
        self.standalone
    }

    pub fn is_hiding_underlying_ui(&self) -> bool {
        self.hide_underlying_ui
    }

    pub fn is_start_visible(&self) -> bool {
        self.start_visible
    }

    pub fn is_scene_object(&self) -> bool {
        self.scene_object
    }

    pub fn control_list(&self) -> &[ControlId] {
        &self.controls
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
