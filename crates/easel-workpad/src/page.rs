//! Page view derivation pipeline.
//!
//! An explicit ordered pipeline with two terminal render variants:
//! equality guard, property derivation, state projection, variant
//! selection. Every step is a pure function of its inputs; only the
//! equality guard in [`WorkpadPage`] keeps memory of the previous
//! render.

use crate::selectors;
use crate::state::{Animation, PageElement, WorkpadState};
use serde::Serialize;
use serde_json::Value;

/// Class applied to the selected page when no animation runs
pub const PAGE_ACTIVE_CLASS: &str = "easelPage--isActive";
/// Class applied to unselected pages when no animation runs
pub const PAGE_INACTIVE_CLASS: &str = "easelPage--isInactive";
/// Fixed duration of page transition animations
pub const PAGE_ANIMATION_DURATION: &str = "1s";

/// Inputs owned by the embedding container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageProps {
    /// Id of the page to render
    pub page_id: String,
    /// Whether this page is the currently selected one
    pub is_selected: bool,
    /// Transition animation currently applied, if any
    pub animation: Option<Animation>,
}

impl PageProps {
    /// Props for an unselected page without animation
    #[must_use]
    pub fn new(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            is_selected: false,
            animation: None,
        }
    }

    /// Props with the selection flag set
    #[inline]
    #[must_use]
    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    /// Props with a transition animation applied
    #[inline]
    #[must_use]
    pub fn animated(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }
}

/// Animation instruction derived from an [`Animation`] descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationStyle {
    /// Play direction, copied from the descriptor
    pub direction: String,
    /// Always [`PAGE_ANIMATION_DURATION`]
    pub duration: &'static str,
}

/// Fully derived render inputs for one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Id of the rendered page
    pub page_id: String,
    /// Class attached to the page container
    pub class_name: String,
    /// Animation instruction, present iff an animation descriptor was
    /// supplied
    pub animation_style: Option<AnimationStyle>,
    /// Whether the interactive variant was selected
    pub is_interactive: bool,
    /// Elements projected from state for this page
    pub elements: Vec<PageElement>,
    /// Page style document projected from state
    pub style: Value,
}

/// The two terminal render variants
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedPage {
    /// Editable page accepting pointer and keyboard interaction
    Interactive(PageView),
    /// Read-only page
    Static(PageView),
}

impl RenderedPage {
    /// The derived view, whichever variant carries it
    #[must_use]
    pub fn view(&self) -> &PageView {
        match self {
            Self::Interactive(view) | Self::Static(view) => view,
        }
    }

    /// True for the interactive variant
    #[inline]
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive(_))
    }
}

fn class_name(props: &PageProps) -> String {
    if let Some(animation) = &props.animation {
        return animation.name.clone();
    }
    if props.is_selected {
        PAGE_ACTIVE_CLASS.to_string()
    } else {
        PAGE_INACTIVE_CLASS.to_string()
    }
}

fn animation_style(props: &PageProps) -> Option<AnimationStyle> {
    props.animation.as_ref().map(|animation| AnimationStyle {
        direction: animation.direction.clone(),
        duration: PAGE_ANIMATION_DURATION,
    })
}

/// Whether editing is possible at all in the current state.
///
/// Fails closed: fullscreen mode, a read-only workpad, or a user
/// without write permission each disable editing on their own.
#[inline]
#[must_use]
pub fn is_editable(state: &WorkpadState) -> bool {
    !selectors::fullscreen(state) && selectors::is_writeable(state) && selectors::can_user_write(state)
}

/// Derive the full render inputs for one page
#[must_use]
pub fn derive_page_view(props: &PageProps, state: &WorkpadState) -> PageView {
    PageView {
        page_id: props.page_id.clone(),
        class_name: class_name(props),
        animation_style: animation_style(props),
        is_interactive: is_editable(state) && props.is_selected,
        elements: selectors::nodes(state, &props.page_id).to_vec(),
        style: selectors::page_style(state, &props.page_id),
    }
}

/// Pick the terminal variant for a derived view
#[must_use]
pub fn select_variant(view: PageView) -> RenderedPage {
    if view.is_interactive {
        RenderedPage::Interactive(view)
    } else {
        RenderedPage::Static(view)
    }
}

/// Render host for one workpad page.
///
/// Owns the previously rendered props and skips re-rendering when the
/// incoming props compare deep-equal, so unrelated parent updates
/// cannot cause visual glitches.
#[derive(Debug, Default)]
pub struct WorkpadPage {
    last_props: Option<PageProps>,
}

impl WorkpadPage {
    /// Host that has not rendered yet
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the pipeline; `None` means the previous render stands.
    pub fn render(&mut self, props: PageProps, state: &WorkpadState) -> Option<RenderedPage> {
        if self.last_props.as_ref() == Some(&props) {
            tracing::trace!(page_id = %props.page_id, "props unchanged, render suppressed");
            return None;
        }

        let view = derive_page_view(&props, state);
        self.last_props = Some(props);
        Some(select_variant(view))
    }
}
