//! Easel Workpad Views
//!
//! State model and render pipeline for workpad pages.
//!
//! # Core Concepts
//!
//! - [`WorkpadState`]: the snapshot every derivation reads; always
//!   passed explicitly, never ambient
//! - [`StateStore`]: process-wide state with an explicit
//!   init/subscribe/teardown lifecycle owned by the rendering host
//! - [`WorkpadPage`]: render host running the page pipeline of
//!   equality guard, property derivation, state projection, and
//!   variant selection
//! - [`RenderedPage`]: the two terminal variants, interactive and
//!   static
//!
//! # Example
//!
//! ```rust,ignore
//! use easel_workpad::{PageProps, WorkpadPage, WorkpadState};
//!
//! let mut page = WorkpadPage::new();
//! let props = PageProps::new("page-1").selected(true);
//!
//! if let Some(rendered) = page.render(props, &state) {
//!     println!("class: {}", rendered.view().class_name);
//! }
//! ```

// Core modules
mod page;
mod selectors;
mod state;
mod store;

// Re-exports
pub use page::{
    derive_page_view, is_editable, select_variant, AnimationStyle, PageProps, PageView,
    RenderedPage, WorkpadPage, PAGE_ACTIVE_CLASS, PAGE_ANIMATION_DURATION, PAGE_INACTIVE_CLASS,
};
pub use selectors::{
    can_user_write, fullscreen, is_writeable, nodes, page_by_id, page_style,
};
pub use state::{Animation, ElementPosition, Page, PageElement, WorkpadState};
pub use store::{StateStore, SubscriptionId};
