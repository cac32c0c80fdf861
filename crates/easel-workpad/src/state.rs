//! Workpad state model.
//!
//! Plain snapshot structs. A workpad is a list of pages; each page
//! carries its style document and the elements rendered on it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Geometry of one element on a page
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementPosition {
    /// Offset from the page's left edge
    pub left: f64,
    /// Offset from the page's top edge
    pub top: f64,
    /// Element width
    pub width: f64,
    /// Element height
    pub height: f64,
    /// Rotation in degrees
    pub angle: f64,
}

/// One renderable node on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    /// Element id, unique within the workpad
    pub id: String,
    /// Render expression evaluated by the element renderer
    pub expression: String,
    /// Placement on the page
    #[serde(default)]
    pub position: ElementPosition,
}

impl PageElement {
    /// Element with the given id and expression at the default position
    #[must_use]
    pub fn new(id: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            expression: expression.into(),
            position: ElementPosition::default(),
        }
    }
}

/// Transition animation descriptor for a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    /// Animation name; doubles as the page's class while animating
    pub name: String,
    /// Play direction, e.g. `normal` or `alternate`
    pub direction: String,
}

impl Animation {
    /// Animation with the given name and direction
    #[must_use]
    pub fn new(name: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: direction.into(),
        }
    }
}

/// A single workpad page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page id, unique within the workpad
    pub id: String,
    /// Page style document (background, transitions, ...)
    #[serde(default)]
    pub style: Value,
    /// Elements rendered on this page
    #[serde(default)]
    pub elements: Vec<PageElement>,
}

impl Page {
    /// Empty page with the given id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            style: Value::Null,
            elements: Vec::new(),
        }
    }

    /// Page with an element appended
    #[must_use]
    pub fn with_element(mut self, element: PageElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Page with the given style document
    #[must_use]
    pub fn with_style(mut self, style: Value) -> Self {
        self.style = style;
        self
    }
}

/// Snapshot of everything the page pipeline reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkpadState {
    /// Whether the app is in fullscreen presentation mode
    pub fullscreen: bool,
    /// Whether the workpad itself accepts edits
    pub writeable: bool,
    /// Whether the current user holds write permission
    pub can_user_write: bool,
    /// Pages of the workpad
    pub pages: Vec<Page>,
}

impl Default for WorkpadState {
    fn default() -> Self {
        Self {
            fullscreen: false,
            writeable: true,
            can_user_write: true,
            pages: Vec::new(),
        }
    }
}

impl WorkpadState {
    /// Editable state with no pages
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State with a page appended
    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }
}
