//! Declarative UI tree.
//!
//! The host's tray components are modeled as plain data: view functions
//! build a [`Node`] tree and the host renderer walks it. Class strings
//! use the host's Tailwind dialect. Buttons carry the [`UiEvent`] they
//! emit; text inputs, selectors, and toggles carry a typed id the host
//! driver maps back to events (see [`crate::messages`]).

use crate::messages::UiEvent;

/// Visual intent of a button, mirroring the host's button palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Primary,
    PrimarySubtle,
    Success,
    Alert,
    AlertSubtle,
    GraySubtle,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Primary => "primary",
            Intent::PrimarySubtle => "primary-subtle",
            Intent::Success => "success",
            Intent::Alert => "alert",
            Intent::AlertSubtle => "alert-subtle",
            Intent::GraySubtle => "gray-subtle",
        }
    }
}

/// Identity of a text input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Search,
    Year,
}

/// Identity of a dropdown selector control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Status,
    Season,
    Sort,
}

/// Identity of a toggle switch control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleId {
    AutoRemove,
}

/// One node of the rendered tray content.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Container {
        class: String,
        children: Vec<Node>,
    },
    Text {
        content: String,
        class: String,
    },
    Image {
        url: String,
        class: String,
    },
    Button {
        label: String,
        event: UiEvent,
        intent: Intent,
        disabled: bool,
        class: String,
    },
    TextInput {
        field: TextField,
        value: String,
        placeholder: String,
    },
    Select {
        selector: Selector,
        options: Vec<String>,
        selected: usize,
    },
    Toggle {
        toggle: ToggleId,
        label: String,
        on: bool,
    },
}

impl Node {
    pub fn container(class: &str, children: Vec<Node>) -> Node {
        Node::Container {
            class: class.to_string(),
            children,
        }
    }

    pub fn text(content: impl Into<String>, class: &str) -> Node {
        Node::Text {
            content: content.into(),
            class: class.to_string(),
        }
    }

    pub fn image(url: impl Into<String>, class: &str) -> Node {
        Node::Image {
            url: url.into(),
            class: class.to_string(),
        }
    }

    pub fn button(
        label: impl Into<String>,
        event: UiEvent,
        intent: Intent,
    ) -> Node {
        Node::Button {
            label: label.into(),
            event,
            intent,
            disabled: false,
            class: String::new(),
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Node {
        if let Node::Button { disabled: d, .. } = &mut self {
            *d = disabled;
        }
        self
    }

    pub fn class(mut self, class: &str) -> Node {
        if let Node::Button { class: c, .. } = &mut self {
            *c = class.to_string();
        }
        self
    }

    /// Depth-first traversal over the tree.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        if let Node::Container { children, .. } = self {
            for child in children {
                child.walk(visit);
            }
        }
    }

    /// All text contents in render order; test helper.
    pub fn texts(&self) -> Vec<&str> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if let Node::Text { content, .. } = node {
                found.push(content.as_str());
            }
        });
        found
    }

    /// All buttons as (label, event, disabled) in render order.
    pub fn buttons(&self) -> Vec<(&str, &UiEvent, bool)> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if let Node::Button {
                label,
                event,
                disabled,
                ..
            } = node
            {
                found.push((label.as_str(), event, *disabled));
            }
        });
        found
    }

    /// First button emitting `event`, if rendered.
    pub fn find_button(&self, event: &UiEvent) -> Option<&Node> {
        let mut found = None;
        self.walk(&mut |node| {
            if found.is_none()
                && matches!(node, Node::Button { event: e, .. } if e == event)
            {
                found = Some(node);
            }
        });
        found
    }
}
