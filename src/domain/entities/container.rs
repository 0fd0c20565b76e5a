//! Container entity - a control that owns and lays out child controls
//!
//! The container remembers the inner size its children were last laid out
//! against. Every change of inner size, whether from a resize of the
//! container itself or a change of its chrome, runs exactly one relayout pass
//! and then stores the new inner size.

use crate::domain::services::relayout;
use crate::domain::value_objects::{AnchorPair, Bounds, Insets, Size};

use super::control::{Control, ControlKind, HostWindow};

/// A control that positions children inside its content area
pub struct Container {
    name: String,
    kind: ControlKind,
    bounds: Bounds,
    anchors: AnchorPair,
    insets: Insets,
    /// Inner size used by the last relayout pass
    inner_size: Size,
    children: Vec<Box<dyn Control>>,
    visible: bool,
    enabled: bool,
    host: Option<Box<dyn HostWindow>>,
}

impl Container {
    /// Create an empty container with no chrome
    pub fn new(name: impl Into<String>, kind: ControlKind, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            kind,
            bounds,
            anchors: AnchorPair::default(),
            insets: Insets::default(),
            inner_size: bounds.size(),
            children: Vec::new(),
            visible: true,
            enabled: true,
            host: None,
        }
    }

    /// Create a top-level container whose inner size is the client area
    pub fn form(name: impl Into<String>, client: Size) -> Self {
        Self::new(
            name,
            ControlKind::Panel,
            Bounds::new(0, 0, client.width, client.height),
        )
    }

    pub fn with_anchors(mut self, anchors: AnchorPair) -> Self {
        self.anchors = anchors;
        self
    }

    /// Set chrome thickness before children are added
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self.inner_size = insets.shrink(self.bounds.size());
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_host(mut self, mut host: Box<dyn HostWindow>) -> Self {
        host.move_to(self.bounds);
        self.host = Some(host);
        self
    }

    /// Append a child; its bounds are taken as-is in inner coordinates
    pub fn add_child(&mut self, child: Box<dyn Control>) {
        self.children.push(child);
    }

    /// Remove a child by name, preserving the order of the rest
    pub fn remove_child(&mut self, name: &str) -> Option<Box<dyn Control>> {
        let index = self.children.iter().position(|c| c.name() == name)?;
        Some(self.children.remove(index))
    }

    /// Find a direct child by name
    pub fn child(&self, name: &str) -> Option<&dyn Control> {
        self.children
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Find a direct child by name (mutable)
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Box<dyn Control>> {
        self.children.iter_mut().find(|c| c.name() == name)
    }

    /// Find a descendant by a `/`-separated path of names
    pub fn find(&self, path: &str) -> Option<&dyn Control> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let mut current: &dyn Control = self.child(segments.next()?)?;
        for segment in segments {
            current = current
                .children()
                .iter()
                .find(|c| c.name() == segment)?
                .as_ref();
        }
        Some(current)
    }

    /// Inner size the children are currently laid out against
    pub fn inner_size(&self) -> Size {
        self.inner_size
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Change chrome thickness; relays out children if the inner size moves
    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
        self.resize_inner(insets.shrink(self.bounds.size()));
    }

    /// Apply a new inner size, running one relayout pass if it changed.
    ///
    /// The outer bounds are kept at the inner size plus chrome, so later
    /// `set_bounds` or `set_insets` calls start from this size.
    pub fn resize_inner(&mut self, new: Size) {
        let outer = self.insets.grow(new);
        if self.bounds.size() != outer {
            self.bounds.width = outer.width;
            self.bounds.height = outer.height;
            if let Some(host) = self.host.as_mut() {
                host.move_to(self.bounds);
            }
        }

        let old = self.inner_size;
        if old == new {
            return;
        }

        crate::log!(
            "relayout '{}': {} -> {} ({} children)",
            self.name,
            old,
            new,
            self.children.len()
        );
        relayout(&mut self.children, old, new);
        self.inner_size = new;
    }

    /// Visit this container's descendants depth-first with their paths
    pub fn walk(&self, visit: &mut dyn FnMut(&str, &dyn Control)) {
        fn walk_children(
            prefix: &str,
            children: &[Box<dyn Control>],
            visit: &mut dyn FnMut(&str, &dyn Control),
        ) {
            for child in children {
                let path = if prefix.is_empty() {
                    child.name().to_string()
                } else {
                    format!("{}/{}", prefix, child.name())
                };
                visit(&path, child.as_ref());
                walk_children(&path, child.children(), visit);
            }
        }

        walk_children("", &self.children, visit);
    }
}

impl Control for Container {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ControlKind {
        self.kind
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if let Some(host) = self.host.as_mut() {
            host.move_to(bounds);
        }
        self.resize_inner(self.insets.shrink(bounds.size()));
    }

    fn anchors(&self) -> AnchorPair {
        self.anchors
    }

    fn set_anchors(&mut self, anchors: AnchorPair) {
        self.anchors = anchors;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn children(&self) -> &[Box<dyn Control>] {
        &self.children
    }
}
