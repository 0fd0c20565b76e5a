//! Control entity - a positioned, sized child of a container
//!
//! The relayout engine only needs the [`Control`] capability: read bounds,
//! read anchors, commit new bounds. What a commit does (move a native
//! window, schedule a redraw, nothing) is up to the implementation.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AnchorPair, Bounds};

/// Closed set of control kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlKind {
    Button,
    #[default]
    Label,
    Edit,
    Slider,
    ListView,
    CheckBox,
    ProgressBar,
    Panel,
    GroupBox,
}

impl ControlKind {
    /// Whether controls of this kind own child controls
    pub fn is_container(&self) -> bool {
        matches!(self, ControlKind::Panel | ControlKind::GroupBox)
    }
}

/// Capability consumed by the relayout engine
pub trait Control {
    /// Control name, unique among its siblings
    fn name(&self) -> &str;

    /// What kind of control this is
    fn kind(&self) -> ControlKind;

    /// Current bounds in container-local coordinates
    fn bounds(&self) -> Bounds;

    /// Replace the stored bounds and commit them to the host
    fn set_bounds(&mut self, bounds: Bounds);

    /// Horizontal and vertical anchors
    fn anchors(&self) -> AnchorPair;

    /// Change anchors; takes effect on the next relayout pass
    fn set_anchors(&mut self, anchors: AnchorPair);

    fn is_visible(&self) -> bool {
        true
    }

    fn is_enabled(&self) -> bool {
        true
    }

    /// Child controls, empty for leaf controls
    fn children(&self) -> &[Box<dyn Control>] {
        &[]
    }
}

/// Receiver of committed bounds, e.g. a native child window
pub trait HostWindow {
    fn move_to(&mut self, bounds: Bounds);
}

/// A leaf control with optional host backing
pub struct Widget {
    name: String,
    kind: ControlKind,
    bounds: Bounds,
    anchors: AnchorPair,
    visible: bool,
    enabled: bool,
    host: Option<Box<dyn HostWindow>>,
}

impl Widget {
    /// Create an unrealized widget with default `(Min, Min)` anchors
    pub fn new(name: impl Into<String>, kind: ControlKind, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            kind,
            bounds,
            anchors: AnchorPair::default(),
            visible: true,
            enabled: true,
            host: None,
        }
    }

    pub fn with_anchors(mut self, anchors: AnchorPair) -> Self {
        self.anchors = anchors;
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

    /// Attach a host window; it is moved to the current bounds immediately
    pub fn with_host(mut self, mut host: Box<dyn HostWindow>) -> Self {
        host.move_to(self.bounds);
        self.host = Some(host);
        self
    }

    /// Whether a host window is attached
    pub fn is_realized(&self) -> bool {
        self.host.is_some()
    }
}

impl Control for Widget {
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
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::domain::value_objects::Anchor;

    struct RecordingHost(Rc<RefCell<Vec<Bounds>>>);

    impl HostWindow for RecordingHost {
        fn move_to(&mut self, bounds: Bounds) {
            self.0.borrow_mut().push(bounds);
        }
    }

    #[test]
    fn test_widget_defaults() {
        let w = Widget::new("ok", ControlKind::Button, Bounds::new(1, 2, 3, 4));

        assert_eq!(w.name(), "ok");
        assert_eq!(w.anchors(), AnchorPair::new(Anchor::Min, Anchor::Min));
        assert!(w.is_visible());
        assert!(w.is_enabled());
        assert!(!w.is_realized());
        assert!(w.children().is_empty());
    }

    #[test]
    fn test_set_bounds_commits_to_host() {
        let moves = Rc::new(RefCell::new(Vec::new()));
        let mut w = Widget::new("ok", ControlKind::Button, Bounds::new(0, 0, 10, 10))
            .with_host(Box::new(RecordingHost(moves.clone())));

        w.set_bounds(Bounds::new(5, 5, 20, 20));

        assert!(w.is_realized());
        assert_eq!(
            *moves.borrow(),
            vec![Bounds::new(0, 0, 10, 10), Bounds::new(5, 5, 20, 20)]
        );
        assert_eq!(w.bounds(), Bounds::new(5, 5, 20, 20));
    }

    #[test]
    fn test_container_kinds() {
        assert!(ControlKind::Panel.is_container());
        assert!(ControlKind::GroupBox.is_container());
        assert!(!ControlKind::ListView.is_container());
    }
}
