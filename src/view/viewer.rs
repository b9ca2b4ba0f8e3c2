//! Pan/zoom state for the project image viewer.

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Zoom factor, pan offset and an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanZoom {
    zoom: f64,
    pan: Offset,
    /// Pointer position minus pan at drag start.
    drag_anchor: Option<Offset>,
}

impl Default for PanZoom {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Offset::ZERO,
            drag_anchor: None,
        }
    }
}

impl PanZoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> Offset {
        self.pan
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    /// Back to 100% and centered.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Offset::ZERO;
        self.drag_anchor = None;
    }

    /// Label shown next to the zoom controls, e.g. `125%`.
    pub fn percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    // Panning is only possible while zoomed in past 100%.

    pub fn begin_drag(&mut self, pointer: Offset) {
        if self.zoom > 1.0 {
            self.drag_anchor = Some(Offset::new(pointer.x - self.pan.x, pointer.y - self.pan.y));
        }
    }

    pub fn drag_to(&mut self, pointer: Offset) {
        if let Some(anchor) = self.drag_anchor {
            if self.zoom > 1.0 {
                self.pan = Offset::new(pointer.x - anchor.x, pointer.y - anchor.y);
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// CSS `transform` for the image element.
    pub fn css_transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.zoom,
            self.pan.x / self.zoom,
            self.pan.y / self.zoom
        )
    }
}
