use super::types::CrossId;

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.1;

/// Uniform view scale, always within `[ZOOM_MIN, ZOOM_MAX]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom(f64);

impl Default for Zoom {
	fn default() -> Self {
		Self(1.0)
	}
}

impl Zoom {
	pub fn new(k: f64) -> Self {
		if k.is_nan() {
			return Self::default();
		}
		// Snap to tenths so repeated steps don't drift.
		Self(((k * 10.0).round() / 10.0).clamp(ZOOM_MIN, ZOOM_MAX))
	}

	pub fn get(self) -> f64 {
		self.0
	}

	pub fn zoom_in(self) -> Self {
		Self::new(self.0 + ZOOM_STEP)
	}

	pub fn zoom_out(self) -> Self {
		Self::new(self.0 - ZOOM_STEP)
	}

	/// One step per wheel notch: scrolling down zooms out, up zooms in,
	/// purely horizontal scrolling leaves the zoom alone.
	pub fn wheel(self, delta_y: f64) -> Self {
		if delta_y > 0.0 {
			self.zoom_out()
		} else if delta_y < 0.0 {
			self.zoom_in()
		} else {
			self
		}
	}

	pub fn percent(self) -> u32 {
		(self.0 * 100.0).round() as u32
	}
}

/// Host-owned view state fed into layout, render and hit-testing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeViewState {
	pub selected: Option<CrossId>,
	pub zoom: Zoom,
	pub search: String,
}

impl TreeViewState {
	/// Applies a click result; clicking blank space clears the selection.
	/// Returns whether the selection changed.
	pub fn select(&mut self, hit: Option<&CrossId>) -> bool {
		let next = hit.cloned();
		if self.selected == next {
			return false;
		}
		self.selected = next;
		true
	}
}
