use crate::world::World;
use crate::V2;
use protocol::input_frame::InputFrame;

// pointer drag session: grabbing pins a point under the cursor, dragging
// relocates it with its history so it carries no velocity, releasing
// restores the pin state it had when grabbed
pub struct Pointer {
	pos: V2,
	down: bool,
	grabbed: Option<usize>,
	hover: Option<usize>,
	grabbed_pinned: bool,
	smoothing: f32,
}

impl Default for Pointer {
	fn default() -> Self {
		Self {
			pos: V2::new(0., 0.),
			down: false,
			grabbed: None,
			hover: None,
			grabbed_pinned: false,
			smoothing: 0.2,
		}
	}
}

impl Pointer {
	pub fn pos(&self) -> V2 {
		self.pos
	}

	pub fn grabbed(&self) -> Option<usize> {
		self.grabbed
	}

	pub fn hover(&self) -> Option<usize> {
		self.hover
	}

	pub fn apply(&mut self, world: &mut World, frame: &InputFrame) {
		let radius = world.config().pick_radius;
		let was_down = self.down;
		self.down = frame.down;

		if frame.down && !was_down {
			// down edge: jump to the event position and grab
			self.pos = frame.pos;
			self.grabbed = world.find_nearest(self.pos, radius);
			if let Some(id) = self.grabbed {
				self.grabbed_pinned = world.point(id).pinned;
				world.point_mut(id).pinned = true;
			}
		} else {
			self.pos += (frame.pos - self.pos) * self.smoothing;
		}

		if !frame.down && was_down {
			// up edge: restore the grab-time pin state
			if let Some(id) = self.grabbed.take() {
				world.point_mut(id).pinned = self.grabbed_pinned;
			}
		}

		if frame.pin_toggle {
			if self.down {
				self.grabbed_pinned = !self.grabbed_pinned;
			} else if let Some(id) = self.hover {
				let p = world.point_mut(id);
				p.pinned = !p.pinned;
			}
		}

		if self.down {
			if let Some(id) = self.grabbed {
				let mut pos = self.pos;
				if world.config().show_floor {
					let floor_y = world.floor_y_at(pos[0]);
					if pos[1] >= floor_y {
						pos[1] = floor_y;
					}
				}
				world.point_mut(id).reset_pos(pos);
			}
		} else {
			self.hover = world.find_nearest(self.pos, radius);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::config::Config;

	fn world() -> World {
		World::new(Config::default().with_floor(false))
	}

	fn frame(pos: V2, down: bool) -> InputFrame {
		InputFrame {
			pos,
			down,
			pin_toggle: false,
		}
	}

	#[test]
	fn grab_pins_and_release_restores() {
		let mut world = world();
		let id = world.create_point(V2::new(100., 100.), false);
		let mut pointer = Pointer::default();

		pointer.apply(&mut world, &frame(V2::new(105., 100.), true));
		assert_eq!(pointer.grabbed(), Some(id));
		assert!(world.point(id).pinned);

		pointer.apply(&mut world, &frame(V2::new(105., 100.), false));
		assert_eq!(pointer.grabbed(), None);
		assert!(!world.point(id).pinned);
	}

	#[test]
	fn drag_moves_point_without_velocity() {
		let mut world = world();
		let id = world.create_point(V2::new(100., 100.), false);
		let mut pointer = Pointer::default();

		pointer.apply(&mut world, &frame(V2::new(100., 100.), true));
		for _ in 0..64 {
			pointer.apply(&mut world, &frame(V2::new(200., 150.), true));
		}
		let p = *world.point(id);
		assert!((p.pos - V2::new(200., 150.)).norm() < 1.);
		assert_eq!(p.velocity(), V2::new(0., 0.));
	}

	#[test]
	fn nothing_grabbed_outside_radius() {
		let mut world = world();
		world.create_point(V2::new(100., 100.), false);
		let mut pointer = Pointer::default();
		pointer.apply(&mut world, &frame(V2::new(400., 400.), true));
		assert_eq!(pointer.grabbed(), None);
	}

	#[test]
	fn toggle_while_dragging_leaves_the_point_pinned() {
		let mut world = world();
		let id = world.create_point(V2::new(100., 100.), false);
		let mut pointer = Pointer::default();

		pointer.apply(&mut world, &frame(V2::new(100., 100.), true));
		pointer.apply(
			&mut world,
			&InputFrame {
				pos: V2::new(100., 100.),
				down: true,
				pin_toggle: true,
			},
		);
		pointer.apply(&mut world, &frame(V2::new(100., 100.), false));
		assert!(world.point(id).pinned);
	}

	#[test]
	fn hover_toggles_pin_when_idle() {
		let mut world = world();
		let id = world.create_point(V2::new(100., 100.), false);
		let mut pointer = Pointer::default();

		// settle the hover onto the point first
		for _ in 0..32 {
			pointer.apply(&mut world, &frame(V2::new(100., 100.), false));
		}
		assert_eq!(pointer.hover(), Some(id));
		pointer.apply(
			&mut world,
			&InputFrame {
				pos: V2::new(100., 100.),
				down: false,
				pin_toggle: true,
			},
		);
		assert!(world.point(id).pinned);
	}
}
