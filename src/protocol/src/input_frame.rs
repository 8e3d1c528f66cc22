use crate::V2;

// per-frame input snapshot: the frontend samples its events into this,
// the core never sees the event source itself
#[derive(Clone, Copy)]
pub struct InputFrame {
	pub pos: V2,
	pub down: bool,
	pub pin_toggle: bool,
}

impl Default for InputFrame {
	fn default() -> Self {
		Self {
			pos: V2::new(0., 0.),
			down: false,
			pin_toggle: false,
		}
	}
}
