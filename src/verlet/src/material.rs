#[derive(Clone, Copy)]
pub struct Material {
	pub tear_mult: f32,
}

pub const CLOTH: Material = Material { tear_mult: 2.0 };
pub const ROPE: Material = Material { tear_mult: 3.0 };
pub const RUBBER: Material = Material { tear_mult: 6.0 };
