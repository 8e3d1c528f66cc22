use crate::chain::Chain;
use crate::cloth::Cloth;
use crate::composite::Composite;
use crate::rope::Rope;
use crate::skeleton::Skeleton;
use crate::softbody::SoftBody;
use protocol::pr_model::PrPrimitive;
use verlet::world::World;

// closed set of authored shapes behind one capability surface
pub enum Shape {
	Rope(Rope),
	Cloth(Cloth),
	SoftBody(SoftBody),
	Chain(Chain),
	Composite(Composite),
}

impl Shape {
	pub fn register(&mut self, world: &mut World) {
		match self {
			Shape::Rope(s) => s.register(world),
			Shape::Cloth(s) => s.register(world),
			Shape::SoftBody(s) => s.register(world),
			Shape::Chain(s) => s.register(world),
			Shape::Composite(s) => s.register(world),
		}
	}

	// data shapes carry no per-frame state of their own, all motion lives
	// in the shared world
	pub fn update(&mut self, dt: f32) {
		if let Shape::Composite(s) = self {
			s.update(dt);
		}
	}

	pub fn custom_physics(&mut self, world: &mut World) {
		match self {
			Shape::Chain(s) => s.custom_physics(world),
			Shape::Composite(s) => s.custom_physics(world),
			_ => {}
		}
	}

	pub fn render(&self) -> Vec<PrPrimitive> {
		match self {
			Shape::Rope(s) => s.render(),
			Shape::Cloth(s) => s.render(),
			Shape::SoftBody(s) => s.render(),
			Shape::Chain(s) => s.render(),
			Shape::Composite(s) => s.render(),
		}
	}

	pub fn skeleton(&self) -> Option<&Skeleton> {
		match self {
			Shape::Rope(s) => Some(s.skeleton()),
			Shape::Cloth(s) => Some(s.skeleton()),
			Shape::SoftBody(s) => Some(s.skeleton()),
			Shape::Chain(s) => Some(s.skeleton()),
			Shape::Composite(_) => None,
		}
	}
}
