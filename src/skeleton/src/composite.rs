use crate::shape::Shape;
use crate::softbody::SoftBody;
use protocol::pr_model::PrPrimitive;
use verlet::world::World;
use verlet::V2;

// cross-shape strut, each end named as (child, local point)
pub struct Link {
	pub a: (usize, usize),
	pub b: (usize, usize),
	pub rest_length: f32,
}

// ordered container of sub-shapes; children claim their index spans
// depth-first, then the links bridge them in the shared space
#[derive(Default)]
pub struct Composite {
	children: Vec<Shape>,
	links: Vec<Link>,
}

impl Composite {
	pub fn with_child(mut self, child: Shape) -> Self {
		self.children.push(child);
		self
	}

	pub fn with_link(mut self, a: (usize, usize), b: (usize, usize), rest_length: f32) -> Self {
		self.links.push(Link { a, b, rest_length });
		self
	}

	pub fn children(&self) -> &[Shape] {
		&self.children
	}

	pub fn child(&self, id: usize) -> &Shape {
		&self.children[id]
	}

	pub fn child_mut(&mut self, id: usize) -> &mut Shape {
		&mut self.children[id]
	}

	fn resolve(&self, end: (usize, usize)) -> usize {
		let skel = self.children[end.0]
			.skeleton()
			.expect("link endpoint must name a leaf child");
		skel.global(end.1)
	}

	pub fn register(&mut self, world: &mut World) {
		for child in self.children.iter_mut() {
			child.register(world);
		}
		for link in self.links.iter() {
			let a = self.resolve(link.a);
			let b = self.resolve(link.b);
			world.create_constraint(a, b, link.rest_length, 0.);
		}
	}

	pub fn update(&mut self, dt: f32) {
		for child in self.children.iter_mut() {
			child.update(dt);
		}
	}

	pub fn custom_physics(&mut self, world: &mut World) {
		for child in self.children.iter_mut() {
			child.custom_physics(world);
		}
	}

	pub fn render(&self) -> Vec<PrPrimitive> {
		let mut prims: Vec<PrPrimitive> =
			self.children.iter().flat_map(|c| c.render()).collect();
		for link in self.links.iter() {
			prims.push(PrPrimitive::Polyline {
				ids: vec![self.resolve(link.a), self.resolve(link.b)],
				closed: false,
			});
		}
		prims
	}
}

// two-wheel vehicle: soft wheels joined hub to hub by a rigid axle
pub fn bike(pos: V2) -> Composite {
	let wheel_a = SoftBody::new(pos, 50., 13);
	let wheel_b = SoftBody::new(pos + V2::new(100., 0.), 40., 13);
	let hub_a = (0, wheel_a.segments());
	let hub_b = (1, wheel_b.segments());
	Composite::default()
		.with_child(Shape::SoftBody(wheel_a))
		.with_child(Shape::SoftBody(wheel_b))
		.with_link(hub_a, hub_b, 100.)
}

#[cfg(test)]
mod test {
	use super::*;
	use verlet::config::Config;

	#[test]
	fn bike_layout_is_depth_first() {
		let mut world = World::new(Config::default().with_floor(false));
		let mut bike = bike(V2::new(200., 100.));
		bike.register(&mut world);

		// two 14-point wheels side by side
		assert_eq!(world.point_count(), 28);
		let one = bike.child(0).skeleton().unwrap();
		let two = bike.child(1).skeleton().unwrap();
		assert_eq!(one.start(), 0);
		assert_eq!(two.start(), 14);

		// the axle joins the hubs, never tears
		let axle = *world.constraints().last().unwrap();
		assert_eq!([axle.i1, axle.i2], [13, 27]);
		assert_eq!(axle.rest_length, 100.);
		assert!(axle.tear_length <= 0.);
		let d = (world.point(27).pos - world.point(13).pos).norm();
		assert!((d - 100.).abs() < 1e-3);
	}

	#[test]
	fn nested_registration_offsets_stack() {
		let mut world = World::new(Config::default().with_floor(false));
		// something else occupies the front of the space
		world.create_point(V2::new(0., 0.), true);

		let mut bike = bike(V2::new(200., 100.));
		bike.register(&mut world);
		let one = bike.child(0).skeleton().unwrap();
		assert_eq!(one.start(), 1);
		let axle = *world.constraints().last().unwrap();
		assert_eq!([axle.i1, axle.i2], [14, 28]);
	}
}
