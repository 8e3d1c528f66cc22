use crate::shape::Shape;
use protocol::pr_model::PrPrimitive;
use verlet::world::World;

// ordered registry of shapes; shape-level passes run after the shared solve,
// in insertion order
#[derive(Default)]
pub struct Manager {
	shapes: Vec<Shape>,
}

impl Manager {
	pub fn add(&mut self, world: &mut World, mut shape: Shape) -> usize {
		shape.register(world);
		self.shapes.push(shape);
		self.shapes.len() - 1
	}

	// handles after the removed one shift down by one
	pub fn remove(&mut self, id: usize) -> Shape {
		self.shapes.remove(id)
	}

	pub fn update(&mut self, world: &mut World, dt: f32) {
		for shape in self.shapes.iter_mut() {
			shape.update(dt);
			shape.custom_physics(world);
		}
	}

	pub fn render(&self) -> Vec<PrPrimitive> {
		self.shapes.iter().flat_map(|s| s.render()).collect()
	}

	pub fn shapes(&self) -> &[Shape] {
		&self.shapes
	}

	pub fn get(&self, id: usize) -> &Shape {
		&self.shapes[id]
	}

	pub fn get_mut(&mut self, id: usize) -> &mut Shape {
		&mut self.shapes[id]
	}

	pub fn len(&self) -> usize {
		self.shapes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.shapes.is_empty()
	}

	pub fn clear(&mut self) {
		self.shapes.clear();
	}
}
