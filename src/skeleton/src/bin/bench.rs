use std::time::SystemTime;

use protocol::input_frame::InputFrame;
use skeleton::chain::Chain;
use skeleton::cloth::Cloth;
use skeleton::composite::bike;
use skeleton::manager::Manager;
use skeleton::rope::Rope;
use skeleton::shape::Shape;
use skeleton::softbody::SoftBody;
use verlet::accel::Accelerometer;
use verlet::config::Config;
use verlet::pointer::Pointer;
use verlet::world::World;
use verlet::V2;

fn main() {
	let config = Config::default().with_friction(0.97);
	let mut world = World::new(config);
	let mut manager = Manager::default();
	manager.add(
		&mut world,
		Shape::Cloth(Cloth::new(V2::new(80., 40.), 12, 17, 20.)),
	);
	manager.add(
		&mut world,
		Shape::Rope(Rope::new(V2::new(640., 40.), 20., 16)),
	);
	manager.add(
		&mut world,
		Shape::Chain(Chain::new(V2::new(800., 60.), 40., 12).with_flexibility(0.8)),
	);
	manager.add(
		&mut world,
		Shape::SoftBody(SoftBody::new(V2::new(400., 200.), 50., 24)),
	);
	manager.add(&mut world, Shape::Composite(bike(V2::new(900., 300.))));

	let accel = Accelerometer::default();
	let mut pointer = Pointer::default();
	let idle = InputFrame::default();

	let start = SystemTime::now();
	let rframes = 600;
	for _ in 0..rframes {
		let gravity = accel.gravity(world.config().gravity);
		world.apply_forces(gravity);
		pointer.apply(&mut world, &idle);
		world.update();
		world.apply_boundary_conditions();
		manager.update(&mut world, 1. / 60.);
	}
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	let time = rframes as f32 / 60.;
	eprintln!(
		"INFO: {} points, {} constraints, {} faces",
		world.point_count(),
		world.constraints().len(),
		world.faces().len()
	);
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
}
