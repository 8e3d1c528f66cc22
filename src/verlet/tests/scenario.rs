use verlet::config::Config;
use verlet::world::World;
use verlet::V2;

// two-point rope, one end anchored: the free end must settle into a narrow
// band around the rest length and never come near the tear length
#[test]
fn anchored_rope_settles_without_tearing() {
	let config = Config::default()
		.with_floor(false)
		.with_friction(0.97)
		.with_iterations(8);
	let mut world = World::new(config);
	let a = world.create_point(V2::new(100., 50.), true);
	let b = world.create_point(V2::new(100., 70.), false);
	world.create_constraint(a, b, 20., 3.);

	let gravity = V2::new(0., 0.5);
	for frame in 0..120 {
		world.apply_forces(gravity);
		world.update();
		world.apply_boundary_conditions();
		let d = (world.point(b).pos - world.point(a).pos).norm();
		assert!(d < 60., "tore at frame {} with distance {}", frame, d);
		if frame >= 80 {
			assert!((d - 20.).abs() < 3., "out of band at frame {}: {}", frame, d);
		}
	}
	assert_eq!(world.constraints().len(), 1);
}

// a dropped point comes to rest exactly on the terrain and stays there
#[test]
fn free_fall_rests_on_the_floor() {
	let config = Config::default().with_friction(0.97);
	let mut world = World::new(config);
	let id = world.create_point(V2::new(300., 10.), false);

	let gravity = V2::new(0., 0.5);
	for _ in 0..600 {
		world.apply_forces(gravity);
		world.update();
		world.apply_boundary_conditions();
	}
	let p = world.point(id);
	let floor_y = world.floor_y_at(p.pos[0]);
	assert!((p.pos[1] - floor_y).abs() < 1e-3);
	assert!(p.velocity().norm() < 0.6);
}

// the floor profile swaps atomically and stays fully defined afterwards
#[test]
fn regenerated_floor_stays_covered() {
	let config = Config::default().with_viewport(900., 600.);
	let mut world = World::new(config);
	for _ in 0..8 {
		world.regenerate_floor();
		let mut x = 0f32;
		while x < 900. {
			assert!(world.floor_y_at(x).is_finite());
			x += 1.;
		}
	}
}
