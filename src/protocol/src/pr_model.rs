// pr_model: physics state snapshot for rendering

pub struct PrPoint {
	pub pos: [f32; 2],
	pub pinned: bool,
}

pub struct PrConstraint {
	pub ends: [usize; 2],
}

pub struct PrFace {
	pub ids: [usize; 3],
	pub uvs: [[f32; 2]; 3],
}

pub struct PrFloorSegment {
	pub x1: f32,
	pub x2: f32,
	pub y1: f32,
	pub y2: f32,
}

// shape-level draw data, positions are looked up through the PrModel points
pub enum PrPrimitive {
	Polyline { ids: Vec<usize>, closed: bool },
	Spokes { hub: usize, rim: Vec<usize> },
	Marker { id: usize },
}

pub struct PrModel {
	pub points: Vec<PrPoint>,
	pub constraints: Vec<PrConstraint>,
	pub faces: Vec<PrFace>,
	pub floor: Vec<PrFloorSegment>,
}
