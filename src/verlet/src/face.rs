// render-only triangle over three point indices, torn together with its edges

#[derive(Clone, Copy)]
pub struct Face {
	pub ids: [usize; 3],
	pub uvs: [[f32; 2]; 3],
}

impl Face {
	pub fn new(ids: [usize; 3], uvs: [[f32; 2]; 3]) -> Self {
		assert!(
			ids[0] != ids[1] && ids[1] != ids[2] && ids[0] != ids[2],
			"face repeats a vertex"
		);
		Self { ids, uvs }
	}

	// true when the face sits on the i1-i2 edge
	pub fn spans(&self, i1: usize, i2: usize) -> bool {
		self.ids.contains(&i1) && self.ids.contains(&i2)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn spans_needs_both_ends() {
		let f = Face::new([0, 1, 2], [[0., 0.]; 3]);
		assert!(f.spans(0, 2));
		assert!(f.spans(2, 1));
		assert!(!f.spans(0, 3));
	}
}
