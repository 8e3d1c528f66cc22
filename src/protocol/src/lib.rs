pub mod input_frame;
pub mod pr_model;

pub type V2 = nalgebra::Vector2<f32>;
