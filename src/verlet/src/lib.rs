pub mod accel;
pub mod config;
pub mod constraint;
pub mod face;
pub mod floor;
pub mod material;
pub mod point;
pub mod pointer;
pub mod world;

pub type V2 = nalgebra::Vector2<f32>;
pub type V3 = nalgebra::Vector3<f32>;
