pub mod chain;
pub mod cloth;
pub mod composite;
pub mod manager;
pub mod rope;
pub mod shape;
pub mod skeleton;
pub mod softbody;
