pub mod collider;
pub mod controller_message;
pub mod error;
pub mod particle;
pub mod particle_group;
pub mod sim_world;
pub mod soft_body;
pub mod spawn;
pub mod spring;
pub mod spring_group;

pub type V3 = nalgebra::Vector3<f32>;
