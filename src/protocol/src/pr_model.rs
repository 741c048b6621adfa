// pr_model: Physical model for rendering

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrParticle {
	pub pos: [f32; 3],
	pub visible: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrSpring {
	pub id: usize,
	pub particles: [usize; 2],
	pub visible: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PrModel {
	pub particles: HashMap<usize, PrParticle>,
	pub springs: Vec<PrSpring>,
}
