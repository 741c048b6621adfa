use std::f32::consts::PI;

use crate::V3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpawnMethod {
	Waterfall,
	Fountain,
	SemiSphere,
	Explosion,
	Rope,
	#[default]
	Cloth,
}

impl SpawnMethod {
	// one-shot methods spawn on request; the others keep injecting
	// particles on a cadence while active
	pub fn one_shot(&self) -> bool {
		matches!(
			self,
			SpawnMethod::SemiSphere
				| SpawnMethod::Explosion
				| SpawnMethod::Rope
				| SpawnMethod::Cloth
		)
	}
}

fn rand_sphere_dir(semi: bool) -> V3 {
	let alpha = 2. * PI * (rand::random::<f32>() - 0.5);
	let beta = if semi {
		0.5 * PI * rand::random::<f32>()
	} else {
		PI * (rand::random::<f32>() - 0.5)
	};
	V3::new(
		alpha.cos() * beta.cos(),
		beta.sin(),
		beta.cos() * alpha.sin(),
	)
}

pub fn initial_velocity(method: SpawnMethod) -> V3 {
	match method {
		SpawnMethod::Waterfall => V3::new(
			5. * (rand::random::<f32>() - 0.5),
			0.,
			5. * (rand::random::<f32>() - 0.5),
		),
		SpawnMethod::Fountain => V3::new(
			5. * (rand::random::<f32>() - 0.5),
			10.,
			5. * (rand::random::<f32>() - 0.5),
		),
		SpawnMethod::SemiSphere => rand_sphere_dir(true) * 10.,
		SpawnMethod::Explosion => rand_sphere_dir(false) * 10.,
		SpawnMethod::Rope | SpawnMethod::Cloth => V3::zeros(),
	}
}
