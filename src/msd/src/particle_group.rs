use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::particle::Particle;
use protocol::pr_model::PrParticle;

// id-allocating arena; BTreeMap keeps iteration in id order so the
// sequential update/collision order stays deterministic
#[derive(Default)]
pub struct ParticleGroup {
	id_alloc: usize,
	data: BTreeMap<usize, Particle>,
}

impl ParticleGroup {
	pub fn add_particle(&mut self, mut p: Particle) -> usize {
		let id = self.id_alloc;
		p.set_id(id);
		self.data.insert(id, p);
		self.id_alloc += 1;
		id
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, id: usize) -> Option<&Particle> {
		self.data.get(&id)
	}

	pub fn get_mut(&mut self, id: usize) -> Option<&mut Particle> {
		self.data.get_mut(&id)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&usize, &Particle)> {
		self.data.iter()
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = (&usize, &mut Particle)> {
		self.data.iter_mut()
	}

	pub(crate) fn map_mut(&mut self) -> &mut BTreeMap<usize, Particle> {
		&mut self.data
	}

	pub fn remove(&mut self, id: usize) -> Option<Particle> {
		self.data.remove(&id)
	}

	pub fn clear(&mut self) {
		self.data.clear();
	}

	// drops expired free particles, returns how many went away
	pub fn expire(&mut self) -> usize {
		let before = self.data.len();
		self.data
			.retain(|_, p| !(p.is_free() && p.lifetime <= 0.));
		before - self.data.len()
	}

	pub fn pr_particles(&self, visible: bool) -> HashMap<usize, PrParticle> {
		self.data
			.iter()
			.map(|(id, p)| (*id, p.render(visible)))
			.collect()
	}
}
