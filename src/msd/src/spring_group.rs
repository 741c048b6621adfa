use std::collections::BTreeMap;

use crate::spring::{Spring, SpringTy};
use protocol::pr_model::PrSpring;

#[derive(Default)]
pub struct SpringGroup {
	id_alloc: usize,
	data: BTreeMap<usize, Spring>,
}

impl SpringGroup {
	pub fn add_spring(&mut self, mut s: Spring) -> usize {
		let id = self.id_alloc;
		s.set_id(id);
		self.data.insert(id, s);
		self.id_alloc += 1;
		id
	}

	pub fn get(&self, id: usize) -> Option<&Spring> {
		self.data.get(&id)
	}

	pub fn get_mut(&mut self, id: usize) -> Option<&mut Spring> {
		self.data.get_mut(&id)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&usize, &Spring)> {
		self.data.iter()
	}

	pub fn remove(&mut self, id: usize) -> Option<Spring> {
		self.data.remove(&id)
	}

	pub fn clear(&mut self) {
		self.data.clear();
	}

	// counts per category: stretch, shear, bend
	pub fn len(&self) -> Vec<usize> {
		let mut counts = vec![0; 3];
		for s in self.data.values() {
			match s.ty {
				SpringTy::Stretch => counts[0] += 1,
				SpringTy::Shear => counts[1] += 1,
				SpringTy::Bend => counts[2] += 1,
			}
		}
		counts
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn set_elasticity(&mut self, ty: SpringTy, e: f32) {
		for s in self.data.values_mut().filter(|s| s.ty == ty) {
			s.elasticity = e;
		}
	}

	pub fn set_damping(&mut self, ty: SpringTy, d: f32) {
		for s in self.data.values_mut().filter(|s| s.ty == ty) {
			s.damping = d;
		}
	}

	// disabled springs stay wired, they just stop producing force
	pub fn set_enabled(&mut self, ty: SpringTy, on: bool) {
		for s in self.data.values_mut().filter(|s| s.ty == ty) {
			s.enabled = on;
		}
	}

	pub fn set_visible(&mut self, on: bool) {
		for s in self.data.values_mut() {
			s.visible = on;
		}
	}

	pub fn pr_springs(&self) -> Vec<PrSpring> {
		self.data.values().map(|s| s.render()).collect()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::particle::Particle;
	use crate::V3;

	fn sample(ty: SpringTy) -> Spring {
		let pa = Particle::new(0, V3::zeros(), 1.);
		let pb = Particle::new(1, V3::new(1., 0., 0.), 1.);
		Spring::new(&pa, &pb).unwrap().with_ty(ty)
	}

	#[test]
	fn test_census_and_category_tuning() {
		let mut sg = SpringGroup::default();
		sg.add_spring(sample(SpringTy::Stretch));
		sg.add_spring(sample(SpringTy::Stretch));
		sg.add_spring(sample(SpringTy::Shear));
		let bend = sg.add_spring(sample(SpringTy::Bend));
		assert_eq!(sg.len(), vec![2, 1, 1]);

		sg.set_elasticity(SpringTy::Shear, 99.);
		sg.set_enabled(SpringTy::Bend, false);
		assert_eq!(sg.get(bend).unwrap().enabled, false);
		for (_, s) in sg.iter() {
			match s.ty {
				SpringTy::Shear => assert_eq!(s.elasticity, 99.),
				_ => assert_ne!(s.elasticity, 99.),
			}
		}
	}
}
