use crate::error::{BuildError, Result};
use crate::particle::Particle;
use crate::V3;
use protocol::pr_model::PrSpring;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpringTy {
	Stretch,
	Shear,
	Bend,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
	id: usize,
	pub ps: [usize; 2],
	pub elasticity: f32,
	pub damping: f32,
	// captured once from the initial placement, immutable afterwards
	l0: f32,
	pub ty: SpringTy,
	pub enabled: bool,
	pub visible: bool,
}

impl Spring {
	pub fn new(pa: &Particle, pb: &Particle) -> Result<Self> {
		let l0 = (pa.pos - pb.pos).magnitude();
		if !l0.is_normal() {
			return Err(BuildError::DegenerateSpring);
		}
		Ok(Self {
			id: 0,
			ps: [pa.get_id(), pb.get_id()],
			elasticity: 30.,
			damping: 5.,
			l0,
			ty: SpringTy::Stretch,
			enabled: true,
			visible: false,
		})
	}

	pub fn with_elasticity(mut self, e: f32) -> Self {
		self.elasticity = e;
		self
	}

	pub fn with_damping(mut self, d: f32) -> Self {
		self.damping = d;
		self
	}

	pub fn with_ty(mut self, ty: SpringTy) -> Self {
		self.ty = ty;
		self
	}

	pub fn with_visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}

	pub fn get_id(&self) -> usize {
		self.id
	}

	pub fn set_id(&mut self, id: usize) {
		self.id = id;
	}

	pub fn l0(&self) -> f32 {
		self.l0
	}

	// damped hookean force along the spring axis,
	// returned as (force on a, force on b)
	pub fn force_pair(&self, pa: &Particle, pb: &Particle) -> (V3, V3) {
		if !self.enabled {
			return (V3::zeros(), V3::zeros());
		}
		let dp = pb.pos - pa.pos;
		let l = dp.magnitude();
		if !l.is_normal() {
			eprintln!("WARN: bad spring length {}", l);
			return (V3::zeros(), V3::zeros());
		}
		let dir = dp / l;
		let dv = pb.vel - pa.vel;
		let f = dir
			* (self.elasticity * (l - self.l0) + self.damping * dv.dot(&dir));
		(f, -f)
	}

	pub fn force_on(&self, id: usize, pa: &Particle, pb: &Particle) -> V3 {
		let (fa, fb) = self.force_pair(pa, pb);
		if id == self.ps[0] {
			fa
		} else {
			fb
		}
	}

	pub fn render(&self) -> PrSpring {
		PrSpring {
			id: self.id,
			particles: self.ps,
			visible: self.visible,
		}
	}
}
