use crate::error::{BuildError, Result};
use crate::particle::Particle;
use crate::particle_group::ParticleGroup;
use crate::spring::{Spring, SpringTy};
use crate::V3;

#[derive(Clone, Debug)]
pub struct SoftBodyParams {
	pub lifetime: f32,
	pub bouncing: f32,
	pub total_mass: f32,
	pub elasticity: f32,
	pub damping: f32,
	pub shear_elasticity: f32,
	pub shear_damping: f32,
	pub bend_elasticity: f32,
	pub bend_damping: f32,
	pub fixed: bool,
	pub show_springs: bool,
}

impl Default for SoftBodyParams {
	fn default() -> Self {
		Self {
			lifetime: 80.,
			bouncing: 0.8,
			total_mass: 1.,
			elasticity: 30.,
			damping: 5.,
			shear_elasticity: 30.,
			shear_damping: 5.,
			bend_elasticity: 30.,
			bend_damping: 5.,
			fixed: true,
			show_springs: false,
		}
	}
}

// pre-wired body template; particle ids and spring ids are local
// (0..n) until the template is adopted into the world arenas
#[derive(Clone, Debug, Default)]
pub struct SoftBody {
	pub particles: Vec<Particle>,
	pub springs: Vec<Spring>,
	// local indices of anchor particles and their original positions
	pub anchors: Vec<usize>,
	pub anchor_pos: Vec<V3>,
	pub fixed: bool,
}

impl SoftBody {
	// 1-d chain: n particles, n-1 stretch springs
	pub fn new_rope(
		n: usize,
		start: V3,
		spacing: f32,
		params: &SoftBodyParams,
		anchor: impl Fn(usize) -> bool,
	) -> Result<Self> {
		if n < 2 {
			return Err(BuildError::TooFewParticles(n));
		}
		let mass = checked_mass(params.total_mass, n)?;
		let mut body = Self {
			fixed: params.fixed,
			..Default::default()
		};
		for i in 0..n {
			let pos = start + V3::new(spacing * i as f32, 0., 0.);
			body.add_particle(i, pos, mass, params, &anchor);
			if i > 0 {
				body.add_spring(
					i - 1,
					i,
					params.elasticity,
					params.damping,
					SpringTy::Stretch,
					params.show_springs,
				)?;
			}
		}
		Ok(body)
	}

	// 2-d grid, flat index i * cols + j
	pub fn new_cloth(
		rows: usize,
		cols: usize,
		start: V3,
		spacing: f32,
		params: &SoftBodyParams,
		anchor: impl Fn(usize) -> bool,
	) -> Result<Self> {
		let n = rows * cols;
		if rows == 0 || cols == 0 || n < 2 {
			return Err(BuildError::TooFewParticles(n));
		}
		let mass = checked_mass(params.total_mass, n)?;
		let mut body = Self {
			fixed: params.fixed,
			..Default::default()
		};
		for i in 0..rows {
			for j in 0..cols {
				let idx = i * cols + j;
				let pos = start
					+ V3::new(spacing * j as f32, 0., spacing * i as f32);
				body.add_particle(idx, pos, mass, params, &anchor);

				// stretch: direct grid neighbors
				if i > 0 {
					body.add_spring(
						idx - cols,
						idx,
						params.elasticity,
						params.damping,
						SpringTy::Stretch,
						params.show_springs,
					)?;
				}
				if j > 0 {
					body.add_spring(
						idx - 1,
						idx,
						params.elasticity,
						params.damping,
						SpringTy::Stretch,
						params.show_springs,
					)?;
				}
				// shear: the two diagonals of the 2x2-cell block
				if i > 1 && j > 1 {
					body.add_spring(
						idx - 2 * cols - 2,
						idx,
						params.shear_elasticity,
						params.shear_damping,
						SpringTy::Shear,
						params.show_springs,
					)?;
					body.add_spring(
						idx - 2 * cols,
						idx - 2,
						params.shear_elasticity,
						params.shear_damping,
						SpringTy::Shear,
						params.show_springs,
					)?;
				}
				// bend: skip-one neighbors
				if i > 1 {
					body.add_spring(
						idx - 2 * cols,
						idx,
						params.bend_elasticity,
						params.bend_damping,
						SpringTy::Bend,
						params.show_springs,
					)?;
				}
				if j > 1 {
					body.add_spring(
						idx - 2,
						idx,
						params.bend_elasticity,
						params.bend_damping,
						SpringTy::Bend,
						params.show_springs,
					)?;
				}
			}
		}
		Ok(body)
	}

	fn add_particle(
		&mut self,
		idx: usize,
		pos: V3,
		mass: f32,
		params: &SoftBodyParams,
		anchor: &impl Fn(usize) -> bool,
	) {
		let pinned = anchor(idx);
		let p = Particle::new(idx, pos, mass)
			.with_bouncing(params.bouncing)
			.with_lifetime(params.lifetime)
			.with_fixed(pinned && params.fixed);
		if pinned {
			self.anchors.push(idx);
			self.anchor_pos.push(pos);
		}
		self.particles.push(p);
	}

	fn add_spring(
		&mut self,
		a: usize,
		b: usize,
		elasticity: f32,
		damping: f32,
		ty: SpringTy,
		visible: bool,
	) -> Result<()> {
		let s = Spring::new(&self.particles[a], &self.particles[b])?
			.with_elasticity(elasticity)
			.with_damping(damping)
			.with_ty(ty)
			.with_visible(visible);
		let si = self.springs.len();
		self.springs.push(s);
		self.particles[a].springs.push(si);
		self.particles[b].springs.push(si);
		Ok(())
	}
}

fn checked_mass(total: f32, n: usize) -> Result<f32> {
	let mass = total / n as f32;
	if mass <= 0. || !mass.is_finite() {
		return Err(BuildError::NonPositiveMass(mass));
	}
	Ok(mass)
}

// a template adopted into the world: all ids are arena ids
#[derive(Clone, Debug)]
pub struct WorldBody {
	pub particles: Vec<usize>,
	pub springs: Vec<usize>,
	pub anchors: Vec<usize>,
	pub anchor_pos: Vec<V3>,
	pub anchor_target: Vec<V3>,
	pub fixed: bool,
}

impl WorldBody {
	// rigid translation: every anchor keeps its offset from the first
	pub fn set_reference_point(&mut self, p: V3, pg: &mut ParticleGroup) {
		if self.anchors.is_empty() {
			return;
		}
		let change = self.anchor_pos[0] - p;
		for (i, &id) in self.anchors.iter().enumerate() {
			let target = self.anchor_pos[i] - change;
			self.anchor_target[i] = target;
			if let Some(particle) = pg.get_mut(id) {
				particle.set_pos(target);
			}
		}
	}

	// snap anchors home before flipping, so a temporarily unfixed body
	// cannot smear its anchor shape
	pub fn set_fixed(&mut self, fixed: bool, pg: &mut ParticleGroup) {
		for (i, &id) in self.anchors.iter().enumerate() {
			if let Some(particle) = pg.get_mut(id) {
				particle.set_pos(self.anchor_target[i]);
				particle.set_fixed(fixed);
			}
		}
		self.fixed = fixed;
	}
}
