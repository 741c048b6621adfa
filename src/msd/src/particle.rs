use crate::collider::{Plane, Sphere};
use crate::V3;
use protocol::pr_model::PrParticle;

// numerical damping on the inherited-motion term of the verlet step,
// unrelated to spring damping
pub const VERLET_CONST: f32 = 0.99;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IntegrationMethod {
	EulerSemi,
	EulerOrig,
	#[default]
	Verlet,
}

#[derive(Clone, Debug)]
pub struct Particle {
	id: usize,
	pub pos: V3,
	pub ppos: V3,
	pub vel: V3,
	pub force: V3,
	pub mass: f32,
	pub bouncing: f32,
	pub lifetime: f32,
	fixed: bool,
	first_round: bool,
	// ids into the spring arena, both endpoints registered
	pub springs: Vec<usize>,
}

impl Particle {
	pub fn new(id: usize, pos: V3, mass: f32) -> Self {
		Self {
			id,
			pos,
			ppos: pos,
			vel: V3::zeros(),
			force: V3::zeros(),
			mass,
			bouncing: 1.,
			lifetime: f32::MAX,
			fixed: false,
			first_round: true,
			springs: Vec::new(),
		}
	}

	pub fn with_bouncing(mut self, b: f32) -> Self {
		self.bouncing = b;
		self
	}

	pub fn with_lifetime(mut self, l: f32) -> Self {
		self.lifetime = l;
		self
	}

	pub fn with_fixed(mut self, fixed: bool) -> Self {
		self.fixed = fixed;
		self
	}

	pub fn get_id(&self) -> usize {
		self.id
	}

	pub fn set_id(&mut self, id: usize) {
		self.id = id;
	}

	pub fn is_fixed(&self) -> bool {
		self.fixed
	}

	pub fn set_fixed(&mut self, fixed: bool) {
		self.fixed = fixed;
	}

	// a particle with no springs is a free particle, not part of a topology
	pub fn is_free(&self) -> bool {
		self.springs.is_empty()
	}

	pub fn add_spring(&mut self, id: usize) {
		self.springs.push(id);
	}

	pub fn springs(&self) -> &[usize] {
		&self.springs
	}

	// moves the current sample only, the way anchor re-pinning does
	pub fn set_pos(&mut self, p: V3) {
		self.pos = p;
	}

	pub fn reset_pos(&mut self, p: V3) {
		self.pos = p;
		self.ppos = p;
	}

	pub fn offset_pos(&mut self, dp: V3) {
		self.pos += dp;
		self.ppos += dp;
	}

	pub fn set_vel(&mut self, v: V3) {
		self.vel = v;
	}

	pub fn add_force(&mut self, f: V3) {
		self.force += f;
	}

	// per-step contract: force is set, not accumulated across frames
	pub fn reset_force(&mut self, gravity: V3) {
		self.force = gravity * self.mass;
	}

	pub fn update(&mut self, dt: f32, method: IntegrationMethod) {
		self.lifetime -= dt;
		if !self.fixed {
			match method {
				IntegrationMethod::EulerSemi => {
					self.ppos = self.pos;
					self.vel += self.force * (dt / self.mass);
					self.pos += self.vel * dt;
				}
				IntegrationMethod::EulerOrig => {
					self.ppos = self.pos;
					self.pos += self.vel * (dt / self.mass);
					self.vel += self.force * dt;
				}
				IntegrationMethod::Verlet => {
					if self.first_round {
						// bootstrap: back-extrapolate the missing sample
						self.ppos = self.pos - self.vel * (dt / self.mass);
					} else {
						let delta = self.pos - self.ppos;
						self.ppos = self.pos;
						self.pos += delta * VERLET_CONST + self.force * (dt * dt);
						self.vel = (self.pos - self.ppos) / dt;
					}
				}
			}
		}
		self.first_round = false;
	}

	// swept test on the two most recent samples
	pub fn crossed_plane(&self, p: &Plane) -> bool {
		p.signed_dist(self.pos) * p.signed_dist(self.ppos) <= 0.
	}

	pub fn bounce_plane(&mut self, p: &Plane) {
		let n = p.normal.normalize();
		let d = self.pos.dot(&n) + p.constant;
		self.pos -= n * ((1. + self.bouncing) * d);
		self.vel -= n * ((1. + self.bouncing) * self.vel.dot(&n));
	}

	pub fn inside_sphere(&self, s: &Sphere) -> bool {
		(self.pos - s.center).magnitude() < s.radius
	}

	pub fn bounce_sphere(&mut self, s: &Sphere) {
		let dp = self.pos - s.center;
		let l = dp.magnitude();
		if !l.is_normal() {
			// sitting on the center, no usable direction
			return;
		}
		let dir = dp / l;
		let tangent =
			Plane::from_normal_and_point(dir, s.center + dir * s.radius);
		self.bounce_plane(&tangent);
	}

	pub fn render(&self, visible: bool) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1], self.pos[2]],
			visible,
		}
	}
}
