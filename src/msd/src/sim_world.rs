use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, SystemTime};

use fnv::FnvHashMap;

use crate::collider::{box_walls, Plane, Sphere};
use crate::controller_message::ControllerMessage;
use crate::particle::{IntegrationMethod, Particle};
use crate::particle_group::ParticleGroup;
use crate::soft_body::{SoftBody, SoftBodyParams, WorldBody};
use crate::spawn::{initial_velocity, SpawnMethod};
use crate::spring::{Spring, SpringTy};
use crate::spring_group::SpringGroup;
use crate::V3;
use protocol::pr_model::PrModel;
use protocol::user_event::{UpdateInfo, UserEvent};

pub struct SimWorld {
	pub dt: f32,
	pub ppr: usize,
	pub time_scale: f32,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
	frame: u64,

	method: IntegrationMethod,
	gravity: V3,
	spawn_method: SpawnMethod,
	particles_per_rope: usize,
	fix_every: usize,
	fixed_point: V3,
	body_params: SoftBodyParams,
	show_particles: bool,
	// observed behavior keeps spring forces out of integration;
	// opt in to feed them back through the accumulators
	feed_spring_forces: bool,

	pg: ParticleGroup,
	sg: SpringGroup,
	body_alloc: usize,
	bodies: FnvHashMap<usize, WorldBody>,
	planes: Vec<Plane>,
	sphere: Option<Sphere>,
}

impl Default for SimWorld {
	fn default() -> Self {
		Self {
			dt: 0.012,
			ppr: 1,
			time_scale: 1.0,
			forward_frames: -1,
			frame: 0,

			method: IntegrationMethod::default(),
			gravity: V3::new(0., -9.81, 0.),
			spawn_method: SpawnMethod::default(),
			particles_per_rope: 10,
			fix_every: 1,
			fixed_point: V3::new(-2.5, 3., 0.),
			body_params: SoftBodyParams::default(),
			show_particles: false,
			feed_spring_forces: false,

			pg: ParticleGroup::default(),
			sg: SpringGroup::default(),
			body_alloc: 0,
			bodies: FnvHashMap::default(),
			planes: Vec::new(),
			sphere: None,
		}
	}
}

impl SimWorld {
	pub fn with_dt(mut self, dt: f32) -> Self {
		self.dt = dt;
		self
	}

	pub fn with_ppr(mut self, ppr: usize) -> Self {
		self.ppr = ppr;
		self
	}

	pub fn with_time_scale(mut self, time_scale: f32) -> Self {
		self.time_scale = time_scale;
		self
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 1; // provide first frame
		self
	}

	pub fn with_slow_down(mut self, k: f32) -> Self {
		self.dt /= k;
		self.time_scale *= k;
		self
	}

	pub fn with_method(mut self, method: IntegrationMethod) -> Self {
		self.method = method;
		self
	}

	pub fn with_spring_forces(mut self, on: bool) -> Self {
		self.feed_spring_forces = on;
		self
	}

	// the original demo scene: box walls, one sphere, one cloth
	pub fn init_test(&mut self) {
		self.planes = box_walls(10.);
		self.sphere = Some(Sphere::new(V3::new(0., -4., 0.), 3.));
		self.spawn();
	}

	pub fn add_plane(&mut self, plane: Plane) {
		self.planes.push(plane);
	}

	pub fn set_sphere(&mut self, sphere: Option<Sphere>) {
		self.sphere = sphere;
	}

	pub fn particle(&self, id: usize) -> Option<&Particle> {
		self.pg.get(id)
	}

	pub fn particle_mut(&mut self, id: usize) -> Option<&mut Particle> {
		self.pg.get_mut(id)
	}

	pub fn particle_len(&self) -> usize {
		self.pg.len()
	}

	pub fn spring(&self, id: usize) -> Option<&Spring> {
		self.sg.get(id)
	}

	pub fn spring_len(&self) -> Vec<usize> {
		self.sg.len()
	}

	pub fn body(&self, id: usize) -> Option<&WorldBody> {
		self.bodies.get(&id)
	}

	pub fn body_len(&self) -> usize {
		self.bodies.len()
	}

	pub fn add_particle(&mut self, p: Particle) -> usize {
		self.pg.add_particle(p)
	}

	// adopt a template: remap local particle/spring ids into the arenas
	// and register every spring with both of its endpoints
	pub fn add_body(&mut self, body: SoftBody) -> usize {
		eprintln!(
			"INFO: add body: {} particles, {} springs",
			body.particles.len(),
			body.springs.len()
		);
		let mut pid_map = vec![];
		for mut p in body.particles.into_iter() {
			p.springs.clear();
			pid_map.push(self.pg.add_particle(p));
		}
		let mut sid_map = vec![];
		for mut s in body.springs.into_iter() {
			s.ps = [pid_map[s.ps[0]], pid_map[s.ps[1]]];
			let ps = s.ps;
			let gid = self.sg.add_spring(s);
			for pid in ps {
				if let Some(p) = self.pg.get_mut(pid) {
					p.add_spring(gid);
				}
			}
			sid_map.push(gid);
		}
		let anchors: Vec<usize> =
			body.anchors.iter().map(|&i| pid_map[i]).collect();
		let world_body = WorldBody {
			particles: pid_map,
			springs: sid_map,
			anchors,
			anchor_target: body.anchor_pos.clone(),
			anchor_pos: body.anchor_pos,
			fixed: body.fixed,
		};
		let id = self.body_alloc;
		self.body_alloc += 1;
		self.bodies.insert(id, world_body);
		id
	}

	pub fn spawn(&mut self) {
		match self.spawn_method {
			SpawnMethod::Rope => self.spawn_rope(),
			SpawnMethod::Cloth => self.spawn_cloth(),
			SpawnMethod::SemiSphere | SpawnMethod::Explosion => {
				for _ in 0..500 {
					self.spawn_random();
				}
			}
			// cadence modes inject during update instead
			SpawnMethod::Waterfall | SpawnMethod::Fountain => {}
		}
	}

	fn spawn_rope(&mut self) {
		let n = self.particles_per_rope;
		let spacing = 5. / n as f32;
		match SoftBody::new_rope(
			n,
			self.fixed_point,
			spacing,
			&self.body_params,
			|i| i == 0,
		) {
			Ok(body) => {
				self.add_body(body);
			}
			Err(e) => eprintln!("WARN: spawn rope: {}", e),
		}
	}

	fn spawn_cloth(&mut self) {
		let n = self.particles_per_rope;
		let spacing = 5. / n as f32;
		let fix_every = self.fix_every;
		match SoftBody::new_cloth(
			n,
			n,
			self.fixed_point,
			spacing,
			&self.body_params,
			|i| i < n && i % fix_every == 0,
		) {
			Ok(body) => {
				self.add_body(body);
			}
			Err(e) => eprintln!("WARN: spawn cloth: {}", e),
		}
	}

	fn spawn_random(&mut self) {
		let mut p = Particle::new(0, V3::zeros(), 1.)
			.with_bouncing(self.body_params.bouncing)
			.with_lifetime(self.body_params.lifetime);
		p.set_vel(initial_velocity(self.spawn_method));
		self.pg.add_particle(p);
	}

	// tears down one body; its particles leave the arena wholesale, so
	// their spring back-refs go with them
	pub fn remove_body(&mut self, id: usize) -> bool {
		let body = match self.bodies.remove(&id) {
			Some(b) => b,
			None => return false,
		};
		eprintln!(
			"INFO: remove body {}: {} particles, {} springs",
			id,
			body.particles.len(),
			body.springs.len()
		);
		for sid in body.springs {
			self.sg.remove(sid);
		}
		for pid in body.particles {
			self.pg.remove(pid);
		}
		true
	}

	pub fn remove_all(&mut self) {
		eprintln!(
			"INFO: remove all: {} particles, {} springs, {} bodies",
			self.pg.len(),
			self.sg.len().iter().sum::<usize>(),
			self.bodies.len()
		);
		self.pg.clear();
		self.sg.clear();
		self.bodies.clear();
	}

	pub fn set_gravity(&mut self, g: V3) {
		self.gravity = g;
	}

	pub fn set_method(&mut self, method: IntegrationMethod) {
		self.method = method;
	}

	pub fn set_dt(&mut self, dt: f32) {
		self.dt = dt;
	}

	pub fn set_bouncing(&mut self, b: f32) {
		self.body_params.bouncing = b;
		for (_, p) in self.pg.iter_mut() {
			p.bouncing = b;
		}
	}

	pub fn set_lifetime(&mut self, l: f32) {
		self.body_params.lifetime = l;
		for (_, p) in self.pg.iter_mut() {
			p.lifetime = l;
		}
	}

	pub fn set_elasticity(&mut self, ty: SpringTy, e: f32) {
		match ty {
			SpringTy::Stretch => self.body_params.elasticity = e,
			SpringTy::Shear => self.body_params.shear_elasticity = e,
			SpringTy::Bend => self.body_params.bend_elasticity = e,
		}
		self.sg.set_elasticity(ty, e);
	}

	pub fn set_damping(&mut self, ty: SpringTy, d: f32) {
		match ty {
			SpringTy::Stretch => self.body_params.damping = d,
			SpringTy::Shear => self.body_params.shear_damping = d,
			SpringTy::Bend => self.body_params.bend_damping = d,
		}
		self.sg.set_damping(ty, d);
	}

	pub fn enable_springs(&mut self, ty: SpringTy, on: bool) {
		self.sg.set_enabled(ty, on);
	}

	pub fn show_springs(&mut self, on: bool) {
		self.body_params.show_springs = on;
		self.sg.set_visible(on);
	}

	pub fn show_particles(&mut self, on: bool) {
		self.show_particles = on;
	}

	pub fn set_bodies_fixed(&mut self, on: bool) {
		self.body_params.fixed = on;
		for body in self.bodies.values_mut() {
			body.set_fixed(on, &mut self.pg);
		}
	}

	pub fn set_fixed_point(&mut self, p: V3) {
		self.fixed_point = p;
		for body in self.bodies.values_mut() {
			body.set_reference_point(p, &mut self.pg);
		}
	}

	pub fn set_sphere_center(&mut self, c: V3) {
		if let Some(sphere) = self.sphere.as_mut() {
			sphere.center = c;
		}
	}

	pub fn set_spawn_method(&mut self, m: SpawnMethod) {
		self.spawn_method = m;
	}

	pub fn set_particles_per_rope(&mut self, n: usize) {
		self.particles_per_rope = n;
	}

	// clamped to 1, the anchor predicate takes indices mod this
	pub fn set_fix_every(&mut self, k: usize) {
		self.fix_every = k.max(1);
	}

	pub fn handle_message(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
				} else {
					self.forward_frames = 0;
				}
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
			ControllerMessage::SetGravity(g) => self.set_gravity(g),
			ControllerMessage::SetMethod(m) => self.set_method(m),
			ControllerMessage::SetDt(dt) => self.set_dt(dt),
			ControllerMessage::SetBouncing(b) => self.set_bouncing(b),
			ControllerMessage::SetLifetime(l) => self.set_lifetime(l),
			ControllerMessage::SetElasticity(ty, e) => {
				self.set_elasticity(ty, e)
			}
			ControllerMessage::SetDamping(ty, d) => self.set_damping(ty, d),
			ControllerMessage::EnableSprings(ty, on) => {
				self.enable_springs(ty, on)
			}
			ControllerMessage::ShowSprings(on) => self.show_springs(on),
			ControllerMessage::ShowParticles(on) => self.show_particles(on),
			ControllerMessage::SetBodiesFixed(on) => self.set_bodies_fixed(on),
			ControllerMessage::SetFixedPoint(p) => self.set_fixed_point(p),
			ControllerMessage::SetSphereCenter(c) => self.set_sphere_center(c),
			ControllerMessage::SetSpawnMethod(m) => self.set_spawn_method(m),
			ControllerMessage::SetParticlesPerRope(n) => {
				self.set_particles_per_rope(n)
			}
			ControllerMessage::SetFixEvery(k) => self.set_fix_every(k),
			ControllerMessage::Spawn => self.spawn(),
			ControllerMessage::RemoveAll => self.remove_all(),
		}
	}

	// one step, always runs to completion; instability is a visible
	// artifact, never an error
	pub fn update_frame(&mut self, dt: f32) {
		if dt == 0f32 {
			return;
		}
		self.frame += 1;
		let expired = self.pg.expire();
		if expired > 0 {
			eprintln!("INFO: expired {} particles", expired);
		}
		if !self.spawn_method.one_shot() && self.frame % 100 < 50 {
			self.spawn_random();
		}
		// reference-point changes were already propagated by their
		// mutators, between steps
		for (_, p) in self.pg.iter_mut() {
			if !p.is_fixed() {
				p.reset_force(self.gravity);
			}
		}
		if self.feed_spring_forces {
			self.apply_spring_forces();
		}
		self.integrate_and_collide(dt);
	}

	// sum each particle's spring forces through its back-reference
	// list, then push them into the accumulators
	fn apply_spring_forces(&mut self) {
		let mut acc: Vec<(usize, V3)> = Vec::new();
		for (&id, p) in self.pg.iter() {
			if p.is_fixed() {
				continue;
			}
			let mut f = V3::zeros();
			for &sid in p.springs() {
				if let Some(s) = self.sg.get(sid) {
					if let (Some(pa), Some(pb)) =
						(self.pg.get(s.ps[0]), self.pg.get(s.ps[1]))
					{
						f += s.force_on(id, pa, pb);
					}
				}
			}
			if f != V3::zeros() {
				acc.push((id, f));
			}
		}
		for (id, f) in acc {
			if let Some(p) = self.pg.get_mut(id) {
				p.add_force(f);
			}
		}
	}

	#[cfg(not(debug_assertions))]
	fn integrate_and_collide(&mut self, dt: f32) {
		use rayon::prelude::*;
		let method = self.method;
		let planes = &self.planes;
		let sphere = self.sphere.as_ref();
		self.pg
			.map_mut()
			.par_iter_mut()
			.for_each(|(_, p)| step_particle(p, dt, method, planes, sphere));
	}

	#[cfg(debug_assertions)]
	fn integrate_and_collide(&mut self, dt: f32) {
		let method = self.method;
		let planes = &self.planes;
		let sphere = self.sphere.as_ref();
		for (_, p) in self.pg.map_mut().iter_mut() {
			step_particle(p, dt, method, planes, sphere);
		}
	}

	pub fn run(&mut self) {
		for _ in 0..self.ppr {
			self.update_frame(self.dt);
		}
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			particles: self.pg.pr_particles(self.show_particles),
			springs: self.sg.pr_springs(),
		}
	}

	pub fn run_thread(
		&mut self,
		tx: Sender<UserEvent>,
		rx: Receiver<ControllerMessage>,
	) {
		let mut start_time = SystemTime::now();
		let mut first_frame = true;
		loop {
			let rtime: u64 =
				(self.dt * 1e6 * self.ppr as f32 * self.time_scale) as u64;
			if self.forward_frames != 0 {
				if self.forward_frames > 0 {
					self.forward_frames -= 1;
				}
				let sim_start = SystemTime::now();
				if !first_frame {
					self.run();
				} else {
					first_frame = false;
				}
				let sim_time = SystemTime::now()
					.duration_since(sim_start)
					.unwrap()
					.as_micros();
				let load = sim_time as f32 / rtime.max(1) as f32;
				let info = UpdateInfo {
					load,
					particle_len: self.pg.len(),
					spring_len: self.sg.len(),
				};
				tx.send(UserEvent::Update(self.pr_model(), info)).unwrap();
			}

			let next_time = SystemTime::now();
			let dt = next_time.duration_since(start_time).unwrap().as_micros()
				as u64;
			while let Ok(msg) = rx.try_recv() {
				self.handle_message(msg);
			}
			if dt < rtime {
				std::thread::sleep(Duration::from_micros(rtime - dt));
			}
			start_time = next_time;
		}
	}
}

// integrate, then correct against every plane in fixed order, then the
// sphere; per particle this order is a read-after-write dependency
fn step_particle(
	p: &mut Particle,
	dt: f32,
	method: IntegrationMethod,
	planes: &[Plane],
	sphere: Option<&Sphere>,
) {
	p.update(dt, method);
	for plane in planes {
		if p.crossed_plane(plane) {
			p.bounce_plane(plane);
		}
	}
	if let Some(s) = sphere {
		if p.inside_sphere(s) {
			p.bounce_sphere(s);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn test_drop_and_bounce() {
		let mut world = SimWorld::default()
			.with_dt(0.01)
			.with_method(IntegrationMethod::EulerSemi);
		world.add_plane(Plane::new(V3::new(0., 1., 0.), 10.));
		let id = world
			.add_particle(Particle::new(0, V3::zeros(), 1.).with_bouncing(0.5));
		let mut bounced = false;
		for _ in 0..10_000 {
			let v_pre = world.particle(id).unwrap().vel[1];
			world.update_frame(0.01);
			let p = world.particle(id).unwrap();
			if p.vel[1] > 0. {
				// the crossing step first adds one gravity kick, then
				// reflects with restitution 0.5
				let v_impact = v_pre - 9.81 * 0.01;
				assert_relative_eq!(
					p.vel[1],
					-0.5 * v_impact,
					epsilon = 1e-4
				);
				assert!(Plane::new(V3::new(0., 1., 0.), 10.)
					.signed_dist(p.pos) >= -1e-4);
				bounced = true;
				break;
			}
		}
		assert!(bounced);
	}

	#[test]
	fn test_add_body_remaps_ids() {
		let mut world = SimWorld::default();
		// occupy a few arena slots first
		for _ in 0..3 {
			world.add_particle(Particle::new(0, V3::zeros(), 1.));
		}
		let body = SoftBody::new_rope(
			4,
			V3::new(1., 1., 1.),
			0.5,
			&SoftBodyParams::default(),
			|i| i == 0,
		)
		.unwrap();
		let bid = world.add_body(body);
		let wb = world.body(bid).unwrap().clone();
		assert_eq!(wb.particles, vec![3, 4, 5, 6]);
		assert_eq!(wb.anchors, vec![3]);
		for &sid in wb.springs.iter() {
			let s = world.spring(sid).unwrap();
			for pid in s.ps {
				assert!(world
					.particle(pid)
					.unwrap()
					.springs()
					.contains(&sid));
			}
		}
	}

	#[test]
	fn test_spawn_cloth_census() {
		let mut world = SimWorld::default();
		world.spawn();
		assert_eq!(world.body_len(), 1);
		assert_eq!(world.particle_len(), 100);
		let n = 10;
		let counts = world.spring_len();
		assert_eq!(counts[0], 2 * n * (n - 1));
		assert_eq!(counts[1], 2 * (n - 2) * (n - 2));
		assert_eq!(counts[2], 2 * n * (n - 2));
		// fix_every 1 pins the whole first row
		let bid = 0;
		assert_eq!(world.body(bid).unwrap().anchors.len(), n);
	}

	#[test]
	fn test_expiry_removes_free_particles() {
		let mut world = SimWorld::default().with_dt(0.01);
		let id = world.add_particle(
			Particle::new(0, V3::zeros(), 1.).with_lifetime(0.005),
		);
		world.update_frame(0.01); // ages past zero
		world.update_frame(0.01); // swept out at the start of this step
		assert!(world.particle(id).is_none());
	}

	#[test]
	fn test_cadence_spawn() {
		let mut world = SimWorld::default();
		world.set_spawn_method(SpawnMethod::Fountain);
		world.spawn(); // no-op for cadence modes
		assert_eq!(world.particle_len(), 0);
		world.update_frame(0.01);
		assert_eq!(world.particle_len(), 1);
	}

	#[test]
	fn test_reference_point_moves_anchors() {
		let mut world = SimWorld::default();
		world.spawn();
		let wb = world.body(0).unwrap();
		let (first, second) = (wb.anchors[0], wb.anchors[1]);
		let before0 = world.particle(first).unwrap().pos;
		let before1 = world.particle(second).unwrap().pos;
		let delta = V3::new(1., -2., 0.5);
		world.set_fixed_point(V3::new(-2.5, 3., 0.) + delta);
		let after0 = world.particle(first).unwrap().pos;
		let after1 = world.particle(second).unwrap().pos;
		assert_relative_eq!((after0 - before0 - delta).magnitude(), 0., epsilon = 1e-5);
		assert_relative_eq!(
			(after1 - after0 - (before1 - before0)).magnitude(),
			0.,
			epsilon = 1e-5
		);
	}

	#[test]
	fn test_spring_force_feed_toggle() {
		let params = SoftBodyParams {
			fixed: false,
			..Default::default()
		};
		let body = || {
			SoftBody::new_rope(2, V3::zeros(), 1., &params, |_| false).unwrap()
		};

		// default: gravity-only driving, a stretched spring adds nothing
		let mut world = SimWorld::default()
			.with_method(IntegrationMethod::EulerSemi);
		world.set_gravity(V3::zeros());
		let bid = world.add_body(body());
		let free = world.body(bid).unwrap().particles[1];
		world.particle_mut(free).unwrap().reset_pos(V3::new(1.5, 0., 0.));
		world.update_frame(0.01);
		assert_eq!(world.particle(free).unwrap().vel, V3::zeros());

		// opted in: the stretched spring pulls the endpoint back
		let mut world = SimWorld::default()
			.with_method(IntegrationMethod::EulerSemi)
			.with_spring_forces(true);
		world.set_gravity(V3::zeros());
		let bid = world.add_body(body());
		let free = world.body(bid).unwrap().particles[1];
		world.particle_mut(free).unwrap().reset_pos(V3::new(1.5, 0., 0.));
		world.update_frame(0.01);
		assert!(world.particle(free).unwrap().vel[0] < 0.);
	}

	#[test]
	fn test_rope_cloth_size_tunable() {
		let mut world = SimWorld::default();
		world.handle_message(ControllerMessage::SetParticlesPerRope(5));
		world.handle_message(ControllerMessage::SetFixEvery(2));
		world.spawn();
		let n = 5;
		assert_eq!(world.particle_len(), n * n);
		assert_eq!(
			world.spring_len(),
			vec![
				2 * n * (n - 1),
				2 * (n - 2) * (n - 2),
				2 * n * (n - 2)
			]
		);
		// row 0, every second index: 0, 2, 4
		assert_eq!(world.body(0).unwrap().anchors.len(), 3);

		world.set_spawn_method(SpawnMethod::Rope);
		world.spawn();
		let rope = world.body(1).unwrap();
		assert_eq!(rope.particles.len(), 5);
		assert_eq!(rope.springs.len(), 4);
	}

	#[test]
	fn test_fix_every_clamped() {
		let mut world = SimWorld::default();
		world.handle_message(ControllerMessage::SetFixEvery(0));
		world.spawn();
		// clamp to 1: the whole first row stays pinned
		assert_eq!(world.body(0).unwrap().anchors.len(), 10);
	}

	#[test]
	fn test_remove_body_tears_down() {
		let mut world = SimWorld::default();
		world.spawn();
		let cloth_particles = world.particle_len();
		let cloth_springs = world.spring_len();
		world.set_spawn_method(SpawnMethod::Rope);
		world.spawn();
		assert_eq!(world.body_len(), 2);
		assert!(world.remove_body(1));
		assert_eq!(world.body_len(), 1);
		assert_eq!(world.particle_len(), cloth_particles);
		assert_eq!(world.spring_len(), cloth_springs);
		assert!(!world.remove_body(1));
	}

	#[test]
	fn test_world_update_message() {
		use protocol::Message;
		let mut world = SimWorld::default();
		world.spawn();
		let bytes = Message::WorldUpdate(world.pr_model()).to_bytes();
		match Message::from_bytes(&bytes) {
			Message::WorldUpdate(m) => {
				assert_eq!(m.particles.len(), world.particle_len());
				assert_eq!(
					m.springs.len(),
					world.spring_len().iter().sum::<usize>()
				);
			}
			Message::Nop => panic!("expected a world update"),
		}
	}

	#[test]
	fn test_remove_all() {
		let mut world = SimWorld::default();
		world.init_test();
		assert!(world.particle_len() > 0);
		world.remove_all();
		assert_eq!(world.particle_len(), 0);
		assert_eq!(world.body_len(), 0);
		assert_eq!(world.spring_len(), vec![0, 0, 0]);
	}

	#[test]
	fn test_pr_model_visibility() {
		let mut world = SimWorld::default();
		world.spawn();
		let model = world.pr_model();
		assert!(model.particles.values().all(|p| !p.visible));
		assert!(model.springs.iter().all(|s| !s.visible));
		world.show_springs(true);
		world.show_particles(true);
		let model = world.pr_model();
		assert!(model.particles.values().all(|p| p.visible));
		assert!(model.springs.iter().all(|s| s.visible));
	}
}
