use crate::V3;

// Infinite plane as unit-ish normal + signed offset.
// signed_dist > 0 is the non-penetrating side.
#[derive(Clone, Debug)]
pub struct Plane {
	pub normal: V3,
	pub constant: f32,
}

impl Plane {
	pub fn new(normal: V3, constant: f32) -> Self {
		Self { normal, constant }
	}

	pub fn from_normal_and_point(normal: V3, point: V3) -> Self {
		let constant = -point.dot(&normal);
		Self { normal, constant }
	}

	pub fn signed_dist(&self, p: V3) -> f32 {
		self.normal.dot(&p) + self.constant
	}
}

#[derive(Clone, Debug)]
pub struct Sphere {
	pub center: V3,
	pub radius: f32,
}

impl Sphere {
	pub fn new(center: V3, radius: f32) -> Self {
		Self { center, radius }
	}
}

// Six inward-facing axis walls, offset units from the origin each.
pub fn box_walls(offset: f32) -> Vec<Plane> {
	vec![
		Plane::new(V3::new(0., 1., 0.), offset),
		Plane::new(V3::new(0., -1., 0.), offset),
		Plane::new(V3::new(0., 0., -1.), offset),
		Plane::new(V3::new(0., 0., 1.), offset),
		Plane::new(V3::new(1., 0., 0.), offset),
		Plane::new(V3::new(-1., 0., 0.), offset),
	]
}
