use crate::particle::IntegrationMethod;
use crate::spawn::SpawnMethod;
use crate::spring::SpringTy;
use crate::V3;

pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	SetGravity(V3),
	SetMethod(IntegrationMethod),
	SetDt(f32),
	SetBouncing(f32),
	SetLifetime(f32),
	SetElasticity(SpringTy, f32),
	SetDamping(SpringTy, f32),
	EnableSprings(SpringTy, bool),
	ShowSprings(bool),
	ShowParticles(bool),
	SetBodiesFixed(bool),
	SetFixedPoint(V3),
	SetSphereCenter(V3),
	SetSpawnMethod(SpawnMethod),
	SetParticlesPerRope(usize),
	SetFixEvery(usize),
	Spawn,
	RemoveAll,
}
