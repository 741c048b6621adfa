use thiserror::Error;

// Construction-time failures only. Per-step numerics never error: an
// unstable configuration is a visible artifact, not an Err.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
	#[error("mass must be positive, got {0}")]
	NonPositiveMass(f32),

	#[error("spring endpoints coincide, rest direction undefined")]
	DegenerateSpring,

	#[error("topology needs at least two particles, got {0}")]
	TooFewParticles(usize),
}

pub type Result<T> = std::result::Result<T, BuildError>;
