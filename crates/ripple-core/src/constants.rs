// Default tuning for the ripple effect. Times are in seconds, distances in
// normalized image space ([0,1] on both axes).

// Capacity
pub const MAX_RIPPLES: usize = 5; // concurrent ripples kept in the registry

// Wave shape
pub const AMPLITUDE: f32 = 0.008; // displacement scale per ripple
pub const WAVELENGTH: f32 = 0.24; // wider rings read calmer
pub const PROPAGATION_SPEED: f32 = 3.0; // phase speed term of the wave
pub const DECAY_RATE: f32 = 0.52; // exponential fade per second

// Envelope shaping
pub const ATTACK_TIME: f32 = 0.18; // soft fade-in so a drop arrives gently
pub const RELEASE_TAIL: f32 = 1.20; // release ramp and prune grace period
pub const LINGER: f32 = 0.9; // kept alive past crest-to-edge before release

// Keep the underlying image readable
pub const DISPLACEMENT_CLAMP: f32 = 0.0045; // soft cap on summed offset length

// Breathing spawn cadence
pub const BASE_INTERVAL: f32 = 1.2; // average gap between drops
pub const MIN_INTERVAL: f32 = 0.5; // debounce; never spawn faster than this
pub const BREATH_RATE_HZ: f32 = 0.06; // one breath every ~16-17s
pub const BREATH_DEPTH: f32 = 0.35; // 0..1 modulation of the interval

// Spawn placement
pub const SPAWN_MARGIN: f32 = 0.06; // keep wavefronts off the image edge

// First frame
pub const SEED_BACKDATE: f32 = 0.2; // seeded ripples start this far in the past

// Numeric guards shared with the shader
pub const MIN_WAVELENGTH: f32 = 1e-4;
pub const RADIUS_EPSILON: f32 = 1e-5; // keeps r > 0 at a ripple's own origin
pub const SPREAD_MIN_RADIUS: f32 = 0.002; // floor for the 1/sqrt(r) spread
pub const CLAMP_EPSILON: f32 = 1e-6;
pub const CREST_HARMONIC: f32 = 0.12; // second harmonic that sharpens crests

// Scheduler sentinel: the first spawn is never blocked by the debounce
pub const NEVER_SPAWNED: f32 = -1e9;
