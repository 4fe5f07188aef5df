// Physical Constants
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11; // N⋅m²/kg²

// Integration Parameters
pub const STEPS: u64 = 1_000_000; // fixed Euler steps over the whole burn
pub const SIMULATION_DATA_POINTS: u64 = 50; // recorded samples, excluding t = 0
pub const MAX_DATA_POINTS: u64 = 100_000; // upper bound on recorded samples per trajectory

// Default Rocket
pub const DEFAULT_ROCKET_MASS: f64 = 1.31e5; // kg (dry)
pub const DEFAULT_FUEL_MASS: f64 = 2.17e6; // kg
pub const DEFAULT_INITIAL_VELOCITY: f64 = 0.0; // m/s
pub const DEFAULT_EXHAUST_VELOCITY: f64 = 3.6e3; // m/s
pub const DEFAULT_FUEL_BURN_RATE: f64 = 8.0e3; // kg/s

// Default Planet
pub const DEFAULT_PLANET_MASS: f64 = 5.972e24; // kg
pub const DEFAULT_PLANET_RADIUS: f64 = 6.371e6; // meters

// Input Bounds
pub const MIN_EXHAUST_VELOCITY: f64 = 1.0; // m/s
pub const MIN_FUEL_BURN_RATE: f64 = 1.0; // kg/s
pub const MIN_PLANET_RADIUS: f64 = 1_000.0; // meters
