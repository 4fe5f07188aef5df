use tracing::{debug, info};

use crate::constants::{GRAVITATIONAL_CONSTANT, MAX_DATA_POINTS, SIMULATION_DATA_POINTS, STEPS};
use crate::control::parameters::SimulationParameters;
use crate::errors::SimulationError;
use crate::telemetry_system::trajectory::{DataPoint, ResultBundle, Trajectory};

use super::gravity::GravityModel;
use super::ideal::IdealAscent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorConfig {
    pub steps: u64,
    pub data_points: u64, // must divide steps
    pub gravitational_constant: f64,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        IntegratorConfig {
            steps: STEPS,
            data_points: SIMULATION_DATA_POINTS,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
        }
    }
}

impl IntegratorConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.data_points == 0 || self.steps == 0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "steps ({}) and data points ({}) must be non-zero",
                self.steps, self.data_points
            )));
        }
        if self.data_points > MAX_DATA_POINTS {
            return Err(SimulationError::InvalidConfiguration(format!(
                "data points ({}) must not exceed {}",
                self.data_points, MAX_DATA_POINTS
            )));
        }
        if self.steps % self.data_points != 0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "steps ({}) must be a multiple of data points ({})",
                self.steps, self.data_points
            )));
        }
        if !self.gravitational_constant.is_finite() || self.gravitational_constant < 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "gravitational constant must be finite and non-negative, got {}",
                self.gravitational_constant
            )));
        }
        Ok(())
    }

    pub fn sample_interval(&self) -> u64 {
        self.steps / self.data_points
    }
}

#[derive(Debug, Clone, Copy)]
struct ModelState {
    model: GravityModel,
    position: f64,
    velocity: f64,
}

impl ModelState {
    // Impulse over one step: m dv - dm v_e = -F dt
    fn advance(&mut self, exhaust_impulse: f64, gravity_force: f64, dt: f64, total_mass: f64) {
        let dv = (exhaust_impulse - gravity_force * dt) / total_mass;
        self.position += self.velocity * dt;
        self.velocity += dv;
    }
}

pub fn integrate(params: &SimulationParameters) -> Result<ResultBundle, SimulationError> {
    integrate_with(params, &IntegratorConfig::default())
}

pub fn integrate_with(
    params: &SimulationParameters,
    config: &IntegratorConfig,
) -> Result<ResultBundle, SimulationError> {
    params.validate()?;
    config.validate()?;

    let dt = params.burn_time() / config.steps as f64;
    let dm = params.fuel_burn_rate * dt;
    let mu = config.gravitational_constant * params.planet_mass;
    let launch_radius = params.planet_radius;
    let exhaust_impulse = params.exhaust_velocity * dm;
    let sample_interval = config.sample_interval();

    debug!(
        ?params,
        steps = config.steps,
        data_points = config.data_points,
        dt,
        dm,
        "starting ascent integration"
    );

    let surface_gravity = GravityModel::Uniform.force(mu, launch_radius, 1.0, launch_radius);
    let ideal = IdealAscent::new(params, surface_gravity);

    let capacity = config.data_points as usize + 1;
    let mut numeric: [Trajectory; 3] = std::array::from_fn(|_| Trajectory::with_capacity(capacity));
    let mut zero_ideal = Trajectory::with_capacity(capacity);
    let mut uniform_ideal = Trajectory::with_capacity(capacity);

    let initial = DataPoint::new(
        0.0,
        params.initial_velocity,
        launch_radius,
        params.initial_mass(),
    );
    for trajectory in numeric.iter_mut() {
        trajectory.push(initial);
    }
    zero_ideal.push(initial);
    uniform_ideal.push(initial);

    let mut states = GravityModel::ALL.map(|model| ModelState {
        model,
        position: launch_radius,
        velocity: params.initial_velocity,
    });
    let mut fuel_left = params.fuel_mass;

    for step in 1..=config.steps {
        let total_mass = fuel_left + params.rocket_mass;

        for state in states.iter_mut() {
            let force = state
                .model
                .force(mu, launch_radius, total_mass, state.position);
            state.advance(exhaust_impulse, force, dt, total_mass);
        }

        fuel_left -= dm;

        if step % sample_interval == 0 {
            let t = step as f64 * dt;

            for (trajectory, state) in numeric.iter_mut().zip(states.iter()) {
                trajectory.push(DataPoint::new(
                    t,
                    state.velocity,
                    state.position,
                    total_mass,
                ));
            }

            zero_ideal.push(ideal.zero_gravity(t));
            uniform_ideal.push(ideal.uniform_gravity(t));
        }
    }

    let [zero, uniform, universal] = numeric;
    let bundle = ResultBundle {
        zero,
        uniform,
        universal,
        zero_ideal,
        uniform_ideal,
    };

    info!(
        burn_time = params.burn_time(),
        zero_velocity = final_velocity(&bundle.zero),
        uniform_velocity = final_velocity(&bundle.uniform),
        universal_velocity = final_velocity(&bundle.universal),
        "ascent integration complete"
    );

    Ok(bundle)
}

fn final_velocity(trajectory: &Trajectory) -> f64 {
    trajectory.last().map_or(f64::NAN, |point| point.velocity)
}
