use crate::control::parameters::SimulationParameters;
use crate::telemetry_system::trajectory::DataPoint;

// Tsiolkovsky: v(t) = v_0 - v_e ln(1 - f_b t / m_0). A uniform field only
// adds the free-fall terms g t and g t² / 2.
#[derive(Debug, Clone, Copy)]
pub struct IdealAscent {
    initial_velocity: f64,
    exhaust_velocity: f64,
    fuel_burn_rate: f64,
    launch_radius: f64,
    initial_mass: f64,
    surface_gravity: f64,
}

impl IdealAscent {
    pub fn new(params: &SimulationParameters, surface_gravity: f64) -> Self {
        IdealAscent {
            initial_velocity: params.initial_velocity,
            exhaust_velocity: params.exhaust_velocity,
            fuel_burn_rate: params.fuel_burn_rate,
            launch_radius: params.planet_radius,
            initial_mass: params.initial_mass(),
            surface_gravity,
        }
    }

    pub fn mass_at(&self, t: f64) -> f64 {
        self.initial_mass - self.fuel_burn_rate * t
    }

    pub fn delta_v(&self, t: f64) -> f64 {
        -self.exhaust_velocity * self.log_mass_ratio(t)
    }

    pub fn delta_x(&self, t: f64) -> f64 {
        (self.initial_velocity + self.exhaust_velocity) * t
            + self.exhaust_velocity
                * (self.initial_mass / self.fuel_burn_rate - t)
                * self.log_mass_ratio(t)
    }

    pub fn zero_gravity(&self, t: f64) -> DataPoint {
        DataPoint::new(
            t,
            self.initial_velocity + self.delta_v(t),
            self.launch_radius + self.delta_x(t),
            self.mass_at(t),
        )
    }

    pub fn uniform_gravity(&self, t: f64) -> DataPoint {
        let g = self.surface_gravity;
        DataPoint::new(
            t,
            self.initial_velocity + self.delta_v(t) - g * t,
            self.launch_radius + self.delta_x(t) - 0.5 * g * t * t,
            self.mass_at(t),
        )
    }

    // ln(M(t) / m_0), in (-inf, 0] while fuel remains
    fn log_mass_ratio(&self, t: f64) -> f64 {
        (1.0 - (self.fuel_burn_rate / self.initial_mass) * t).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn ideal() -> (SimulationParameters, IdealAscent) {
        let params = SimulationParameters::default();
        (params, IdealAscent::new(&params, 9.8))
    }

    #[test]
    fn test_starts_at_initial_state() {
        let (params, ideal) = ideal();
        for point in [ideal.zero_gravity(0.0), ideal.uniform_gravity(0.0)] {
            assert_eq!(point.velocity, params.initial_velocity);
            assert_eq!(point.position, params.planet_radius);
            assert_eq!(point.mass, params.initial_mass());
        }
    }

    #[test]
    fn test_burnout_velocity_matches_rocket_equation() {
        let (params, ideal) = ideal();
        let burnout = ideal.zero_gravity(params.burn_time());
        let expected = params.exhaust_velocity
            * (params.initial_mass() / params.rocket_mass).ln();
        assert_relative_eq!(burnout.velocity, expected, max_relative = 1e-9);
        assert_relative_eq!(burnout.mass, params.rocket_mass, max_relative = 1e-9);
    }

    #[test]
    fn test_position_is_integral_of_velocity() {
        let (_, ideal) = ideal();
        let (t, h) = (120.0, 1e-3);
        let slope = (ideal.delta_x(t + h) - ideal.delta_x(t - h)) / (2.0 * h);
        assert_relative_eq!(slope, ideal.delta_v(t), max_relative = 1e-6);
    }

    #[test]
    fn test_uniform_gravity_subtracts_free_fall() {
        let (_, ideal) = ideal();
        let t = 100.0;
        let zero = ideal.zero_gravity(t);
        let uniform = ideal.uniform_gravity(t);
        assert_abs_diff_eq!(zero.velocity - uniform.velocity, 9.8 * t, epsilon = 1e-9);
        assert_abs_diff_eq!(
            zero.position - uniform.position,
            0.5 * 9.8 * t * t,
            epsilon = 1e-6
        );
        assert_eq!(zero.mass, uniform.mass);
    }
}
