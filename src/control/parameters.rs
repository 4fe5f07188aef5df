use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{
    DEFAULT_EXHAUST_VELOCITY, DEFAULT_FUEL_BURN_RATE, DEFAULT_FUEL_MASS,
    DEFAULT_INITIAL_VELOCITY, DEFAULT_PLANET_MASS, DEFAULT_PLANET_RADIUS, DEFAULT_ROCKET_MASS,
    MIN_EXHAUST_VELOCITY, MIN_FUEL_BURN_RATE, MIN_PLANET_RADIUS,
};
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    #[serde(rename = "m_r")]
    pub rocket_mass: f64,
    #[serde(rename = "m_f")]
    pub fuel_mass: f64,
    #[serde(rename = "v_0")]
    pub initial_velocity: f64,
    #[serde(rename = "v_e")]
    pub exhaust_velocity: f64,
    #[serde(rename = "f_b")]
    pub fuel_burn_rate: f64,
    #[serde(rename = "m_e")]
    pub planet_mass: f64,
    #[serde(rename = "r_e")]
    pub planet_radius: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            rocket_mass: DEFAULT_ROCKET_MASS,
            fuel_mass: DEFAULT_FUEL_MASS,
            initial_velocity: DEFAULT_INITIAL_VELOCITY,
            exhaust_velocity: DEFAULT_EXHAUST_VELOCITY,
            fuel_burn_rate: DEFAULT_FUEL_BURN_RATE,
            planet_mass: DEFAULT_PLANET_MASS,
            planet_radius: DEFAULT_PLANET_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterField {
    RocketMass,
    FuelMass,
    InitialVelocity,
    ExhaustVelocity,
    FuelBurnRate,
    PlanetMass,
    PlanetRadius,
}

impl ParameterField {
    pub const ALL: [ParameterField; 7] = [
        ParameterField::RocketMass,
        ParameterField::FuelMass,
        ParameterField::InitialVelocity,
        ParameterField::ExhaustVelocity,
        ParameterField::FuelBurnRate,
        ParameterField::PlanetMass,
        ParameterField::PlanetRadius,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ParameterField::RocketMass => "m_r",
            ParameterField::FuelMass => "m_f",
            ParameterField::InitialVelocity => "v_0",
            ParameterField::ExhaustVelocity => "v_e",
            ParameterField::FuelBurnRate => "f_b",
            ParameterField::PlanetMass => "m_e",
            ParameterField::PlanetRadius => "r_e",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.key() == key)
    }

    pub fn minimum(&self) -> f64 {
        match self {
            ParameterField::ExhaustVelocity => MIN_EXHAUST_VELOCITY,
            ParameterField::FuelBurnRate => MIN_FUEL_BURN_RATE,
            ParameterField::PlanetRadius => MIN_PLANET_RADIUS,
            _ => 0.0,
        }
    }
}

impl SimulationParameters {
    pub fn get(&self, field: ParameterField) -> f64 {
        match field {
            ParameterField::RocketMass => self.rocket_mass,
            ParameterField::FuelMass => self.fuel_mass,
            ParameterField::InitialVelocity => self.initial_velocity,
            ParameterField::ExhaustVelocity => self.exhaust_velocity,
            ParameterField::FuelBurnRate => self.fuel_burn_rate,
            ParameterField::PlanetMass => self.planet_mass,
            ParameterField::PlanetRadius => self.planet_radius,
        }
    }

    pub fn set(&mut self, field: ParameterField, value: f64) {
        let slot = match field {
            ParameterField::RocketMass => &mut self.rocket_mass,
            ParameterField::FuelMass => &mut self.fuel_mass,
            ParameterField::InitialVelocity => &mut self.initial_velocity,
            ParameterField::ExhaustVelocity => &mut self.exhaust_velocity,
            ParameterField::FuelBurnRate => &mut self.fuel_burn_rate,
            ParameterField::PlanetMass => &mut self.planet_mass,
            ParameterField::PlanetRadius => &mut self.planet_radius,
        };
        *slot = value;
    }

    // Unknown keys are ignored; unusable values keep the default.
    pub fn from_raw<I, K, V>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = SimulationParameters::default();

        for (key, value) in raw {
            let Some(field) = ParameterField::from_key(key.as_ref()) else {
                continue;
            };

            match parse_field(field, value.as_ref()) {
                Some(parsed) => params.set(field, parsed),
                None => warn!(
                    field = field.key(),
                    raw = value.as_ref(),
                    default = params.get(field),
                    "unusable parameter value, keeping default"
                ),
            }
        }

        params
    }

    pub fn burn_time(&self) -> f64 {
        self.fuel_mass / self.fuel_burn_rate
    }

    pub fn initial_mass(&self) -> f64 {
        self.rocket_mass + self.fuel_mass
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        for field in ParameterField::ALL {
            if !self.get(field).is_finite() {
                return Err(SimulationError::InvalidParameters(format!(
                    "{} must be finite, got {}",
                    field.key(),
                    self.get(field)
                )));
            }
        }

        let strictly_positive = [
            ParameterField::RocketMass,
            ParameterField::FuelMass,
            ParameterField::ExhaustVelocity,
            ParameterField::FuelBurnRate,
            ParameterField::PlanetRadius,
        ];
        for field in strictly_positive {
            if self.get(field) <= 0.0 {
                return Err(SimulationError::InvalidParameters(format!(
                    "{} must be positive, got {}",
                    field.key(),
                    self.get(field)
                )));
            }
        }

        if self.planet_mass < 0.0 {
            return Err(SimulationError::InvalidParameters(format!(
                "m_e must not be negative, got {}",
                self.planet_mass
            )));
        }

        let burn_time = self.burn_time();
        if !burn_time.is_finite() || burn_time <= 0.0 {
            return Err(SimulationError::InvalidParameters(format!(
                "burn time m_f / f_b must be finite and positive, got {}",
                burn_time
            )));
        }

        Ok(())
    }
}

fn parse_field(field: ParameterField, raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value.is_finite() && value >= field.minimum()).then_some(value)
}
