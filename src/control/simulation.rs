use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::errors::SimulationError;
use crate::telemetry_system::trajectory::ResultBundle;
use crate::trajectory_system::integrator::{integrate_with, IntegratorConfig};

use super::parameters::SimulationParameters;

// The consumer runs exactly once, and never on error.
pub fn run<I, K, V, F>(raw: I, consumer: F) -> Result<(), SimulationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    F: FnOnce(ResultBundle),
{
    run_with(raw, &IntegratorConfig::default(), consumer)
}

pub fn run_with<I, K, V, F>(
    raw: I,
    config: &IntegratorConfig,
    consumer: F,
) -> Result<(), SimulationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    F: FnOnce(ResultBundle),
{
    let params = SimulationParameters::from_raw(raw);
    debug!(?params, "resolved simulation parameters");

    let bundle = integrate_with(&params, config)?;
    consumer(bundle);
    Ok(())
}

pub fn spawn_simulation<F>(
    raw: Vec<(String, String)>,
    config: IntegratorConfig,
    consumer: F,
) -> SimulationHandle
where
    F: FnOnce(ResultBundle) + Send + 'static,
{
    SimulationHandle {
        inner: thread::spawn(move || run_with(raw, &config, consumer)),
    }
}

pub struct SimulationHandle {
    inner: JoinHandle<Result<(), SimulationError>>,
}

impl SimulationHandle {
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    pub fn join(self) -> Result<(), SimulationError> {
        self.inner.join().map_err(|_| {
            SimulationError::ExecutionError("simulation thread panicked".to_string())
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_EXHAUST_VELOCITY;
    use std::collections::HashMap;
    use std::sync::mpsc;

    fn coarse() -> IntegratorConfig {
        IntegratorConfig {
            steps: 5_000,
            data_points: 50,
            ..Default::default()
        }
    }

    #[test]
    fn test_consumer_called_once_with_full_bundle() {
        let mut calls = 0;
        let raw: HashMap<String, String> = HashMap::new();

        run_with(&raw, &coarse(), |bundle| {
            calls += 1;
            for (_, trajectory) in bundle.iter() {
                assert_eq!(trajectory.len(), 51);
            }
        })
        .unwrap();

        assert_eq!(calls, 1);
    }

    #[test]
    fn test_invalid_input_never_reaches_consumer() {
        let mut called = false;
        let result = run_with(vec![("m_f", "0")], &coarse(), |_| called = true);

        assert!(matches!(result, Err(SimulationError::InvalidParameters(_))));
        assert!(!called);
    }

    #[test]
    fn test_missing_exhaust_velocity_uses_default() {
        let mut captured = None;
        run_with(vec![("m_r", "1.31e5")], &coarse(), |bundle| {
            captured = Some(bundle)
        })
        .unwrap();

        let defaulted = captured.unwrap();
        let explicit = crate::trajectory_system::integrator::integrate_with(
            &SimulationParameters {
                exhaust_velocity: DEFAULT_EXHAUST_VELOCITY,
                ..Default::default()
            },
            &coarse(),
        )
        .unwrap();
        assert_eq!(defaulted, explicit);
    }

    #[test]
    fn test_spawned_simulation_delivers_bundle() {
        let (tx, rx) = mpsc::channel();
        let raw = vec![("v_e".to_string(), "oops".to_string())];

        let handle = spawn_simulation(raw, coarse(), move |bundle| {
            tx.send(bundle).unwrap();
        });
        let bundle = rx.recv().unwrap();
        assert_eq!(bundle.zero_ideal.len(), 51);

        while !handle.is_finished() {
            std::thread::yield_now();
        }
        assert!(handle.is_finished());
        handle.join().unwrap();
    }

    #[test]
    fn test_spawned_simulation_reports_errors() {
        let raw = vec![("m_r".to_string(), "0".to_string())];
        let handle = spawn_simulation(raw, coarse(), |_| panic!("consumer must not run"));
        assert!(matches!(
            handle.join(),
            Err(SimulationError::InvalidParameters(_))
        ));
    }
}
