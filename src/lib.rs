pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::parameters::{ParameterField, SimulationParameters};
pub use control::simulation::{run, run_with, spawn_simulation, SimulationHandle};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::gravity::GravityModel;
pub use trajectory_system::ideal::IdealAscent;
pub use trajectory_system::integrator::{integrate, integrate_with, IntegratorConfig};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{Telemetry, TrajectorySummary};
pub use telemetry_system::trajectory::{
    DataPoint, ResultBundle, Trajectory, TrajectoryDifference, TrajectoryKind,
};
