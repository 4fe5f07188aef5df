pub mod gravity;
pub mod ideal;
pub mod integrator;
