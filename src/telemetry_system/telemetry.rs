use std::fmt;

use super::trajectory::{ResultBundle, TrajectoryKind};

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySummary {
    pub kind: TrajectoryKind,
    pub burnout_time: f64,
    pub final_velocity: f64,
    pub max_velocity: f64,
    pub final_altitude: f64,
    pub final_mass: f64,
}

pub struct Telemetry {
    launch_radius: f64,
    summaries: Vec<TrajectorySummary>,
}

impl Telemetry {
    pub fn from_bundle(bundle: &ResultBundle) -> Self {
        let launch_radius = bundle.zero.first().map_or(0.0, |point| point.position);
        let summaries = bundle
            .iter()
            .filter_map(|(kind, trajectory)| {
                let last = trajectory.last()?;
                let max_velocity = trajectory
                    .iter()
                    .map(|point| point.velocity)
                    .fold(f64::NEG_INFINITY, f64::max);

                Some(TrajectorySummary {
                    kind,
                    burnout_time: last.time,
                    final_velocity: last.velocity,
                    max_velocity,
                    final_altitude: last.position - launch_radius,
                    final_mass: last.mass,
                })
            })
            .collect();

        Telemetry {
            launch_radius,
            summaries,
        }
    }

    pub fn summaries(&self) -> &[TrajectorySummary] {
        &self.summaries
    }

    pub fn summary(&self, kind: TrajectoryKind) -> Option<&TrajectorySummary> {
        self.summaries.iter().find(|summary| summary.kind == kind)
    }

    // Compared against the zero-gravity model of the same family
    pub fn gravity_loss(&self, kind: TrajectoryKind) -> Option<f64> {
        let baseline = if kind.is_analytical() {
            TrajectoryKind::ZeroIdeal
        } else {
            TrajectoryKind::Zero
        };
        let reference = self.summary(baseline)?;
        Some(reference.final_velocity - self.summary(kind)?.final_velocity)
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Burnout Summary ---")?;
        writeln!(
            f,
            "Launch Radius: {}",
            Self::format_altitude(self.launch_radius)
        )?;

        for summary in &self.summaries {
            writeln!(f, "\n[{}]", summary.kind)?;
            writeln!(f, "Burnout Time: {}", Self::format_time(summary.burnout_time))?;
            writeln!(f, "Final Velocity: {:.2} m/s", summary.final_velocity)?;
            writeln!(f, "Max Velocity: {:.2} m/s", summary.max_velocity)?;
            writeln!(
                f,
                "Altitude: {}",
                Self::format_altitude(summary.final_altitude)
            )?;
            writeln!(f, "Final Mass: {:.2} kg", summary.final_mass)?;
            if let Some(loss) = self.gravity_loss(summary.kind).filter(|loss| *loss != 0.0) {
                writeln!(f, "Gravity Loss: {:.2} m/s", loss)?;
            }
        }

        write!(f, "--- End of Summary ---")
    }
}
