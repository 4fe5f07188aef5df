use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: f64,
    pub velocity: f64,
    pub position: f64,
    pub mass: f64,
}

impl DataPoint {
    pub fn new(time: f64, velocity: f64, position: f64, mass: f64) -> Self {
        DataPoint {
            time,
            velocity,
            position,
            mass,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<DataPoint>,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&DataPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&DataPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrajectoryKind {
    Zero,
    Uniform,
    Universal,
    ZeroIdeal,
    UniformIdeal,
}

impl TrajectoryKind {
    pub const ALL: [TrajectoryKind; 5] = [
        TrajectoryKind::Zero,
        TrajectoryKind::Uniform,
        TrajectoryKind::Universal,
        TrajectoryKind::ZeroIdeal,
        TrajectoryKind::UniformIdeal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TrajectoryKind::Zero => "zero",
            TrajectoryKind::Uniform => "uniform",
            TrajectoryKind::Universal => "universal",
            TrajectoryKind::ZeroIdeal => "zero_ideal",
            TrajectoryKind::UniformIdeal => "uniform_ideal",
        }
    }

    pub fn is_analytical(&self) -> bool {
        matches!(
            self,
            TrajectoryKind::ZeroIdeal | TrajectoryKind::UniformIdeal
        )
    }
}

impl fmt::Display for TrajectoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryDifference {
    pub time: f64,
    pub velocity: f64,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub zero: Trajectory,
    pub uniform: Trajectory,
    pub universal: Trajectory,
    pub zero_ideal: Trajectory,
    pub uniform_ideal: Trajectory,
}

impl ResultBundle {
    pub fn get(&self, kind: TrajectoryKind) -> &Trajectory {
        match kind {
            TrajectoryKind::Zero => &self.zero,
            TrajectoryKind::Uniform => &self.uniform,
            TrajectoryKind::Universal => &self.universal,
            TrajectoryKind::ZeroIdeal => &self.zero_ideal,
            TrajectoryKind::UniformIdeal => &self.uniform_ideal,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TrajectoryKind, &Trajectory)> {
        TrajectoryKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }

    // to - from, timed by `from`
    pub fn difference(
        &self,
        from: TrajectoryKind,
        to: TrajectoryKind,
    ) -> Vec<TrajectoryDifference> {
        self.get(from)
            .iter()
            .zip(self.get(to).iter())
            .map(|(a, b)| TrajectoryDifference {
                time: a.time,
                velocity: b.velocity - a.velocity,
                position: b.position - a.position,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory(points: &[(f64, f64, f64)]) -> Trajectory {
        let mut trajectory = Trajectory::with_capacity(points.len());
        for &(time, velocity, position) in points {
            trajectory.push(DataPoint::new(time, velocity, position, 1.0));
        }
        trajectory
    }

    fn bundle() -> ResultBundle {
        ResultBundle {
            zero: trajectory(&[(0.0, 0.0, 10.0), (1.0, 5.0, 12.0)]),
            uniform: trajectory(&[(0.0, 0.0, 10.0), (1.0, 3.0, 11.0)]),
            universal: trajectory(&[(0.0, 0.0, 10.0), (1.0, 3.5, 11.5)]),
            zero_ideal: trajectory(&[(0.0, 0.0, 10.0), (1.0, 5.1, 12.1)]),
            uniform_ideal: trajectory(&[(0.0, 0.0, 10.0), (1.0, 3.1, 11.1)]),
        }
    }

    #[test]
    fn test_trajectory_accessors() {
        let t = trajectory(&[(0.0, 1.0, 2.0), (1.0, 3.0, 4.0)]);
        assert_eq!(t.len(), 2);
        assert!(!t.is_empty());
        assert_eq!(t.first().map(|p| p.velocity), Some(1.0));
        assert_eq!(t.last().map(|p| p.position), Some(4.0));
        assert!(Trajectory::default().is_empty());
    }

    #[test]
    fn test_bundle_iterates_in_fixed_order() {
        let names: Vec<_> = bundle().iter().map(|(kind, _)| kind.name()).collect();
        assert_eq!(
            names,
            vec!["zero", "uniform", "universal", "zero_ideal", "uniform_ideal"]
        );
    }

    #[test]
    fn test_difference_between_models() {
        let diff = bundle().difference(TrajectoryKind::Uniform, TrajectoryKind::Universal);
        assert_eq!(diff.len(), 2);
        assert_eq!(diff[0].velocity, 0.0);
        assert_eq!(diff[1].time, 1.0);
        assert_eq!(diff[1].velocity, 0.5);
        assert_eq!(diff[1].position, 0.5);
    }

    #[test]
    fn test_analytical_kinds() {
        let analytical: Vec<_> = TrajectoryKind::ALL
            .into_iter()
            .filter(|kind| kind.is_analytical())
            .collect();
        assert_eq!(
            analytical,
            vec![TrajectoryKind::ZeroIdeal, TrajectoryKind::UniformIdeal]
        );
    }

    #[test]
    fn test_bundle_serializes_with_model_names() {
        let json = serde_json::to_value(bundle()).unwrap();
        for kind in TrajectoryKind::ALL {
            assert_eq!(json[kind.name()].as_array().map(|a| a.len()), Some(2));
        }
        assert_eq!(json["zero"][1]["velocity"], 5.0);
    }
}
