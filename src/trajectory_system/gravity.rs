#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityModel {
    Zero,
    Uniform, // evaluated at the launch radius, never updated
    Universal,
}

impl GravityModel {
    pub const ALL: [GravityModel; 3] = [
        GravityModel::Zero,
        GravityModel::Uniform,
        GravityModel::Universal,
    ];

    // mu = G * m_e
    pub fn force(&self, mu: f64, launch_radius: f64, total_mass: f64, position: f64) -> f64 {
        match self {
            GravityModel::Zero => 0.0,
            GravityModel::Uniform => mu * total_mass / (launch_radius * launch_radius),
            GravityModel::Universal => mu * total_mass / (position * position),
        }
    }
}
