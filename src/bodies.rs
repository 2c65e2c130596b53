use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// Central body registry
// ---------------------------------------------------------------------------

/// Body-fixed reference frame, one per supported central body.
///
/// Resolved to a rotation purely by the owning body's spin rate; there is
/// no precession, nutation, or polar motion in this model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFixedFrame {
    EarthFixed,
    MoonFixed,
    MarsFixed,
}

/// Physical constants for a central body.
///
/// Units: km, km^3/s^2, rad/s. All propagation and frame math takes one of
/// these by reference; nothing reads an ambient "current body".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralBody {
    pub name: &'static str,
    pub mu: f64,       // gravitational parameter, km^3/s^2
    pub radius: f64,   // equatorial radius, km
    pub omega: f64,    // spin rate about the polar axis, rad/s
    pub frame: BodyFixedFrame,
}

pub const EARTH: CentralBody = CentralBody {
    name: "Earth",
    mu: 3.9860043543609598E+05,
    radius: 6378.0,
    // sidereal day: 23h 56m 4s
    omega: 2.0 * PI / 86164.0,
    frame: BodyFixedFrame::EarthFixed,
};

pub const MOON: CentralBody = CentralBody {
    name: "Moon",
    mu: 4.9028000661637961E+03,
    radius: 1737.1,
    omega: PI / (27.0 * 12.0 * 3600.0),
    frame: BodyFixedFrame::MoonFixed,
};

pub const MARS: CentralBody = CentralBody {
    name: "Mars",
    mu: 4.282837362069909E+04,
    radius: 3389.5,
    omega: PI / (12.3 * 3600.0),
    frame: BodyFixedFrame::MarsFixed,
};

pub const ALL_BODIES: [&CentralBody; 3] = [&EARTH, &MOON, &MARS];

impl CentralBody {
    /// Look up a body by name, case-insensitive. Returns `None` for
    /// anything outside the fixed three-body registry.
    pub fn from_name(name: &str) -> Option<&'static CentralBody> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }
}
