//! Fill level geometry for liquid storage tanks.
//!
//! [`cylinder`] holds the closed-form formulas for a horizontal cylinder on
//! plain centimetre and litre values. [`CylindricalTank`] wraps them behind the
//! [`Tank`] trait using typed [`measurements`] units.

pub mod cylinder;
mod cylindrical_tank;
mod level;
mod tank;

pub use cylindrical_tank::CylindricalTank;
pub use level::Level;
pub use tank::Tank;
