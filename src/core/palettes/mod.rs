//! Ready-made palette functions for hosts that do not supply their own.

pub mod blue_white_gradient;
pub mod errors;
pub mod factory;
pub mod fire_gradient;
pub mod kinds;
