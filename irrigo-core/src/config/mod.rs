//! Persistent parameters
//!
//! The controller keeps its calibration, alarm time, and phase durations
//! in a flat fixed-offset image. [`Param`] names each field and its
//! location, [`ParameterStore`] is the get/set seam the core reads
//! through, and [`Parameters`] is a plain in-memory snapshot.

pub mod layout;
pub mod params;
pub mod store;

pub use layout::{Param, PARAMS_SIZE};
pub use params::Parameters;
pub use store::{ParamError, ParameterStore};
