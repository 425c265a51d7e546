//! Geometry of **roller-type cycloidal reducers**: the internal profile of the
//! rigid gear and a consistent layout of fastener holes on its body.
//!
//! A run starts from a handful of [`GearParameters`] (ratio, roller size, root
//! radius, housing diameter) and produces a [`GearLayout`]:
//!
//! 1. a roller-fit gate rejects ratios that cannot fit their rollers,
//! 2. the rigid-gear profile is sampled from its closed-form equation,
//! 3. the thinnest wall between profile and housing fixes the hole band,
//! 4. the profile valleys anchor a one-degree rotation search for the
//!    mounting holes (group A),
//! 5. the motor-shroud holes (group B) follow the same rotation and step
//!    aside from group A where they would collide.
//!
//! ```
//! use rollergear::{GearLayout, GearParameters, LayoutOptions};
//!
//! let params = GearParameters::default();
//! let layout = GearLayout::compute(&params, &LayoutOptions::default()).unwrap();
//! assert_eq!(layout.motor.len(), 4);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): flat `.dxf` drawing of a layout
//! - **svg-io**: flat `.svg` drawing of a layout
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for the hole rotation search

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod holes;
pub mod io;
pub mod layout;
pub mod params;
pub mod profile;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{GeometryError, GeometryResult};
pub use layout::{GearLayout, LayoutOptions};
pub use params::GearParameters;
pub use profile::ProfileCurve;
