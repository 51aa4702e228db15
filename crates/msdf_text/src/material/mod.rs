//! Distance-field shading model
//!
//! The style-derived uniform set a host material system consumes
//! ([`TextMaterialParams`]) and the per-pixel MSDF coverage math it
//! evaluates ([`shade`] and friends). Shading is independent of layout:
//! every parameter takes effect without a geometry rebuild.

pub mod params;
pub mod shading;

pub use params::*;
pub use shading::*;
