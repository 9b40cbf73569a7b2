// #![deny(missing_docs)]

//! Content-aware narrowing of RGBA images by repeatedly removing the
//! cheapest vertical seam under a Laplacian energy map.

#[macro_use]
mod ternary;

pub mod costtable;
pub mod dump;
pub mod energy;
pub mod error;
pub mod luminance;
pub mod pixels;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;
#[cfg(feature = "threaded")]
pub mod worker;

pub use costtable::CostTable;
pub use dump::energy_to_image;
pub use energy::{calculate_energy, EnergyModel};
pub use error::CarveError;
pub use luminance::luminance;
pub use pixels::RgbaBuffer;
pub use seamcarver::{carve, carve_cancellable, seamcarve, CarveOptions, Carved, SeamCarver};
pub use seamfinder::{LaplacianSeams, SeamFinder};
pub use twodmap::TwoDimensionalMap;
#[cfg(feature = "threaded")]
pub use worker::CarveWorker;
