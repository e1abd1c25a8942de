//! Department choropleth for villemeteo.
//!
//! Map path ids are numeric and contiguous: Corsica's two departments take
//! ids 20 and 21, so every numeric department code from 21 upwards sits one
//! id higher than its code.

pub mod band;
pub mod department;
pub mod population;
pub mod recolor;
pub mod surface;

pub use band::{band, ColorTier, FillColor};
pub use department::normalize_department_code;
pub use population::{DepartmentPopulation, PopulationError, PopulationTable};
pub use recolor::{apply, recolor};
pub use surface::{MapSurface, SvgError, SvgMap, DEFAULT_PATH_IDS};
