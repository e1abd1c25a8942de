//! Choropleth fill computation.

use std::collections::{BTreeMap, HashSet};

use crate::band::{band, FillColor};
use crate::department::normalize_department_code;
use crate::population::PopulationTable;
use crate::surface::MapSurface;

/// Compute the fill of every path.
///
/// Each path starts white, takes its population tier color when the table has
/// an entry for it, and is forced to black when one of
/// `active_department_codes` (raw codes from the current search) normalizes
/// to its id. Codes that do not normalize are ignored.
pub fn recolor<P, S>(
    path_ids: P,
    population: &PopulationTable,
    active_department_codes: &[S],
) -> BTreeMap<u32, FillColor>
where
    P: IntoIterator<Item = u32>,
    S: AsRef<str>,
{
    let active: HashSet<u32> = active_department_codes
        .iter()
        .filter_map(|code| normalize_department_code(code.as_ref()))
        .collect();

    path_ids
        .into_iter()
        .map(|id| {
            let mut fill = FillColor::White;
            if let Some(entry) = population.for_path_id(id) {
                fill = band(entry.population).fill();
            }
            if active.contains(&id) {
                fill = FillColor::Black;
            }
            (id, fill)
        })
        .collect()
}

/// Push computed fills onto a rendering surface.
pub fn apply<M: MapSurface + ?Sized>(surface: &mut M, fills: &BTreeMap<u32, FillColor>) {
    for (&id, &fill) in fills {
        surface.set_fill(id, fill);
    }
    tracing::debug!("Applied {} fills to map surface", fills.len());
}
