use crate::core::models::profile::{FreeEnergyProfile, ProfilePoint};
use thiserror::Error;

/// A located extremum of a free-energy profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationaryPoint {
    pub index: usize,
    pub coordinate: f64,
    pub free_energy: f64,
}

impl StationaryPoint {
    fn at(points: &[ProfilePoint], index: usize) -> Self {
        Self {
            index,
            coordinate: points[index].coordinate,
            free_energy: points[index].free_energy,
        }
    }
}

/// Folding and unfolding barriers of a two-state landscape, in kJ/mol.
///
/// Each barrier is measured from its own basin: `folding` from the basin nearest `x = 0`
/// (unfolded), `unfolding` from the basin nearest `x = 1` (folded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrierPair {
    pub folding: f64,
    pub unfolding: f64,
    pub unfolded_basin: StationaryPoint,
    pub transition_state: StationaryPoint,
    pub folded_basin: StationaryPoint,
}

impl BarrierPair {
    /// Free energy of the folded basin relative to the unfolded basin. Negative values mean
    /// the folded state is the more stable one.
    pub fn stability(&self) -> f64 {
        self.folded_basin.free_energy - self.unfolded_basin.free_energy
    }
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum BarrierError {
    #[error("the free-energy profile has no interior maximum, so there is no two-state landscape")]
    NoInteriorMaximum,

    #[error("the highest interior peak (x = {coordinate:.3}) does not rise above both basins")]
    NoBarrier { coordinate: f64 },
}

/// Locates both basins and the transition state of `profile` and measures the two barriers.
///
/// The transition state is the interior local maximum with the highest free energy; on
/// exact ties the sample closest to `x = 0.5` wins, then the lower index. The unfolded and
/// folded basins are the lowest samples to the left and to the right of it, ties going to
/// the sample closest to the respective end of the profile.
pub fn extract(profile: &FreeEnergyProfile) -> Result<BarrierPair, BarrierError> {
    let points = profile.points();
    let last = points.len() - 1;

    let ts = find_transition_state(points).ok_or(BarrierError::NoInteriorMaximum)?;
    let unfolded = lowest_toward_start(points, 0, ts);
    let folded = lowest_toward_end(points, ts + 1, last);

    let peak = points[ts].free_energy;
    let folding = peak - points[unfolded].free_energy;
    let unfolding = peak - points[folded].free_energy;
    if folding <= 0.0 || unfolding <= 0.0 {
        return Err(BarrierError::NoBarrier {
            coordinate: points[ts].coordinate,
        });
    }

    Ok(BarrierPair {
        folding,
        unfolding,
        unfolded_basin: StationaryPoint::at(points, unfolded),
        transition_state: StationaryPoint::at(points, ts),
        folded_basin: StationaryPoint::at(points, folded),
    })
}

fn find_transition_state(points: &[ProfilePoint]) -> Option<usize> {
    let last = points.len() - 1;
    let mut best: Option<usize> = None;

    for i in 1..last {
        let g = points[i].free_energy;
        if g < points[i - 1].free_energy || g < points[i + 1].free_energy {
            continue;
        }
        best = match best {
            Some(b) => {
                let gb = points[b].free_energy;
                let closer = midpoint_distance(i, last) < midpoint_distance(b, last);
                if g > gb || (g == gb && closer) {
                    Some(i)
                } else {
                    Some(b)
                }
            }
            None => Some(i),
        };
    }
    best
}

/// Twice the index distance to the middle of the profile, kept integral so that ties are
/// decided exactly.
#[inline]
fn midpoint_distance(index: usize, last: usize) -> usize {
    (2 * index).abs_diff(last)
}

/// Lowest sample in `start..end`, ties going to the smallest index.
fn lowest_toward_start(points: &[ProfilePoint], start: usize, end: usize) -> usize {
    let mut best = start;
    for i in start + 1..end {
        if points[i].free_energy < points[best].free_energy {
            best = i;
        }
    }
    best
}

/// Lowest sample in `start..=end`, ties going to the largest index.
fn lowest_toward_end(points: &[ProfilePoint], start: usize, end: usize) -> usize {
    let mut best = start;
    for i in start + 1..=end {
        if points[i].free_energy <= points[best].free_energy {
            best = i;
        }
    }
    best
}
