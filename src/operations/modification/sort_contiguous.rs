use tracing::{debug, warn};

use crate::error::{OperationError, Result};
use crate::geometry::curve::{AnyCurve, Curve};
use crate::math::{Point3, CONTIGUOUS_TOLERANCE};

/// Reorders curves in place so that each one starts where the previous
/// one ends, reversing curves that run the wrong way.
///
/// The first curve anchors the chain and is never moved or reversed.
pub struct SortContiguous {
    tolerance: f64,
}

impl Default for SortContiguous {
    fn default() -> Self {
        Self::new(CONTIGUOUS_TOLERANCE)
    }
}

impl SortContiguous {
    /// Creates a sorter that joins end points closer than `tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Executes the sort.
    ///
    /// For each position the remaining curves are scanned in order. A curve
    /// whose start meets the current end is swapped into the next slot; a
    /// curve whose end meets it is reversed first, and the curve it
    /// displaces takes its old slot.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::NonContiguous`] naming the curve whose end
    /// nothing continues; the slice is left partially sorted. Returns
    /// [`OperationError::Unsupported`] if a curve that needs reversing
    /// cannot be reversed.
    pub fn execute(&self, curves: &mut [AnyCurve]) -> Result<()> {
        let n = curves.len();
        for i in 0..n.saturating_sub(1) {
            let end = curves[i].end_point();
            let mut found = false;
            for j in i + 1..n {
                if self.meets(&curves[j].start_point(), &end) {
                    curves.swap(i + 1, j);
                    found = true;
                    break;
                }
                if self.meets(&curves[j].end_point(), &end) {
                    debug!(index = j, position = i + 1, "reversing curve to continue chain");
                    let reversed = curves[j].reversed()?;
                    curves.swap(i + 1, j);
                    curves[i + 1] = reversed;
                    found = true;
                    break;
                }
            }
            if !found {
                warn!(index = i, count = n, "curves are not contiguous");
                return Err(OperationError::NonContiguous { index: i }.into());
            }
        }
        Ok(())
    }

    fn meets(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() <= self.tolerance
    }
}
