//! Device-index propagation along the runner pipeline

use super::RunnerKind;
use crate::error::{Error, Result};

/// Resolve the device index for one pipeline entry.
///
/// An explicitly configured index always wins and is never overwritten;
/// for a device runner it must be non-negative.
/// Otherwise a device runner takes the previous runner's index incremented
/// by one, and the phy takes it unchanged (it shares index space with its
/// neighbour rather than consuming a slot). A device runner with no
/// resolved predecessor is a configuration-sequencing error, not something
/// recovered automatically.
///
/// The phy is the only variant allowed to come out of this step still
/// unresolved; the pipeline then assigns it the sentinel slot.
pub fn resolve_index(
    kind: RunnerKind,
    explicit: Option<i64>,
    previous: Option<i64>,
) -> Result<Option<i64>> {
    if let Some(index) = explicit {
        // The -1 sentinel slot is reserved for the phy; a device process
        // must occupy a real slot the phy can address
        if kind.is_device() && index < 0 {
            return Err(Error::InvalidDeviceIndex {
                runner: kind.name(),
                index,
            });
        }
        return Ok(explicit);
    }

    match kind {
        RunnerKind::Device | RunnerKind::Zephyr => match previous {
            Some(prev) => Ok(Some(prev + 1)),
            None => Err(Error::UnresolvedPredecessor {
                runner: kind.name(),
            }),
        },
        RunnerKind::Phy => Ok(previous),
    }
}
