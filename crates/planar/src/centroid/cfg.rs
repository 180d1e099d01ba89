//! Configuration for the centroid core.
//!
//! Policy
//! - One knob only: where the shoelace sums are anchored. The default is the
//!   first vertex of each ring, which keeps results exact for small shapes far
//!   from the origin (e.g. Web-Mercator meters).

/// Translation origin used before shoelace summation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Recenter {
    /// Anchor each ring at its first vertex.
    #[default]
    FirstVertex,
    /// Anchor each ring at the center of its bounding box (one extra pass).
    BoundCenter,
    /// Sum raw coordinates. Loses precision at large offsets.
    Off,
}

/// Centroid core configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CentroidCfg {
    pub recenter: Recenter,
}

impl CentroidCfg {
    #[inline]
    pub fn with_recenter(recenter: Recenter) -> Self {
        Self { recenter }
    }
}
