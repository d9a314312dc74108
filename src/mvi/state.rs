//! Base trait for slice state in MVI architecture.

/// Marker trait for slice state objects.
///
/// States should be:
/// - Plain data (Clone to hand out snapshots)
/// - Self-contained (all data a view needs)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (the value a slice starts from and resets to)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
