//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing a refresh of some externally owned data.
#[derive(Clone, Copy, Debug)]
pub struct Refresh;
