#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMetadata<C> {
    pub num_nodes_visited: usize,
    pub cost: C,
    /// Number of coordinates in the path, counting both endpoints.
    pub length: usize,
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeMetadata {
    pub num_nodes_visited: usize,
}
