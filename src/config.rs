#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeConfig<Cost> {
    pub max_cost: Cost,
    pub include_start: bool,
}

impl<Cost> RangeConfig<Cost> {
    pub fn new(max_cost: Cost) -> Self {
        Self {
            max_cost,
            include_start: false,
        }
    }

    /// Also report the start cell, at zero cost.
    pub fn with_start(self) -> Self {
        Self {
            include_start: true,
            ..self
        }
    }
}
