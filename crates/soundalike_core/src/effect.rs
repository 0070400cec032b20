use crate::FetchGeneration;

/// Side effects requested by the pure update function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Issue the outbound metadata request for the given fetch cycle.
    /// The request descriptor itself is owned by the platform layer.
    IssueFetch { generation: FetchGeneration },
}
