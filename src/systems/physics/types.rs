/// Counters from one integration pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegrateStats {
    /// Active slots advanced this pass
    pub processed: u32,
    /// Slots that rolled off the floor at a side wall
    pub deactivated: u32,
}

/// Counters from one collision pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_tested: u32,
    /// Overlapping pairs skipped because they are already moving apart
    pub separating: u32,
    pub resolved: u32,
}

/// What happened to a single pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    /// Centres at least one radius apart
    Apart,
    /// Overlapping, but next step's distance is larger
    Separating,
    /// Exactly coincident centres - no line of centres to push along
    Coincident,
    Resolved,
}
