#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch a queue snapshot now, outside the regular poll cadence.
    FetchQueue,
    /// Tell the organizer service to rescan its watched folders.
    DispatchRescan,
    /// Arm the settle timer that ends the scanning indicator.
    ScheduleSettle,
}
