use crate::{Artist, ErrorInfo, FetchGeneration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view came on screen; starts a new fetch cycle unless one is
    /// already in flight.
    ViewMounted,
    /// The view was destroyed; later fetch resolutions must not be applied.
    ViewUnmounted,
    /// The outbound request for `generation` resolved.
    FetchResolved {
        generation: FetchGeneration,
        result: Result<Vec<Artist>, ErrorInfo>,
    },
    /// User asked for a specific page in the control strip.
    PageRequested(usize),
    /// User clicked the light/dark toggle.
    ThemeToggleClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
