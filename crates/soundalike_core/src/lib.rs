//! Soundalike core: pure fetch state machine and pagination engine.
mod artist;
mod effect;
mod msg;
mod pagination;
mod state;
mod update;
mod view_model;

pub use artist::Artist;
pub use effect::Effect;
pub use msg::Msg;
pub use pagination::{
    compute_window, page_slice, resolve_page_request, total_pages, PageToken, WINDOW_RADIUS,
};
pub use state::{AppState, ErrorInfo, FetchGeneration, FetchState, Theme, ITEMS_PER_PAGE};
pub use update::update;
pub use view_model::{AppViewModel, ArtistCardView, PageStrip, ViewContent};
