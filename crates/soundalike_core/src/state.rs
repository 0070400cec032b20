use crate::pagination::{self, WINDOW_RADIUS};
use crate::view_model::{AppViewModel, ArtistCardView, PageStrip, ViewContent};
use crate::Artist;

/// Counter distinguishing fetch cycles; resolutions from an older cycle
/// are dropped.
pub type FetchGeneration = u64;

/// Grid page size, fixed for the session.
pub const ITEMS_PER_PAGE: usize = 6;

/// What went wrong with a fetch, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
    pub status: Option<u16>,
}

/// Lifecycle of the single outbound request. Exactly one variant holds at
/// any time; `Success` and `Failure` are terminal for a fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Artist>),
    Failure(ErrorInfo),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    fetch: FetchState,
    generation: FetchGeneration,
    mounted: bool,
    current_page: usize,
    items_per_page: usize,
    theme: Theme,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            fetch: FetchState::Idle,
            generation: 0,
            mounted: false,
            current_page: 1,
            items_per_page: ITEMS_PER_PAGE,
            theme: Theme::default(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items_per_page(items_per_page: usize) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            ..Self::default()
        }
    }

    pub fn fetch(&self) -> &FetchState {
        &self.fetch
    }

    pub fn generation(&self) -> FetchGeneration {
        self.generation
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Starts a new fetch cycle: bumps the generation and moves to
    /// `Loading` before the request is issued.
    pub(crate) fn begin_fetch(&mut self) -> FetchGeneration {
        self.generation += 1;
        self.fetch = FetchState::Loading;
        self.mounted = true;
        self.current_page = 1;
        self.dirty = true;
        self.generation
    }

    pub(crate) fn set_unmounted(&mut self) {
        self.mounted = false;
    }

    pub(crate) fn resolve_success(&mut self, artists: Vec<Artist>) {
        self.fetch = FetchState::Success(artists);
        self.current_page = 1;
        self.dirty = true;
    }

    pub(crate) fn resolve_failure(&mut self, info: ErrorInfo) {
        self.fetch = FetchState::Failure(info);
        self.dirty = true;
    }

    /// Applies a page-change request; out-of-range requests are no-ops.
    pub(crate) fn request_page(&mut self, requested: usize) {
        let FetchState::Success(artists) = &self.fetch else {
            return;
        };
        let total = pagination::total_pages(artists.len(), self.items_per_page);
        let resolved = pagination::resolve_page_request(self.current_page, requested, total);
        if resolved != self.current_page {
            self.current_page = resolved;
            self.dirty = true;
        }
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.dirty = true;
    }

    /// Projects the state into its renderable form. The page window is
    /// recomputed here on every call, never stored.
    pub fn view(&self) -> AppViewModel {
        let content = match &self.fetch {
            FetchState::Idle | FetchState::Loading => ViewContent::Loading,
            FetchState::Failure(info) => ViewContent::Error {
                message: info.message.clone(),
                status: info.status,
            },
            FetchState::Success(artists) if artists.is_empty() => ViewContent::Empty,
            FetchState::Success(artists) => {
                let total = pagination::total_pages(artists.len(), self.items_per_page);
                let start = (self.current_page - 1) * self.items_per_page;
                let cards = pagination::page_slice(artists, self.current_page, self.items_per_page)
                    .iter()
                    .enumerate()
                    .map(|(offset, artist)| ArtistCardView {
                        key: artist.render_key(start + offset),
                        name: artist.name.clone(),
                        url: artist.url.clone(),
                        image_url: artist.image_url.clone(),
                    })
                    .collect();
                let strip = PageStrip {
                    tokens: pagination::compute_window(self.current_page, total, WINDOW_RADIUS),
                    current_page: self.current_page,
                    total_pages: total,
                    prev_enabled: self.current_page > 1,
                    next_enabled: self.current_page < total,
                };
                ViewContent::Grid { cards, strip }
            }
        };
        AppViewModel {
            content,
            theme: self.theme,
            dirty: self.dirty,
        }
    }
}
