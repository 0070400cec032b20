use crate::pagination::PageToken;
use crate::Theme;

/// The mutually exclusive render states: exactly one of these is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewContent {
    #[default]
    Loading,
    Error {
        message: String,
        status: Option<u16>,
    },
    /// Valid response with no entities; rendered as a message, not a grid.
    Empty,
    Grid {
        cards: Vec<ArtistCardView>,
        strip: PageStrip,
    },
}

/// One grid card, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistCardView {
    pub key: String,
    pub name: String,
    pub url: String,
    pub image_url: String,
}

/// The page-control strip for the current render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStrip {
    pub tokens: Vec<PageToken>,
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub content: ViewContent,
    pub theme: Theme,
    pub dirty: bool,
}
