/// One entry in the fetched similar-artists list. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Stable upstream identifier (an MBID). May be blank.
    pub id: String,
    pub name: String,
    /// External detail-page link.
    pub url: String,
    /// One deterministically selected image variant.
    pub image_url: String,
}

impl Artist {
    /// Rendering key for a card. The upstream id may be blank or repeated,
    /// so the positional index keeps keys unique within a page.
    pub fn render_key(&self, index: usize) -> String {
        format!("{}-{}", self.id, index)
    }
}
