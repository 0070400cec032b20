use serde::Deserialize;

use crate::{ArtistRecord, FailureKind, FetchError};

/// Index of the image variant shown on cards ("extralarge" in practice).
pub const IMAGE_VARIANT_INDEX: usize = 3;

#[derive(Debug, Deserialize)]
struct SimilarArtistsBody {
    similarartists: Option<SimilarArtists>,
}

#[derive(Debug, Deserialize)]
struct SimilarArtists {
    #[serde(default)]
    artist: Vec<WireArtist>,
}

#[derive(Debug, Deserialize)]
struct WireArtist {
    name: String,
    url: String,
    /// MusicBrainz id; the service leaves it blank for some artists.
    #[serde(default)]
    mbid: String,
    #[serde(default)]
    image: Vec<WireImage>,
}

#[derive(Debug, Deserialize)]
struct WireImage {
    #[serde(rename = "#text")]
    url: String,
}

/// Decodes a success body. A missing collection field or an empty artist
/// array is the empty-result condition, reported as `Ok` with an empty
/// list rather than as a parse failure.
pub fn decode_artists(bytes: &[u8]) -> Result<Vec<ArtistRecord>, FetchError> {
    let body: SimilarArtistsBody = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))?;
    let Some(collection) = body.similarartists else {
        return Ok(Vec::new());
    };
    Ok(collection.artist.into_iter().map(into_record).collect())
}

fn into_record(artist: WireArtist) -> ArtistRecord {
    ArtistRecord {
        image_url: select_image(&artist.image),
        id: artist.mbid,
        name: artist.name,
        url: artist.url,
    }
}

/// Deterministic variant selection: the preferred index, else the last
/// variant the service sent, else an empty URL.
fn select_image(variants: &[WireImage]) -> String {
    variants
        .get(IMAGE_VARIANT_INDEX)
        .or_else(|| variants.last())
        .map(|variant| variant.url.clone())
        .unwrap_or_default()
}
