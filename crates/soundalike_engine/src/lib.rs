//! Soundalike engine: request construction, HTTP fetch, and wire decoding.
mod decode;
mod engine;
mod fetch;
mod request;
mod types;

pub use decode::{decode_artists, IMAGE_VARIANT_INDEX};
pub use engine::EngineHandle;
pub use fetch::{ArtistFetcher, FetchSettings, ReqwestFetcher};
pub use request::{RequestDescriptor, DEFAULT_ENDPOINT};
pub use types::{ArtistRecord, EngineEvent, FailureKind, FetchError, FetchGeneration};
