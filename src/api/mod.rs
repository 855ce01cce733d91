use crate::runtime::TryEnvFuture;
use crate::types::track::CurrentlyPlaying;

mod http_client;
pub use http_client::*;

/// The remote collaborator this layer fetches the current track from.
/// Injected into the action creators; this crate never holds a singleton.
pub trait NowPlayingClient: Send + Sync {
    fn get_current_track(&self) -> TryEnvFuture<CurrentlyPlaying>;
}
