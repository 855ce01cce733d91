use crate::api::NowPlayingClient;
use crate::models::common::{with_fetch_state, FetchState};
use crate::runtime::{Dispatchable, Env, Thunk};
use crate::types::track::{CurrentlyPlaying, Track};
use serde::Serialize;
use std::sync::Arc;

#[derive(Default, Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTrack {
    pub track: Option<Track>,
    pub is_playing: bool,
    pub fetch_state: FetchState,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum CurrentTrackAction {
    SetCurrentTrack(CurrentlyPlaying),
    SetCurrentTrackFetchState(FetchState),
}

pub fn set_current_track(playing: CurrentlyPlaying) -> CurrentTrackAction {
    CurrentTrackAction::SetCurrentTrack(playing)
}

pub fn set_current_track_fetch_state(fetch_state: FetchState) -> CurrentTrackAction {
    CurrentTrackAction::SetCurrentTrackFetchState(fetch_state)
}

pub fn reduce(state: &CurrentTrack, action: &CurrentTrackAction) -> CurrentTrack {
    match action {
        CurrentTrackAction::SetCurrentTrack(playing) => CurrentTrack {
            track: Some(playing.track.to_owned()),
            is_playing: playing.is_playing,
            fetch_state: state.fetch_state.to_owned(),
        },
        CurrentTrackAction::SetCurrentTrackFetchState(fetch_state) => CurrentTrack {
            fetch_state: fetch_state.to_owned(),
            ..state.to_owned()
        },
    }
}

/// Fetches the currently playing track through the injected client, exactly
/// one client call per thunk. On success dispatches [`set_current_track`]
/// followed by the `Success` fetch-state; a client failure ends up in
/// [`FetchState::Err`] and nothing else is dispatched. Generic over the state
/// type, so any reducer folding [`CurrentTrackAction`] can host it.
pub fn get_current_track_async<E, S>(
    client: Arc<dyn NowPlayingClient>,
) -> Thunk<E, S, CurrentTrackAction>
where
    E: Env + Send + 'static,
    S: Send + Sync + 'static,
{
    with_fetch_state(set_current_track_fetch_state, move |store| async move {
        let playing = client.get_current_track().await?;
        store
            .dispatch(Dispatchable::Action(set_current_track(playing)))
            .await?;
        Ok(())
    })
}
