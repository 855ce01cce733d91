use crate::api::NowPlayingClient;
use crate::constants::{CURRENT_TRACK_PATH, DEFAULT_API_URL};
use crate::runtime::{Env, TryEnvFuture};
use crate::types::track::CurrentlyPlaying;
use http::Request;
use std::marker::PhantomData;
use tracing::trace;
use url::Url;

pub struct HTTPClient<E: Env> {
    base_url: Url,
    env: PhantomData<E>,
}

impl<E: Env> HTTPClient<E> {
    pub fn new(base_url: Url) -> Self {
        HTTPClient {
            base_url,
            env: PhantomData,
        }
    }
}

impl<E: Env> Default for HTTPClient<E> {
    fn default() -> Self {
        HTTPClient::new(DEFAULT_API_URL.to_owned())
    }
}

impl<E> NowPlayingClient for HTTPClient<E>
where
    E: Env + Send + Sync + 'static,
{
    fn get_current_track(&self) -> TryEnvFuture<CurrentlyPlaying> {
        let url = self
            .base_url
            .join(CURRENT_TRACK_PATH)
            .expect("url builder failed");
        trace!("fetching current track from {url}");
        let request = Request::get(url.as_str())
            .body(())
            .expect("request builder failed");
        E::fetch::<_, _>(request)
    }
}
