use lazy_static::lazy_static;
use url::Url;

pub const CURRENT_TRACK_PATH: &str = "v1/current-track";

lazy_static! {
    pub static ref DEFAULT_API_URL: Url =
        Url::parse("http://127.0.0.1:8080/api/").expect("DEFAULT_API_URL parse failed");
}
