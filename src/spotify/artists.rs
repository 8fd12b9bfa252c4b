use reqwest::Client;

use crate::{config::Settings, errors::UpstreamError, types::TopArtistsResponse, utils};

pub const TOP_ARTISTS_TIME_RANGE: &str = "medium_term";
pub const TOP_ARTISTS_LIMIT: u32 = 20;

/// Retrieves the names of the user's top artists.
///
/// Calls `GET /me/top/artists` for the medium-term time range (roughly the
/// last six months) and keeps Spotify's ranking order.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `settings` - Holds the Web API base URL
/// * `token` - Valid access token with the `user-top-read` scope
///
/// # Returns
///
/// - `Ok(Vec<String>)` - Artist names, possibly empty for a fresh account
/// - `Err(UpstreamError)` - Network error, non-2xx reply or undecodable body
///
/// # Example
///
/// ```
/// let artists = get_top_artists(&client, &settings, "BQC...").await?;
/// ```
pub async fn get_top_artists(
    client: &Client,
    settings: &Settings,
    token: &str,
) -> Result<Vec<String>, UpstreamError> {
    let api_url = format!(
        "{uri}/me/top/artists",
        uri = settings.spotify_api_url.trim_end_matches('/')
    );

    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[
            ("time_range", TOP_ARTISTS_TIME_RANGE.to_string()),
            ("limit", TOP_ARTISTS_LIMIT.to_string()),
        ])
        .send()
        .await?;

    let res = utils::ensure_success(res)
        .await?
        .json::<TopArtistsResponse>()
        .await?;

    Ok(res.items.into_iter().map(|artist| artist.name).collect())
}
