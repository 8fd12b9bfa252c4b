use chrono::TimeDelta;
use lyricquiz::session::{MemorySessionStore, SESSION_COOKIE_NAME, SessionStore, session_cookie};
use lyricquiz::types::Session;

fn logged_in(artists: &[&str]) -> Session {
    Session {
        access_token: Some("access".to_string()),
        refresh_token: Some("refresh".to_string()),
        top_artists: Some(artists.iter().map(|a| a.to_string()).collect()),
    }
}

#[tokio::test]
async fn test_get_set_destroy() {
    let store = MemorySessionStore::new();
    assert!(store.get("missing").await.is_none());

    store.set("abc", logged_in(&["A", "B"])).await;
    assert_eq!(store.get("abc").await, Some(logged_in(&["A", "B"])));
    assert_eq!(store.len().await, 1);

    // set replaces the whole session
    store.set("abc", Session::default()).await;
    assert_eq!(store.get("abc").await, Some(Session::default()));

    store.destroy("abc").await;
    assert!(store.get("abc").await.is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let store = MemorySessionStore::new();
    store.set("one", logged_in(&["A"])).await;
    store.set("two", logged_in(&["B"])).await;

    store.destroy("one").await;

    assert!(store.get("one").await.is_none());
    assert_eq!(store.get("two").await, Some(logged_in(&["B"])));
}

#[tokio::test]
async fn test_expired_sessions_are_dropped() {
    let store = MemorySessionStore::with_ttl(TimeDelta::zero());
    store.set("abc", logged_in(&["A", "B"])).await;

    assert!(store.get("abc").await.is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_long_ttl_keeps_sessions() {
    let store = MemorySessionStore::from_ttl_secs(Some(3600));
    store.set("abc", logged_in(&["A", "B"])).await;

    assert!(store.get("abc").await.is_some());
    // Reading refreshes the idle timer, so a second read still hits
    assert!(store.get("abc").await.is_some());
}

#[test]
fn test_session_cookie_attributes() {
    let cookie = session_cookie("abc", true);

    assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    // Browser-session cookie
    assert!(cookie.max_age().is_none());
}
