//! HTTP transport tests against a local mock server

use mockito::Matcher;
use pmoyoutube::{ChannelLookup, Error, SearchKind, YouTubeClient};

async fn client_for(server: &mockito::ServerGuard) -> YouTubeClient {
    YouTubeClient::builder()
        .base_url(server.url())
        .api_key("test-key")
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_playlist_items_query_and_decoding() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/youtube/v3/playlistItems")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("part".into(), "snippet".into()),
            Matcher::UrlEncoded("playlistId".into(), "UU123".into()),
            Matcher::UrlEncoded("maxResults".into(), "50".into()),
            Matcher::UrlEncoded("key".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "nextPageToken": "CAUQAA",
                "items": [{
                    "id": "item-1",
                    "snippet": {
                        "title": "First upload",
                        "channelId": "UC123",
                        "resourceId": {"kind": "youtube#video", "videoId": "abcdefghijk"}
                    }
                }]
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client.playlist_items("UU123", None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.next_page_token.as_deref(), Some("CAUQAA"));
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].title(), Some("First upload"));
    assert_eq!(response.items[0].video_id(), Some("abcdefghijk"));
}

#[tokio::test]
async fn test_playlist_items_forwards_page_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/youtube/v3/playlistItems")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("playlistId".into(), "UU123".into()),
            Matcher::UrlEncoded("pageToken".into(), "CAUQAA".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client.playlist_items("UU123", Some("CAUQAA")).await.unwrap();

    mock.assert_async().await;
    assert!(response.items.is_empty());
    assert!(response.next_page_token.is_none());
}

#[tokio::test]
async fn test_channels_by_handle() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/youtube/v3/channels")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("part".into(), "snippet,contentDetails".into()),
            Matcher::UrlEncoded("forHandle".into(), "@somechannel".into()),
            Matcher::UrlEncoded("hl".into(), "en".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "items": [{
                    "id": "UC123",
                    "snippet": {"title": "Some Channel", "customUrl": "@somechannel"},
                    "contentDetails": {"relatedPlaylists": {"uploads": "UU123"}}
                }]
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .channels(ChannelLookup::Handle("@somechannel"), "en")
        .await
        .unwrap();

    mock.assert_async().await;
    let channel = &response.items[0];
    assert_eq!(channel.id.as_deref(), Some("UC123"));
    assert_eq!(channel.uploads_playlist(), Some("UU123"));
}

#[tokio::test]
async fn test_channels_by_username_and_id() {
    let mut server = mockito::Server::new_async().await;
    let by_username = server
        .mock("GET", "/youtube/v3/channels")
        .match_query(Matcher::UrlEncoded("forUsername".into(), "olduser".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;
    let by_id = server
        .mock("GET", "/youtube/v3/channels")
        .match_query(Matcher::UrlEncoded("id".into(), "UC123".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": [{"id": "UC123"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;

    let response = client
        .channels(ChannelLookup::Username("olduser"), "en")
        .await
        .unwrap();
    assert!(response.items.is_empty());

    let response = client.channels(ChannelLookup::Id("UC123"), "en").await.unwrap();
    assert_eq!(response.items[0].id.as_deref(), Some("UC123"));

    by_username.assert_async().await;
    by_id.assert_async().await;
}

#[tokio::test]
async fn test_videos_lookup() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/youtube/v3/videos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("part".into(), "snippet,contentDetails".into()),
            Matcher::UrlEncoded("id".into(), "abcdefghijk".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "items": [{
                    "id": "abcdefghijk",
                    "snippet": {"title": "A video", "categoryId": "10"}
                }]
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client.videos("abcdefghijk", "en").await.unwrap();

    mock.assert_async().await;
    let video = &response.items[0];
    assert_eq!(video.video_id(), Some("abcdefghijk"));
    assert_eq!(video.category_code(), Some(10));
}

#[tokio::test]
async fn test_search_parameters_by_kind() {
    let mut server = mockito::Server::new_async().await;
    let channel_search = server
        .mock("GET", "/youtube/v3/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "some band".into()),
            Matcher::UrlEncoded("type".into(), "channel".into()),
            Matcher::UrlEncoded("safeSearch".into(), "none".into()),
            Matcher::UrlEncoded("relevanceLanguage".into(), "en".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"items": [{"id": {"kind": "youtube#channel", "channelId": "UC999"}}]}"#,
        )
        .create_async()
        .await;
    let video_search = server
        .mock("GET", "/youtube/v3/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "some movie".into()),
            Matcher::UrlEncoded("type".into(), "video".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"items": [{"id": {"kind": "youtube#video", "videoId": "abcdefghijk"}}]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server).await;

    let channels = client
        .search("some band", SearchKind::Channel, "en")
        .await
        .unwrap();
    assert_eq!(channels.items[0].channel_id(), Some("UC999"));

    let videos = client
        .search("some movie", SearchKind::Video, "en")
        .await
        .unwrap();
    assert_eq!(videos.items[0].video_id(), Some("abcdefghijk"));

    channel_search.assert_async().await;
    video_search.assert_async().await;
}

#[tokio::test]
async fn test_error_status_mapping() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/youtube/v3/videos")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("video not found")
        .create_async()
        .await;
    server
        .mock("GET", "/youtube/v3/channels")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;
    server
        .mock("GET", "/youtube/v3/search")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("quota exceeded")
        .create_async()
        .await;

    let client = client_for(&server).await;

    let err = client.videos("abcdefghijk", "en").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let err = client
        .channels(ChannelLookup::Id("UC123"), "en")
        .await
        .unwrap_err();
    assert!(err.is_auth_error());

    let err = client
        .search("anything", SearchKind::Video, "en")
        .await
        .unwrap_err();
    assert!(err.is_quota_exceeded());
}

#[tokio::test]
async fn test_malformed_json_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/youtube/v3/videos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let client = client_for(&server).await;
    let err = client.videos("abcdefghijk", "en").await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
