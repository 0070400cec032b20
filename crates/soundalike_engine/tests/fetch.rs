use std::time::Duration;

use pretty_assertions::assert_eq;
use soundalike_engine::{
    ArtistFetcher, EngineEvent, EngineHandle, FailureKind, FetchSettings, ReqwestFetcher,
    RequestDescriptor,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r##"{
    "similarartists": {
        "artist": [
            {
                "name": "Thin Lizzy",
                "url": "https://www.last.fm/music/Thin+Lizzy",
                "mbid": "5bc50a3a-2c4b-46b2-83a9-f99713e1de75",
                "image": [
                    { "#text": "https://img.example.com/s.png", "size": "small" },
                    { "#text": "https://img.example.com/m.png", "size": "medium" },
                    { "#text": "https://img.example.com/l.png", "size": "large" },
                    { "#text": "https://img.example.com/xl.png", "size": "extralarge" }
                ]
            },
            {
                "name": "Deep Purple",
                "url": "https://www.last.fm/music/Deep+Purple",
                "mbid": "",
                "image": []
            }
        ]
    }
}"##;

fn descriptor(server: &MockServer) -> RequestDescriptor {
    RequestDescriptor::similar_artists(format!("{}/2.0/", server.uri()), "Queen", "k3y")
}

#[tokio::test]
async fn fetcher_decodes_similar_artists() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2.0/"))
        .and(query_param("method", "artist.getsimilar"))
        .and(query_param("artist", "Queen"))
        .and(query_param("api_key", "k3y"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let records = fetcher.fetch(&descriptor(&server)).await.expect("fetch ok");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Thin Lizzy");
    assert_eq!(records[0].image_url, "https://img.example.com/xl.png");
    assert_eq!(records[1].name, "Deep Purple");
    assert_eq!(records[1].id, "");
    assert_eq!(records[1].image_url, "");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2.0/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch(&descriptor(&server)).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.status(), Some(500));
    assert!(err.message.contains("500"));
}

#[tokio::test]
async fn fetcher_reports_unparseable_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2.0/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch(&descriptor(&server)).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Parse);
}

#[tokio::test]
async fn fetcher_treats_missing_collection_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2.0/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"error": 6}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let records = fetcher.fetch(&descriptor(&server)).await.expect("fetch ok");

    assert!(records.is_empty());
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2.0/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(BODY, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher.fetch(&descriptor(&server)).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_echoes_the_generation_with_the_completion() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2.0/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "application/json"))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings::default());
    engine.issue(7, descriptor(&server));

    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    let event = loop {
        if let Some(event) = engine.try_recv() {
            break event;
        }
        assert!(std::time::Instant::now() < deadline, "no event before deadline");
        std::thread::sleep(Duration::from_millis(10));
    };

    let EngineEvent::FetchCompleted { generation, result } = event;
    assert_eq!(generation, 7);
    assert_eq!(result.expect("fetch ok").len(), 2);
}
