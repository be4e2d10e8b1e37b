mod utils;

use chrono::NaiveDate;
use tokio;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};

use gamehub::catalog::{
    CatalogClient,
    CatalogDetailHandling,
    CatalogError,
    CatalogFilterHandling,
    CatalogListHandling,
};
use gamehub::models::game::{FilterOption, GameId, NamedRef, Screenshot};
use gamehub::query::{FilterSelection, Ordering};

async fn mount_fixture(server: &MockServer, p: &str, fixture: &str) {
    let response = utils::fixture(fixture);

    Mock::given(method("GET"))
        .and(path(p))
        .and(query_param("key", "RAWG API KEY"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .mount(server)
        .await;
}

fn client(server: &MockServer) -> CatalogClient {
    CatalogClient::new("RAWG API KEY", &format!("http://{}/api", server.address()))
}

#[tokio::test]
async fn test_list_games() {
    let mock_rawg = MockServer::start().await;
    let response = utils::fixture("games/games-list-1.json");

    Mock::given(method("GET"))
        .and(path("/api/games"))
        .and(query_param("key", "RAWG API KEY"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "20"))
        .and(query_param("ordering", "-rating"))
        .and(query_param_is_missing("genres"))
        .and(query_param_is_missing("tags"))
        .and(query_param_is_missing("dates"))
        .and(query_param_is_missing("search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .mount(&mock_rawg)
        .await;

    let actual = client(&mock_rawg).list_games(2, &FilterSelection::default()).unwrap();

    assert_eq!(actual.count, 45);
    assert_eq!(actual.requested_page, 2);

    let ids: Vec<GameId> = actual.results.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![GameId(3498), GameId(3328), GameId(9999)]);

    let gta = &actual.results[0];
    assert_eq!(gta.released, NaiveDate::from_ymd_opt(2013, 9, 17));
    assert_eq!(
        gta.platforms,
        vec![
            NamedRef { id: 4, name: "PC".to_string() },
            NamedRef { id: 187, name: "PlayStation 5".to_string() },
        ]
    );
    assert_eq!(actual.results[2].released, None);
}

#[tokio::test]
async fn test_list_games_with_filters() {
    let mock_rawg = MockServer::start().await;
    let response = utils::fixture("games/games-list-1.json");

    Mock::given(method("GET"))
        .and(path("/api/games"))
        .and(query_param("page", "1"))
        .and(query_param("genres", "4"))
        .and(query_param("tags", "31"))
        .and(query_param("dates", "2015-01-01,2015-12-31"))
        .and(query_param("ordering", "name"))
        .and(query_param("search", "witcher"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json")
        )
        .expect(1)
        .mount(&mock_rawg)
        .await;

    let filters = FilterSelection {
        category: Some("4".to_string()),
        tag: Some("31".to_string()),
        release_year: Some(2015),
        ordering: Some(Ordering::NameAsc),
        search: Some("witcher".to_string()),
    };

    let actual = client(&mock_rawg).list_games(1, &filters).unwrap();
    assert_eq!(actual.results.len(), 3);
}

#[tokio::test]
async fn test_list_games_server_error() {
    let mock_rawg = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/games"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_rawg)
        .await;

    let err = client(&mock_rawg).list_games(1, &FilterSelection::default()).unwrap_err();

    assert!(matches!(err, CatalogError::Status { status: 502, .. }));
    // The api key travels in the query string; it mustn't leak into messages
    assert!(!err.to_string().contains("RAWG API KEY"));
}

#[tokio::test]
async fn test_list_games_bad_body() {
    let mock_rawg = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/games"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>".as_bytes(), "text/html"))
        .mount(&mock_rawg)
        .await;

    let err = client(&mock_rawg).list_games(1, &FilterSelection::default()).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[tokio::test]
async fn test_list_games_unreachable() {
    // Grab a free port and release it so nothing is listening there
    let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let client = CatalogClient::new("RAWG API KEY", &format!("http://127.0.0.1:{}/api", port));

    let err = client.list_games(1, &FilterSelection::default()).unwrap_err();
    assert!(matches!(err, CatalogError::Http(_)));
}

#[tokio::test]
async fn test_get_game_detail() {
    let mock_rawg = MockServer::start().await;
    mount_fixture(&mock_rawg, "/api/games/3328", "games/game-detail-3328.json").await;
    mount_fixture(&mock_rawg, "/api/games/3328/screenshots", "games/game-screenshots-3328.json").await;

    let actual = client(&mock_rawg).get_game_detail(GameId(3328)).unwrap();

    assert_eq!(actual.name, "The Witcher 3: Wild Hunt");
    assert_eq!(actual.description, Some("<p>The third game in a series of open world RPGs.</p>".to_string()));
    assert_eq!(actual.metacritic, Some(92));
    assert_eq!(actual.website, Some("https://thewitcher.com/en/witcher3".to_string()));
    assert_eq!(actual.developers, vec![NamedRef { id: 9023, name: "CD PROJEKT RED".to_string() }]);
    assert_eq!(actual.publishers, vec![NamedRef { id: 7411, name: "CD PROJEKT RED".to_string() }]);
    assert_eq!(
        actual.screenshots,
        vec![
            Screenshot { id: 30336, image: "https://media.rawg.io/media/screenshots/witcher3-1.jpg".to_string() },
            Screenshot { id: 30337, image: "https://media.rawg.io/media/screenshots/witcher3-2.jpg".to_string() },
        ]
    );
}

#[tokio::test]
async fn test_get_game_detail_not_found() {
    let mock_rawg = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/games/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_rawg)
        .await;

    let err = client(&mock_rawg).get_game_detail(GameId(1)).unwrap_err();

    assert!(matches!(err, CatalogError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "The catalog responded with HTTP 404 for /games/1");
}

#[tokio::test]
async fn test_get_genres_and_tags() {
    let mock_rawg = MockServer::start().await;
    mount_fixture(&mock_rawg, "/api/genres", "filters/genres-1.json").await;
    mount_fixture(&mock_rawg, "/api/tags", "filters/tags-1.json").await;

    let client = client(&mock_rawg);

    let expected_genres = vec![
        FilterOption { id: 4, name: "Action".to_string(), slug: "action".to_string() },
        FilterOption { id: 51, name: "Indie".to_string(), slug: "indie".to_string() },
    ];
    assert_eq!(client.get_genres().unwrap(), expected_genres);

    let expected_tags = vec![
        FilterOption { id: 31, name: "Singleplayer".to_string(), slug: "singleplayer".to_string() },
        FilterOption { id: 18, name: "Co-op".to_string(), slug: "co-op".to_string() },
    ];
    assert_eq!(client.get_tags().unwrap(), expected_tags);
}
