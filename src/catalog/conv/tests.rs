use super::*;

use crate::models::rawg::RawgPlatformEntry;

fn rawg_fixture() -> RawgGame {
    RawgGame {
        id: 666,
        name: "Game Buying Simulator 2024".to_string(),
        released: Some("2024-02-29".to_string()),
        rating: Some(3.5),
        metacritic: Some(66),
        genres: Some(vec![RawgNamed { id: 14, name: "Simulation".to_string(), slug: "simulation".to_string() }]),
        platforms: Some(vec![
            RawgPlatformEntry { platform: RawgNamed { id: 4, name: "PC".to_string(), slug: "pc".to_string() } },
        ]),
        short_screenshots: Some(vec![RawgScreenshot { id: -1, image: "bg.jpg".to_string() }]),
        description: None,
        background_image: Some("bg.jpg".to_string()),
        developers: None,
        publishers: None,
        website: Some("".to_string()),
    }
}

#[test]
fn convert_rawg_game() {
    let expected = Game {
        id: GameId(666),
        name: "Game Buying Simulator 2024".to_string(),
        released: NaiveDate::from_ymd_opt(2024, 2, 29),
        rating: 3.5,
        metacritic: Some(66),
        genres: vec![NamedRef { id: 14, name: "Simulation".to_string() }],
        platforms: vec![NamedRef { id: 4, name: "PC".to_string() }],
        screenshots: vec![Screenshot { id: -1, image: "bg.jpg".to_string() }],
        description: None,
        background_image: Some("bg.jpg".to_string()),
        developers: vec![],
        publishers: vec![],
        website: None,
    };

    assert_eq!(extract_game(rawg_fixture()), expected);
}

#[test]
fn convert_rawg_game_missing_everything() {
    let rawg = RawgGame {
        released: None,
        rating: None,
        metacritic: None,
        genres: None,
        platforms: None,
        short_screenshots: None,
        background_image: None,
        ..rawg_fixture()
    };

    let actual = extract_game(rawg);

    assert_eq!(actual.released, None);
    assert_eq!(actual.rating, 0.0);
    assert!(actual.genres.is_empty());
    assert!(actual.platforms.is_empty());
    assert!(actual.screenshots.is_empty());
}

#[test]
fn convert_rawg_game_detail_prefers_screenshot_resource() {
    let shots = vec![
        RawgScreenshot { id: 1, image: "one.jpg".to_string() },
        RawgScreenshot { id: 2, image: "two.jpg".to_string() },
    ];

    let actual = extract_game_detail(rawg_fixture(), shots);

    assert_eq!(
        actual.screenshots,
        vec![
            Screenshot { id: 1, image: "one.jpg".to_string() },
            Screenshot { id: 2, image: "two.jpg".to_string() },
        ]
    );
}

#[test]
fn convert_rawg_game_detail_without_screenshots_keeps_previews() {
    let actual = extract_game_detail(rawg_fixture(), vec![]);
    assert_eq!(actual.screenshots, vec![Screenshot { id: -1, image: "bg.jpg".to_string() }]);
}

#[test]
fn parse_release_date_formats() {
    assert_eq!(parse_release_date("2015-05-18"), NaiveDate::from_ymd_opt(2015, 5, 18));
    assert_eq!(parse_release_date("2015"), None);
    assert_eq!(parse_release_date(""), None);
}
