use super::*;

use std::fs;

use serde_json;

#[test]
fn read_rawg_games_response() {
    let data = fs::read_to_string("test/fixtures/games/games-list-1.json").unwrap();
    let actual: RawgGamesResponse = serde_json::from_str(&data).unwrap();

    assert_eq!(actual.count, 45);
    assert_eq!(actual.results.len(), 3);

    let gta = &actual.results[0];
    assert_eq!(gta.id, 3498);
    assert_eq!(gta.released, Some("2013-09-17".to_string()));
    assert_eq!(gta.metacritic, Some(92));
    assert_eq!(
        gta.platforms.clone().unwrap()[1].platform,
        RawgNamed { id: 187, name: "PlayStation 5".to_string(), slug: "playstation5".to_string() }
    );

    // Nulls and missing keys both come through as None
    let witcher = &actual.results[1];
    assert_eq!(witcher.platforms, None);
    assert_eq!(witcher.metacritic, None);
    assert_eq!(witcher.developers, None);

    let unreleased = &actual.results[2];
    assert_eq!(unreleased.released, None);
    assert_eq!(unreleased.short_screenshots, None);
    assert_eq!(unreleased.rating, Some(0.0));
}

#[test]
fn read_rawg_game_detail_response() {
    let data = fs::read_to_string("test/fixtures/games/game-detail-3328.json").unwrap();
    let actual: RawgGame = serde_json::from_str(&data).unwrap();

    assert_eq!(actual.name, "The Witcher 3: Wild Hunt");
    assert_eq!(actual.website, Some("https://thewitcher.com/en/witcher3".to_string()));
    assert_eq!(
        actual.developers,
        Some(vec![RawgNamed { id: 9023, name: "CD PROJEKT RED".to_string(), slug: "cd-projekt-red".to_string() }])
    );
}

#[test]
fn read_rawg_filter_options_response() {
    let data = fs::read_to_string("test/fixtures/filters/genres-1.json").unwrap();

    let expected = RawgFilterOptionsResponse {
        count: 2,
        results: vec![
            RawgNamed { id: 4, name: "Action".to_string(), slug: "action".to_string() },
            RawgNamed { id: 51, name: "Indie".to_string(), slug: "indie".to_string() },
        ],
    };
    let actual: RawgFilterOptionsResponse = serde_json::from_str(&data).unwrap();

    assert_eq!(actual, expected);
}
