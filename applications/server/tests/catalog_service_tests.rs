/// Catalog service integration tests
/// Exercises the service contract against a real database
mod common;

use common::{create_test_catalog, seed_catalog, song_input};
use songbook_server::CatalogError;

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let t = create_test_catalog().await;

    let input = song_input("Dog Eat Dog II", "Odumodublvck", Some("Eziokwu"), 240, 2023);
    let saved = t.catalog.save_song(Some(input.clone())).await.unwrap();

    let fetched = t.catalog.get_song_by_id(saved.id).await.unwrap();
    assert_eq!(fetched.title, input.title);
    assert_eq!(fetched.artist, input.artist);
    assert_eq!(fetched.album, input.album);
    assert_eq!(fetched.duration, input.duration);
    assert_eq!(fetched.release_year, input.release_year);
    assert_eq!(fetched.id, saved.id);
}

#[tokio::test]
async fn test_save_null_song_is_invalid_input() {
    let t = create_test_catalog().await;

    let err = t.catalog.save_song(None).await.unwrap_err();
    match err {
        CatalogError::InvalidInput(msg) => assert_eq!(msg, "Song cannot be null"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn test_save_blank_title_and_artist_reports_exactly_those_fields() {
    let t = create_test_catalog().await;

    let input = song_input("", "  ", Some("Eziokwu"), 240, 2023);
    let err = t.catalog.save_song(Some(input)).await.unwrap_err();

    match err {
        CatalogError::Validation(errors) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(errors.get("title").unwrap(), "Song title is required");
            assert_eq!(errors.get("artist").unwrap(), "Artist name is required");
        }
        other => panic!("expected Validation, got {other:?}"),
    }

    // Nothing reached the store
    assert!(t.catalog.get_all_songs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_future_release_year_cites_release_year() {
    let t = create_test_catalog().await;

    let next_year = i64::from(chrono::Datelike::year(&chrono::Utc::now())) + 1;
    let input = song_input("Tomorrow", "Someone", None, 180, next_year);
    let err = t.catalog.save_song(Some(input)).await.unwrap_err();

    match err {
        CatalogError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get("releaseYear").unwrap(),
                "Release year cannot be in the future"
            );
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_missing_song_is_not_found() {
    let t = create_test_catalog().await;

    let err = t.catalog.get_song_by_id(999).await.unwrap_err();
    match err {
        CatalogError::NotFound(msg) => assert_eq!(msg, "Song with ID 999 not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_replaces_all_fields_and_keeps_id() {
    let t = create_test_catalog().await;

    let saved = t
        .catalog
        .save_song(Some(song_input(
            "Dog Eat Dog II",
            "Odumodublvck",
            Some("Eziokwu"),
            240,
            2023,
        )))
        .await
        .unwrap();

    let replacement = song_input("Declan Rice", "Odumodublvck", None, 200, 2022);
    let updated = t
        .catalog
        .update_song(saved.id, Some(replacement))
        .await
        .unwrap();

    assert_eq!(updated.id, saved.id);

    let fetched = t.catalog.get_song_by_id(saved.id).await.unwrap();
    assert_eq!(fetched.title, "Declan Rice");
    assert_eq!(fetched.album, None);
    assert_eq!(fetched.duration, 200);
    assert_eq!(fetched.release_year, 2022);
}

#[tokio::test]
async fn test_update_missing_song_is_not_found() {
    let t = create_test_catalog().await;

    let err = t
        .catalog
        .update_song(42, Some(song_input("X", "Y", None, 100, 2020)))
        .await
        .unwrap_err();
    match err {
        CatalogError::NotFound(msg) => assert_eq!(msg, "Song with ID 42 not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_null_song_is_invalid_input() {
    let t = create_test_catalog().await;

    let err = t.catalog.update_song(1, None).await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(_)));
}

#[tokio::test]
async fn test_delete_is_exhaustive() {
    let t = create_test_catalog().await;

    let saved = t
        .catalog
        .save_song(Some(song_input("Gone Soon", "Artist", None, 100, 2020)))
        .await
        .unwrap();

    t.catalog.delete_song(saved.id).await.unwrap();

    assert!(matches!(
        t.catalog.get_song_by_id(saved.id).await.unwrap_err(),
        CatalogError::NotFound(_)
    ));
    assert!(matches!(
        t.catalog.delete_song(saved.id).await.unwrap_err(),
        CatalogError::NotFound(_)
    ));
}

#[tokio::test]
async fn test_list_is_idempotent_without_writes() {
    let t = create_test_catalog().await;
    seed_catalog(&t.store).await;

    let first = t.catalog.get_all_songs().await.unwrap();
    let second = t.catalog.get_all_songs().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_list_is_success_but_empty_search_is_not_found() {
    let t = create_test_catalog().await;

    let songs = t.catalog.get_all_songs().await.unwrap();
    assert!(songs.is_empty());

    let page = t.catalog.get_songs(0, 10, None, None).await.unwrap();
    assert!(page.songs.is_empty());
    assert_eq!(page.total, 0);

    let err = t
        .catalog
        .search_songs_by_artist(Some("Unknown"))
        .await
        .unwrap_err();
    match err {
        CatalogError::NotFound(msg) => assert_eq!(msg, "No songs found for artist: Unknown"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_pagination_coerces_out_of_range_values() {
    let t = create_test_catalog().await;
    seed_catalog(&t.store).await;

    // Non-positive size becomes 10, negative page becomes 0
    let page = t.catalog.get_songs(-5, 0, None, None).await.unwrap();
    assert_eq!(page.page, 0);
    assert_eq!(page.size, 10);
    assert_eq!(page.songs.len(), 2);
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn test_invalid_sort_direction_behaves_as_ascending() {
    let t = create_test_catalog().await;
    seed_catalog(&t.store).await;

    let garbage = t
        .catalog
        .get_songs(0, 10, Some("title"), Some("invalid-garbage"))
        .await
        .unwrap();
    let ascending = t
        .catalog
        .get_songs(0, 10, Some("title"), Some("asc"))
        .await
        .unwrap();

    assert_eq!(garbage.songs, ascending.songs);
    assert_eq!(garbage.songs[0].title, "Declan Rice");
}

#[tokio::test]
async fn test_sort_descending_when_direction_is_desc() {
    let t = create_test_catalog().await;
    seed_catalog(&t.store).await;

    let page = t
        .catalog
        .get_songs(0, 10, Some("title"), Some("DESC"))
        .await
        .unwrap();
    assert_eq!(page.songs[0].title, "Dog Eat Dog II");
}

#[tokio::test]
async fn test_search_by_artist_returns_matches_in_store_order() {
    let t = create_test_catalog().await;
    seed_catalog(&t.store).await;

    let songs = t
        .catalog
        .search_songs_by_artist(Some("Odumodublvck"))
        .await
        .unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].title, "Dog Eat Dog II");
    assert_eq!(songs[1].title, "Declan Rice");
}

#[tokio::test]
async fn test_search_by_title_matches_substring() {
    let t = create_test_catalog().await;
    seed_catalog(&t.store).await;

    let songs = t.catalog.search_songs_by_title(Some("Dog")).await.unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].title, "Dog Eat Dog II");
}

#[tokio::test]
async fn test_blank_search_terms_are_invalid_input() {
    let t = create_test_catalog().await;
    seed_catalog(&t.store).await;

    for blank in [None, Some(""), Some(" "), Some("\t"), Some("\n")] {
        let err = t.catalog.search_songs_by_artist(blank).await.unwrap_err();
        match err {
            CatalogError::InvalidInput(msg) => assert_eq!(msg, "Artist cannot be blank"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        let err = t.catalog.search_songs_by_album(blank).await.unwrap_err();
        match err {
            CatalogError::InvalidInput(msg) => assert_eq!(msg, "Album cannot be blank"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        let err = t.catalog.search_songs_by_title(blank).await.unwrap_err();
        match err {
            CatalogError::InvalidInput(msg) => assert_eq!(msg, "Title cannot be blank"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_combined_search_with_partial_criteria() {
    let t = create_test_catalog().await;
    seed_catalog(&t.store).await;

    let songs = t
        .catalog
        .search_songs(None, Some("Odumodublvck"), None)
        .await
        .unwrap();
    assert_eq!(songs.len(), 2);

    let songs = t
        .catalog
        .search_songs(Some("Dog"), Some("Odumodublvck"), Some("Eziokwu"))
        .await
        .unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].title, "Dog Eat Dog II");
}

#[tokio::test]
async fn test_combined_search_all_blank_is_invalid_input() {
    let t = create_test_catalog().await;
    seed_catalog(&t.store).await;

    let err = t
        .catalog
        .search_songs(Some(""), Some(""), Some(""))
        .await
        .unwrap_err();
    match err {
        CatalogError::InvalidInput(msg) => {
            assert_eq!(msg, "At least one search criteria must be provided");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let err = t.catalog.search_songs(None, None, None).await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(_)));
}

#[tokio::test]
async fn test_combined_search_without_matches_is_not_found() {
    let t = create_test_catalog().await;
    seed_catalog(&t.store).await;

    let err = t
        .catalog
        .search_songs(Some("Unknown"), Some("Unknown"), Some("Unknown"))
        .await
        .unwrap_err();
    match err {
        CatalogError::NotFound(msg) => assert_eq!(
            msg,
            "No songs found matching title: Unknown, artist: Unknown, album: Unknown"
        ),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
