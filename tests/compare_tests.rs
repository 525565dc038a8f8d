use playlist_local_audit::api::mock::MockSource;
use playlist_local_audit::compare;
use playlist_local_audit::models::Track;

#[test]
fn title_comparison_reports_missing_per_playlist() {
    let source = MockSource::new().with_playlist(
        "pl1",
        vec![
            Track::new("t1", "Song A", "Artist A"),
            Track::new("t2", "Song B", "Artist B"),
        ],
    );
    let local = vec!["Song A".to_string()];

    let rt = tokio::runtime::Runtime::new().unwrap();
    let reports = rt.block_on(async {
        compare::compare_playlists_to_local(&source, &["pl1".to_string()], &local).await
    });

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.playlist_id, "pl1");
    assert_eq!(report.remote_total, 2);
    assert_eq!(report.missing, vec!["Song B".to_string()]);
    assert!(report.fetch_error.is_none());
}

#[test]
fn id_comparison_partitions_master_into_missing_and_placed() {
    let source = MockSource::new()
        .with_playlist(
            "master",
            vec![
                Track::new("1", "Song One", "Artist One"),
                Track::new("2", "Song Two", "Artist Two"),
                Track::new("3", "Song Three", "Artist Three"),
            ],
        )
        .with_playlist(
            "col_a",
            vec![
                Track::new("2", "Song Two", "Artist Two"),
                Track::new("4", "Song Four", "Artist Four"),
            ],
        )
        .with_playlist("col_b", vec![Track::new("3", "Song Three", "Artist Three")]);

    let collection = vec!["col_a".to_string(), "col_b".to_string()];
    let rt = tokio::runtime::Runtime::new().unwrap();
    let report = rt.block_on(async {
        compare::verify_master_in_collection(&source, "master", &collection).await
    });

    // missing {1}, placed {2,3}; together they partition the master ids
    assert_eq!(report.master_total, 3);
    assert_eq!(report.placed, 2);
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.missing[0].id, "1");
    assert_eq!(report.missing[0].name, "Song One");
    assert_eq!(report.missing[0].artist, "Artist One");
    assert_eq!(report.placed + report.missing.len(), report.master_total);
    assert!(report.errors.is_empty());
}

#[test]
fn duplicate_master_entries_count_once() {
    let source = MockSource::new()
        .with_playlist(
            "master",
            vec![
                Track::new("1", "Song One", "Artist One"),
                Track::new("1", "Song One", "Artist One"),
                Track::new("2", "Song Two", "Artist Two"),
            ],
        )
        .with_playlist("col", vec![Track::new("2", "Song Two", "Artist Two")]);

    let rt = tokio::runtime::Runtime::new().unwrap();
    let report = rt.block_on(async {
        compare::verify_master_in_collection(&source, "master", &["col".to_string()]).await
    });

    assert_eq!(report.master_total, 2);
    assert_eq!(report.placed, 1);
    assert_eq!(report.missing.len(), 1);
}

#[test]
fn collection_fetch_failure_is_accumulated_not_fatal() {
    let source = MockSource::new()
        .with_playlist("master", vec![Track::new("1", "Song One", "Artist One")])
        .with_failing_playlist("col", Vec::new(), "boom");

    let rt = tokio::runtime::Runtime::new().unwrap();
    let report = rt.block_on(async {
        compare::verify_master_in_collection(&source, "master", &["col".to_string()]).await
    });

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("boom"));
    // Partition still computed over what was fetched.
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.placed, 0);
}

#[test]
fn comparisons_are_idempotent() {
    let source = MockSource::new()
        .with_playlist(
            "master",
            vec![
                Track::new("1", "Song One", "Artist One"),
                Track::new("2", "Song Two", "Artist Two"),
            ],
        )
        .with_playlist("col", vec![Track::new("2", "Song Two", "Artist Two")]);

    let rt = tokio::runtime::Runtime::new().unwrap();
    let (first, second) = rt.block_on(async {
        let a = compare::verify_master_in_collection(&source, "master", &["col".to_string()]).await;
        let b = compare::verify_master_in_collection(&source, "master", &["col".to_string()]).await;
        (a, b)
    });

    let ids = |r: &playlist_local_audit::models::CollectionReport| {
        r.missing.iter().map(|t| t.id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(first.placed, second.placed);
    assert_eq!(first.master_total, second.master_total);
}
