use super::*;

/// Tests grouping pets by route and day.
///
/// Seeds (A,B,2024-01-01) twice and (A,C,2024-01-02) once.
///
/// Expected: Ok with two groups counted 2 and 1, ordered by route key
#[tokio::test]
async fn counts_pets_per_route_and_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    for (destination, date) in [("B", day(2024, 1, 1)), ("B", day(2024, 1, 1)), ("C", day(2024, 1, 2))] {
        factory::pet::PetFactory::new(db, owner.id)
            .route("A", destination, date)
            .build()
            .await?;
    }

    let groups = PetRepository::new(db)
        .count_by_route(&PetFilter::default())
        .await?;

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].origin, "A");
    assert_eq!(groups[0].destination, "B");
    assert_eq!(groups[0].date, day(2024, 1, 1));
    assert_eq!(groups[0].count, 2);
    assert_eq!(groups[1].destination, "C");
    assert_eq!(groups[1].date, day(2024, 1, 2));
    assert_eq!(groups[1].count, 1);

    Ok(())
}

/// Tests filtering before grouping.
///
/// Expected: Ok with only the group matching the destination filter
#[tokio::test]
async fn filters_before_grouping() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    for destination in ["Lima", "Lima", "Cali"] {
        factory::pet::PetFactory::new(db, owner.id)
            .route("Bogota", destination, day(2024, 3, 1))
            .build()
            .await?;
    }

    let filter = PetFilter {
        destination: Some("Lima".to_string()),
        ..Default::default()
    };
    let groups = PetRepository::new(db).count_by_route(&filter).await?;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].destination, "Lima");
    assert_eq!(groups[0].count, 2);

    Ok(())
}

/// Tests that the aggregate ignores the flight table.
///
/// Expected: Ok with no groups when only flights exist
#[tokio::test]
async fn ignores_flight_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_flight(db).await?;

    let groups = PetRepository::new(db)
        .count_by_route(&PetFilter::default())
        .await?;

    assert!(groups.is_empty());

    Ok(())
}
