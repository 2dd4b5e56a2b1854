use super::*;

/// Tests finding an existing flight.
///
/// Expected: Ok(Some(flight))
#[tokio::test]
async fn returns_existing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Flight)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::flight::FlightFactory::new(db)
        .capacity(2)
        .build()
        .await?;

    let flight = FlightRepository::new(db)
        .find_by_id(created.id)
        .await?
        .unwrap();

    assert_eq!(flight.id, created.id);
    assert_eq!(flight.capacity, 2);

    Ok(())
}

/// Tests finding a flight that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Flight)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FlightRepository::new(db).find_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}
