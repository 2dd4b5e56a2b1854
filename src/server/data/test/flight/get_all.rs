use super::*;

/// Tests listing flights after several inserts.
///
/// Expected: Ok with every created flight in ID order
#[tokio::test]
async fn returns_every_created_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Flight)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_flight(db).await?;
    let second = factory::flight::FlightFactory::new(db)
        .origin("Lima")
        .destination("Quito")
        .build()
        .await?;

    let flights = FlightRepository::new(db).get_all().await?;

    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0].id, first.id);
    assert_eq!(flights[1].id, second.id);
    assert_eq!(flights[1].origin, "Lima");

    Ok(())
}
