use super::*;

/// Tests creating a new flight.
///
/// Verifies that the repository stores every field and assigns an ID.
///
/// Expected: Ok with flight created and readable by its ID
#[tokio::test]
async fn creates_new_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Flight)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let param = CreateFlightParam {
        origin: "Bogota".to_string(),
        destination: "Madrid".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        capacity: 4,
    };
    let flight = repo.create(param.clone()).await?;

    assert!(flight.id > 0);
    assert_eq!(flight.origin, param.origin);
    assert_eq!(flight.destination, param.destination);
    assert_eq!(flight.date, param.date);
    assert_eq!(flight.capacity, param.capacity);

    let stored = repo.find_by_id(flight.id).await?;
    assert_eq!(stored, Some(flight));

    Ok(())
}
