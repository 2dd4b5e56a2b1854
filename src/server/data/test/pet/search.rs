use super::*;

/// Tests searching without filters.
///
/// Verifies that an empty filter returns the same pets as `get_all`.
///
/// Expected: Ok with every pet
#[tokio::test]
async fn returns_all_pets_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::create_pet(db, owner.id).await?;
    factory::pet::PetFactory::new(db, owner.id)
        .origin("Cali")
        .build()
        .await?;

    let repo = PetRepository::new(db);
    let searched = repo.search(&PetFilter::default()).await?;
    let all = repo.get_all().await?;

    assert_eq!(searched.len(), 2);
    assert_eq!(searched, all);

    Ok(())
}

/// Tests searching by origin and destination.
///
/// Verifies that both predicates must match; a pet sharing only the origin is
/// excluded.
///
/// Expected: Ok with only the Bogota to Lima pet
#[tokio::test]
async fn requires_every_filter_to_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let lima = factory::pet::PetFactory::new(db, owner.id)
        .origin("Bogota")
        .destination("Lima")
        .build()
        .await?;
    factory::pet::PetFactory::new(db, owner.id)
        .origin("Bogota")
        .destination("Cali")
        .build()
        .await?;

    let filter = PetFilter {
        origin: Some("Bogota".to_string()),
        destination: Some("Lima".to_string()),
        ..Default::default()
    };
    let pets = PetRepository::new(db).search(&filter).await?;

    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, lima.id);

    Ok(())
}

/// Tests searching by date and owner.
///
/// Expected: Ok with only the pet of the given owner on the given day
#[tokio::test]
async fn filters_by_date_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first_owner = factory::create_user(db).await?;
    let second_owner = factory::create_user(db).await?;
    let expected = factory::pet::PetFactory::new(db, first_owner.id)
        .date(day(2024, 2, 1))
        .build()
        .await?;
    factory::pet::PetFactory::new(db, first_owner.id)
        .date(day(2024, 2, 2))
        .build()
        .await?;
    factory::pet::PetFactory::new(db, second_owner.id)
        .date(day(2024, 2, 1))
        .build()
        .await?;

    let filter = PetFilter {
        date: Some(day(2024, 2, 1)),
        owner_id: Some(first_owner.id),
        ..Default::default()
    };
    let pets = PetRepository::new(db).search(&filter).await?;

    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, expected.id);

    Ok(())
}

/// Tests that string filters are exact matches.
///
/// Expected: Ok with no pets for a differently cased or partial origin
#[tokio::test]
async fn matches_strings_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::pet::PetFactory::new(db, owner.id)
        .origin("Bogota")
        .build()
        .await?;

    let repo = PetRepository::new(db);
    for origin in ["bogota", "Bog"] {
        let filter = PetFilter {
            origin: Some(origin.to_string()),
            ..Default::default()
        };
        assert!(repo.search(&filter).await?.is_empty());
    }

    Ok(())
}
