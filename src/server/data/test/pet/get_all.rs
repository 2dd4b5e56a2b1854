use super::*;

/// Tests listing pets on an empty table.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_pets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pets = PetRepository::new(db).get_all().await?;

    assert!(pets.is_empty());

    Ok(())
}

/// Tests listing pets of several owners.
///
/// Expected: Ok with every pet ordered by ID
#[tokio::test]
async fn returns_pets_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_pet_with_owner(db).await?;
    let (_, second) = factory::helpers::create_pet_with_owner(db).await?;
    let third = factory::create_pet(db, first.user_id).await?;

    let ids: Vec<i32> = PetRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|pet| pet.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
