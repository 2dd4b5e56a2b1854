use super::*;

/// Tests finding an existing pet.
///
/// Expected: Ok(Some(pet))
#[tokio::test]
async fn returns_existing_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, created) = factory::helpers::create_pet_with_owner(db).await?;

    let pet = PetRepository::new(db).find_by_id(created.id).await?.unwrap();

    assert_eq!(pet.id, created.id);
    assert_eq!(pet.name, created.name);
    assert_eq!(pet.user_id, owner.id);

    Ok(())
}

/// Tests finding a pet that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PetRepository::new(db).find_by_id(404).await?;

    assert!(result.is_none());

    Ok(())
}
