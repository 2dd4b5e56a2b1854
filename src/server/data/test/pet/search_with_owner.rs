use super::*;

/// Tests joining pets with their owners.
///
/// Expected: Ok with each pet paired with the user that owns it
#[tokio::test]
async fn pairs_pets_with_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::user::UserFactory::new(db).name("Ana").build().await?;
    let luis = factory::user::UserFactory::new(db).name("Luis").build().await?;
    let ana_pet = factory::create_pet(db, ana.id).await?;
    let luis_pet = factory::create_pet(db, luis.id).await?;

    let rows = PetRepository::new(db)
        .search_with_owner(&PetFilter::default())
        .await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].pet.id, ana_pet.id);
    assert_eq!(rows[0].owner.name, "Ana");
    assert_eq!(rows[1].pet.id, luis_pet.id);
    assert_eq!(rows[1].owner.name, "Luis");

    Ok(())
}

/// Tests applying filters to the joined search.
///
/// Expected: Ok with only the pets of the requested owner
#[tokio::test]
async fn applies_filters_to_join() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, pet) = factory::helpers::create_pet_with_owner(db).await?;
    factory::helpers::create_pet_with_owner(db).await?;

    let filter = PetFilter {
        owner_id: Some(owner.id),
        ..Default::default()
    };
    let rows = PetRepository::new(db).search_with_owner(&filter).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].pet.id, pet.id);
    assert_eq!(rows[0].owner.id, owner.id);

    Ok(())
}

/// Tests that pets without a stored owner are excluded from the join.
///
/// Seeds a pet pointing at a missing user with foreign keys disabled. The plain
/// search still returns it while the joined search leaves it out.
///
/// Expected: Ok with the orphaned pet only in the plain search
#[tokio::test]
async fn excludes_pets_without_owner() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    test.set_foreign_keys(false).await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, owned) = factory::helpers::create_pet_with_owner(db).await?;
    let orphan = factory::create_pet(db, owner.id + 100).await?;

    let repo = PetRepository::new(db);
    let plain = repo.search(&PetFilter::default()).await?;
    let joined = repo.search_with_owner(&PetFilter::default()).await?;

    assert_eq!(plain.len(), 2);
    assert!(plain.iter().any(|pet| pet.id == orphan.id));
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].pet.id, owned.id);

    Ok(())
}
