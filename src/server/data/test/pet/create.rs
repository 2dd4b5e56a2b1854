use super::*;

/// Tests creating a pet for an existing owner.
///
/// Verifies that the repository stores every field, assigns an ID and keeps the
/// owner reference.
///
/// Expected: Ok with pet created and readable by its ID
#[tokio::test]
async fn creates_pet_for_existing_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = PetRepository::new(db);
    let param = CreatePetParam {
        name: "Firulais".to_string(),
        origin: "Bogota".to_string(),
        destination: "Lima".to_string(),
        breed: "Labrador".to_string(),
        age: 4,
        date: day(2024, 1, 1),
        user_id: owner.id,
    };
    let pet = repo.create(param.clone()).await?;

    assert!(pet.id > 0);
    assert_eq!(pet.name, param.name);
    assert_eq!(pet.breed, param.breed);
    assert_eq!(pet.date, param.date);
    assert_eq!(pet.user_id, owner.id);

    let stored = repo.find_by_id(pet.id).await?;
    assert_eq!(stored, Some(pet));

    Ok(())
}

/// Tests creating a pet that references a missing owner.
///
/// Verifies that the foreign key rejects the insert and that no pet row is left
/// behind.
///
/// Expected: Err(DbErr) classified as a foreign key violation, pet table empty
#[tokio::test]
async fn fails_for_nonexistent_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);
    let result = repo
        .create(CreatePetParam {
            name: "Michi".to_string(),
            origin: "Bogota".to_string(),
            destination: "Lima".to_string(),
            breed: "Siames".to_string(),
            age: 2,
            date: day(2024, 1, 1),
            user_id: 999,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    let count = entity::prelude::Pet::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
