use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some(user)) matching the stored row
#[tokio::test]
async fn returns_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("Marta")
        .age(41)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.name, "Marta");
    assert_eq!(user.age, 41);

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
