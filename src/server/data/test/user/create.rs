use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores every field and assigns an ID.
///
/// Expected: Ok with user created and readable by its ID
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        name: "Ana".to_string(),
        origin: "Bogota".to_string(),
        destination: "Lima".to_string(),
        age: 28,
    };
    let user = repo.create(param.clone()).await?;

    assert!(user.id > 0);
    assert_eq!(user.name, param.name);
    assert_eq!(user.origin, param.origin);
    assert_eq!(user.destination, param.destination);
    assert_eq!(user.age, param.age);

    let stored = repo.find_by_id(user.id).await?;
    assert_eq!(stored, Some(user));

    Ok(())
}

/// Tests creating several users.
///
/// Verifies that every insert receives a distinct generated ID.
///
/// Expected: Ok with unique IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        name: "Luis".to_string(),
        origin: "Cali".to_string(),
        destination: "Quito".to_string(),
        age: 0,
    };
    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
