use super::*;

/// Tests listing users on an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests listing users after several inserts.
///
/// Verifies that exactly the created users are returned, in ID order.
///
/// Expected: Ok with N users matching the created rows
#[tokio::test]
async fn returns_every_created_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for _ in 0..3 {
        created.push(factory::create_user(db).await?);
    }

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 3);
    for (user, model) in users.iter().zip(created.iter()) {
        assert_eq!(user.id, model.id);
        assert_eq!(user.name, model.name);
    }

    Ok(())
}
