use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user inside a transaction
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user = self
            .db
            .transaction::<_, User, DbErr>(|txn| {
                Box::pin(async move { UserRepository::new(txn).create(param).await })
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.name);

        Ok(user)
    }

    /// Gets a user by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets every user ordered by ID
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }
}
