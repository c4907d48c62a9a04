use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use super::find_or_404;
use crate::{
    entities::{genre, movie_genre},
    error::{AppError, AppResult},
    models::{GenrePayload, GenreResponse},
};

#[derive(Clone)]
pub struct GenreService {
    db: DatabaseConnection,
}

impl GenreService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<GenreResponse>> {
        let genres = genre::Entity::find().order_by_asc(genre::Column::Id).all(&self.db).await?;
        Ok(genres.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> AppResult<GenreResponse> {
        Ok(find_or_404::<genre::Entity, _>(&self.db, "Genre", id).await?.into())
    }

    pub async fn create(&self, payload: GenrePayload) -> AppResult<GenreResponse> {
        let txn = self.db.begin().await?;

        let existing = genre::Entity::find()
            .filter(genre::Column::Kind.eq(payload.kind.as_str()))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(AppError::conflict(format!("Genre '{}' already exists", payload.kind)));
        }

        let created =
            genre::ActiveModel { id: Default::default(), kind: Set(payload.kind) }.insert(&txn).await?;

        txn.commit().await?;
        info!(id = created.id, kind = %created.kind, "created genre");

        Ok(created.into())
    }

    pub async fn update(&self, id: i32, payload: GenrePayload) -> AppResult<GenreResponse> {
        let txn = self.db.begin().await?;

        let mut active: genre::ActiveModel =
            find_or_404::<genre::Entity, _>(&txn, "Genre", id).await?.into();
        active.kind = Set(payload.kind);
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        info!(id, "updated genre");

        Ok(updated.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        find_or_404::<genre::Entity, _>(&txn, "Genre", id).await?;
        movie_genre::Entity::delete_many()
            .filter(movie_genre::Column::GenreId.eq(id))
            .exec(&txn)
            .await?;
        genre::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!(id, "deleted genre");

        Ok(())
    }
}
