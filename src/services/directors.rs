use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::{contains_ci, find_or_404, non_empty};
use crate::{
    entities::{director, movie},
    error::{AppError, AppResult},
    models::{DirectorFilter, PersonDetail, PersonPayload, PersonSummary},
};

#[derive(Clone)]
pub struct DirectorService {
    db: DatabaseConnection,
}

impl DirectorService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: &DirectorFilter) -> AppResult<Vec<PersonDetail>> {
        let mut query = director::Entity::find().order_by_asc(director::Column::Id);

        if let Some(name) = non_empty(&filter.name) {
            query = query.filter(
                Condition::any()
                    .add(contains_ci((director::Entity, director::Column::FirstName), name))
                    .add(contains_ci((director::Entity, director::Column::LastName), name)),
            );
        }

        let directors = query.all(&self.db).await?;
        debug!(?filter, matches = directors.len(), "filtered directors");

        self.with_movies(directors).await
    }

    pub async fn get(&self, id: i32) -> AppResult<PersonDetail> {
        let director = find_or_404::<director::Entity, _>(&self.db, "Director", id).await?;
        let mut details = self.with_movies(vec![director]).await?;
        details.pop().ok_or(AppError::not_found("Director", id))
    }

    pub async fn create(&self, payload: PersonPayload) -> AppResult<PersonSummary> {
        let txn = self.db.begin().await?;

        let created = director::ActiveModel {
            id: Default::default(),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            age: Set(payload.age),
            image_url: Set(payload.image_url),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!(id = created.id, "created director");

        Ok(created.into())
    }

    pub async fn update(&self, id: i32, payload: PersonPayload) -> AppResult<PersonSummary> {
        let txn = self.db.begin().await?;

        let mut active: director::ActiveModel =
            find_or_404::<director::Entity, _>(&txn, "Director", id).await?.into();
        active.first_name = Set(payload.first_name);
        active.last_name = Set(payload.last_name);
        active.age = Set(payload.age);
        active.image_url = Set(payload.image_url);
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        info!(id, "updated director");

        Ok(updated.into())
    }

    /// Refuses while any movie still references the director.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        find_or_404::<director::Entity, _>(&txn, "Director", id).await?;

        let movies = movie::Entity::find()
            .filter(movie::Column::DirectorId.eq(id))
            .count(&txn)
            .await?;
        if movies > 0 {
            return Err(AppError::conflict(format!(
                "Director with id {id} still has {movies} movie(s)"
            )));
        }

        director::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!(id, "deleted director");

        Ok(())
    }

    async fn with_movies(&self, directors: Vec<director::Model>) -> AppResult<Vec<PersonDetail>> {
        let movies = directors.load_many(movie::Entity, &self.db).await?;

        Ok(directors
            .into_iter()
            .zip(movies)
            .map(|(director, movies)| PersonDetail {
                person: director.into(),
                movies: movies.into_iter().map(Into::into).collect(),
            })
            .collect())
    }
}
