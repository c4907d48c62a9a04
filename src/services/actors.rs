use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType,
    LoaderTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::{contains_ci, find_or_404, non_empty};
use crate::{
    entities::{actor, genre, movie, movie_actor, movie_genre},
    error::{AppError, AppResult},
    models::{ActorFilter, PersonDetail, PersonPayload, PersonSummary},
};

#[derive(Clone)]
pub struct ActorService {
    db: DatabaseConnection,
}

impl ActorService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// `movie` and `genre` constrain the same joined movie.
    pub async fn list(&self, filter: &ActorFilter) -> AppResult<Vec<PersonDetail>> {
        let mut query = actor::Entity::find().select_only().column(actor::Column::Id).distinct();

        if let Some(name) = non_empty(&filter.name) {
            query = query.filter(
                Condition::any()
                    .add(contains_ci((actor::Entity, actor::Column::FirstName), name))
                    .add(contains_ci((actor::Entity, actor::Column::LastName), name)),
            );
        }

        let title = non_empty(&filter.movie);
        let kind = non_empty(&filter.genre);
        if title.is_some() || kind.is_some() {
            query = query
                .join(JoinType::InnerJoin, actor::Relation::MovieActor.def())
                .join(JoinType::InnerJoin, movie_actor::Relation::Movie.def());
        }
        if let Some(title) = title {
            query = query.filter(contains_ci((movie::Entity, movie::Column::Title), title));
        }
        if let Some(kind) = kind {
            query = query
                .join(JoinType::InnerJoin, movie::Relation::MovieGenre.def())
                .join(JoinType::InnerJoin, movie_genre::Relation::Genre.def())
                .filter(genre::Column::Kind.eq(kind));
        }

        let ids: Vec<i32> = query.into_tuple().all(&self.db).await?;
        debug!(?filter, matches = ids.len(), "filtered actors");

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let actors = actor::Entity::find()
            .filter(actor::Column::Id.is_in(ids))
            .order_by_asc(actor::Column::Id)
            .all(&self.db)
            .await?;

        self.with_movies(actors).await
    }

    pub async fn get(&self, id: i32) -> AppResult<PersonDetail> {
        let actor = find_or_404::<actor::Entity, _>(&self.db, "Actor", id).await?;
        let mut details = self.with_movies(vec![actor]).await?;
        details.pop().ok_or(AppError::not_found("Actor", id))
    }

    pub async fn create(&self, payload: PersonPayload) -> AppResult<PersonSummary> {
        let txn = self.db.begin().await?;

        let created = actor::ActiveModel {
            id: Default::default(),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            age: Set(payload.age),
            image_url: Set(payload.image_url),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!(id = created.id, "created actor");

        Ok(created.into())
    }

    pub async fn update(&self, id: i32, payload: PersonPayload) -> AppResult<PersonSummary> {
        let txn = self.db.begin().await?;

        let mut active: actor::ActiveModel =
            find_or_404::<actor::Entity, _>(&txn, "Actor", id).await?.into();
        active.first_name = Set(payload.first_name);
        active.last_name = Set(payload.last_name);
        active.age = Set(payload.age);
        active.image_url = Set(payload.image_url);
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        info!(id, "updated actor");

        Ok(updated.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        find_or_404::<actor::Entity, _>(&txn, "Actor", id).await?;
        movie_actor::Entity::delete_many()
            .filter(movie_actor::Column::ActorId.eq(id))
            .exec(&txn)
            .await?;
        actor::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!(id, "deleted actor");

        Ok(())
    }

    async fn with_movies(&self, actors: Vec<actor::Model>) -> AppResult<Vec<PersonDetail>> {
        let movies = actors.load_many_to_many(movie::Entity, movie_actor::Entity, &self.db).await?;

        Ok(actors
            .into_iter()
            .zip(movies)
            .map(|(actor, movies)| PersonDetail {
                person: actor.into(),
                movies: movies.into_iter().map(Into::into).collect(),
            })
            .collect())
    }
}
