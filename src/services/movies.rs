use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType,
    LoaderTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::{contains_ci, find_or_404, non_empty};
use crate::{
    entities::{actor, director, genre, movie, movie_actor, movie_genre, review},
    error::{AppError, AppResult},
    models::{MovieDetail, MovieFilter, MoviePayload, MovieSummary},
};

#[derive(Clone)]
pub struct MovieService {
    db: DatabaseConnection,
}

impl MovieService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: &MovieFilter) -> AppResult<Vec<MovieDetail>> {
        let mut query = movie::Entity::find().select_only().column(movie::Column::Id).distinct();

        if let Some(title) = non_empty(&filter.title) {
            query = query.filter(contains_ci((movie::Entity, movie::Column::Title), title));
        }
        if let Some(kind) = non_empty(&filter.genre) {
            query = query
                .join(JoinType::InnerJoin, movie::Relation::MovieGenre.def())
                .join(JoinType::InnerJoin, movie_genre::Relation::Genre.def())
                .filter(genre::Column::Kind.eq(kind));
        }
        if let Some(name) = non_empty(&filter.actor) {
            query = query
                .join(JoinType::InnerJoin, movie::Relation::MovieActor.def())
                .join(JoinType::InnerJoin, movie_actor::Relation::Actor.def())
                .filter(
                    Condition::any()
                        .add(contains_ci((actor::Entity, actor::Column::FirstName), name))
                        .add(contains_ci((actor::Entity, actor::Column::LastName), name)),
                );
        }
        if let Some(name) = non_empty(&filter.director) {
            query = query.join(JoinType::InnerJoin, movie::Relation::Director.def()).filter(
                Condition::any()
                    .add(contains_ci((director::Entity, director::Column::FirstName), name))
                    .add(contains_ci((director::Entity, director::Column::LastName), name)),
            );
        }
        if let Some(year) = filter.release_year {
            query = query.filter(movie::Column::ReleaseYear.eq(year));
        }

        let ids: Vec<i32> = query.into_tuple().all(&self.db).await?;
        debug!(?filter, matches = ids.len(), "filtered movies");

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let movies = movie::Entity::find()
            .filter(movie::Column::Id.is_in(ids))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;

        self.with_details(movies).await
    }

    pub async fn get(&self, id: i32) -> AppResult<MovieDetail> {
        let movie = find_or_404::<movie::Entity, _>(&self.db, "Movie", id).await?;
        let mut details = self.with_details(vec![movie]).await?;
        details.pop().ok_or(AppError::not_found("Movie", id))
    }

    pub async fn create(&self, payload: MoviePayload) -> AppResult<MovieSummary> {
        let txn = self.db.begin().await?;

        find_or_404::<director::Entity, _>(&txn, "Director", payload.director_id).await?;

        let duplicate = movie::Entity::find()
            .filter(movie::Column::Title.eq(payload.title.as_str()))
            .one(&txn)
            .await?;
        if duplicate.is_some() {
            return Err(AppError::conflict(format!(
                "Movie with title '{}' already exists",
                payload.title
            )));
        }

        let created = movie::ActiveModel {
            id: Default::default(),
            title: Set(payload.title),
            description: Set(payload.description),
            release_year: Set(payload.release_year),
            image_url: Set(payload.image_url),
            director_id: Set(payload.director_id),
            rating: Set(payload.rating),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!(id = created.id, title = %created.title, "created movie");

        Ok(created.into())
    }

    pub async fn update(&self, id: i32, payload: MoviePayload) -> AppResult<MovieSummary> {
        let txn = self.db.begin().await?;

        let existing = find_or_404::<movie::Entity, _>(&txn, "Movie", id).await?;
        find_or_404::<director::Entity, _>(&txn, "Director", payload.director_id).await?;

        let mut active: movie::ActiveModel = existing.into();
        active.title = Set(payload.title);
        active.description = Set(payload.description);
        active.release_year = Set(payload.release_year);
        active.image_url = Set(payload.image_url);
        active.director_id = Set(payload.director_id);
        active.rating = Set(payload.rating);
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        info!(id, "updated movie");

        Ok(updated.into())
    }

    /// Removes the movie together with its reviews and genre/actor memberships.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        find_or_404::<movie::Entity, _>(&txn, "Movie", id).await?;

        movie_genre::Entity::delete_many()
            .filter(movie_genre::Column::MovieId.eq(id))
            .exec(&txn)
            .await?;
        movie_actor::Entity::delete_many()
            .filter(movie_actor::Column::MovieId.eq(id))
            .exec(&txn)
            .await?;
        let reviews = review::Entity::delete_many()
            .filter(review::Column::MovieId.eq(id))
            .exec(&txn)
            .await?;
        movie::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!(id, reviews_removed = reviews.rows_affected, "deleted movie");

        Ok(())
    }

    pub async fn add_genre(&self, id: i32, genre_id: i32) -> AppResult<MovieDetail> {
        let txn = self.db.begin().await?;

        find_or_404::<movie::Entity, _>(&txn, "Movie", id).await?;
        find_or_404::<genre::Entity, _>(&txn, "Genre", genre_id).await?;

        let linked = movie_genre::Entity::find_by_id((id, genre_id)).one(&txn).await?;
        if linked.is_none() {
            movie_genre::ActiveModel { movie_id: Set(id), genre_id: Set(genre_id) }
                .insert(&txn)
                .await?;
            info!(id, genre_id, "linked genre to movie");
        }

        txn.commit().await?;
        self.get(id).await
    }

    pub async fn remove_genre(&self, id: i32, genre_id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        find_or_404::<movie::Entity, _>(&txn, "Movie", id).await?;
        let removed = movie_genre::Entity::delete_by_id((id, genre_id)).exec(&txn).await?;
        if removed.rows_affected == 0 {
            return Err(AppError::not_found("Genre", genre_id));
        }

        txn.commit().await?;
        info!(id, genre_id, "unlinked genre from movie");

        Ok(())
    }

    pub async fn add_actor(&self, id: i32, actor_id: i32) -> AppResult<MovieDetail> {
        let txn = self.db.begin().await?;

        find_or_404::<movie::Entity, _>(&txn, "Movie", id).await?;
        find_or_404::<actor::Entity, _>(&txn, "Actor", actor_id).await?;

        let linked = movie_actor::Entity::find_by_id((id, actor_id)).one(&txn).await?;
        if linked.is_none() {
            movie_actor::ActiveModel { movie_id: Set(id), actor_id: Set(actor_id) }
                .insert(&txn)
                .await?;
            info!(id, actor_id, "linked actor to movie");
        }

        txn.commit().await?;
        self.get(id).await
    }

    pub async fn remove_actor(&self, id: i32, actor_id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        find_or_404::<movie::Entity, _>(&txn, "Movie", id).await?;
        let removed = movie_actor::Entity::delete_by_id((id, actor_id)).exec(&txn).await?;
        if removed.rows_affected == 0 {
            return Err(AppError::not_found("Actor", actor_id));
        }

        txn.commit().await?;
        info!(id, actor_id, "unlinked actor from movie");

        Ok(())
    }

    async fn with_details(&self, movies: Vec<movie::Model>) -> AppResult<Vec<MovieDetail>> {
        let directors = movies.load_one(director::Entity, &self.db).await?;
        let genres = movies.load_many_to_many(genre::Entity, movie_genre::Entity, &self.db).await?;
        let actors = movies.load_many_to_many(actor::Entity, movie_actor::Entity, &self.db).await?;
        let reviews = movies.load_many(review::Entity, &self.db).await?;

        let details = movies
            .into_iter()
            .zip(directors)
            .zip(genres)
            .zip(actors)
            .zip(reviews)
            .map(|((((movie, director), genres), actors), reviews)| MovieDetail {
                movie: movie.into(),
                director: director.map(Into::into),
                genres: genres.into_iter().map(Into::into).collect(),
                actors: actors.into_iter().map(Into::into).collect(),
                reviews: reviews.into_iter().map(Into::into).collect(),
            })
            .collect();

        Ok(details)
    }
}
