use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
    sea_query::{Expr, Func, SimpleExpr},
};
use tracing::{debug, info};

use super::find_or_404;
use crate::{
    entities::{movie, review},
    error::AppResult,
    models::{AverageRating, ReviewFilter, ReviewPayload, ReviewResponse},
};

#[derive(Clone)]
pub struct ReviewService {
    db: DatabaseConnection,
}

impl ReviewService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: &ReviewFilter) -> AppResult<Vec<ReviewResponse>> {
        let mut query = review::Entity::find().order_by_asc(review::Column::Id);

        if let Some(movie_id) = filter.movie_id {
            query = query.filter(review::Column::MovieId.eq(movie_id));
        }
        if let Some(min_rating) = filter.min_rating {
            query = query.filter(review::Column::Rating.gte(min_rating));
        }

        let reviews = query.all(&self.db).await?;
        debug!(?filter, matches = reviews.len(), "filtered reviews");

        Ok(reviews.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> AppResult<ReviewResponse> {
        Ok(find_or_404::<review::Entity, _>(&self.db, "Review", id).await?.into())
    }

    pub async fn create(&self, payload: ReviewPayload) -> AppResult<ReviewResponse> {
        let txn = self.db.begin().await?;

        find_or_404::<movie::Entity, _>(&txn, "Movie", payload.movie_id).await?;

        let created = review::ActiveModel {
            id: Default::default(),
            movie_id: Set(payload.movie_id),
            reviewer_name: Set(payload.reviewer_name),
            rating: Set(payload.rating),
            comment: Set(payload.comment),
            created_at: Set(now_ms()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!(id = created.id, movie_id = created.movie_id, "created review");

        Ok(created.into())
    }

    /// Full replace; `created_at` is kept.
    pub async fn update(&self, id: i32, payload: ReviewPayload) -> AppResult<ReviewResponse> {
        let txn = self.db.begin().await?;

        let existing = find_or_404::<review::Entity, _>(&txn, "Review", id).await?;
        find_or_404::<movie::Entity, _>(&txn, "Movie", payload.movie_id).await?;

        let mut active: review::ActiveModel = existing.into();
        active.movie_id = Set(payload.movie_id);
        active.reviewer_name = Set(payload.reviewer_name);
        active.rating = Set(payload.rating);
        active.comment = Set(payload.comment);
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        info!(id, "updated review");

        Ok(updated.into())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        find_or_404::<review::Entity, _>(&txn, "Review", id).await?;
        review::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!(id, "deleted review");

        Ok(())
    }

    pub async fn average_for_movie(&self, movie_id: i32) -> AppResult<AverageRating> {
        let movie = find_or_404::<movie::Entity, _>(&self.db, "Movie", movie_id).await?;

        let (average, total): (Option<f64>, i64) = review::Entity::find()
            .select_only()
            .column_as(
                SimpleExpr::from(Func::avg(Expr::col((review::Entity, review::Column::Rating)))),
                "average",
            )
            .column_as(review::Column::Id.count(), "total")
            .filter(review::Column::MovieId.eq(movie_id))
            .into_tuple()
            .one(&self.db)
            .await?
            .unwrap_or((None, 0));

        Ok(AverageRating {
            movie_id,
            movie_title: movie.title,
            average_rating: rounded(average, total),
            total_reviews: total.max(0) as u64,
        })
    }
}

/// Two-decimal rounding; `None` when there are no ratings.
fn rounded(average: Option<f64>, total: i64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    average.map(|mean| (mean * 100.0).round() / 100.0)
}

fn now_ms() -> i64 {
    jiff::Timestamp::now().as_millisecond()
}
