mod actors;
mod directors;
mod genres;
mod movies;
mod reviews;

pub use actors::ActorService;
pub use directors::DirectorService;
pub use genres::GenreService;
pub use movies::MovieService;
pub use reviews::ReviewService;

use sea_orm::{
    ConnectionTrait, EntityTrait, PrimaryKeyTrait,
    sea_query::{Expr, Func, IntoColumnRef, SimpleExpr},
};

use crate::error::{AppError, AppResult};

/// Case-insensitive substring match, `lower(col) LIKE '%needle%'`.
fn contains_ci<C: IntoColumnRef>(col: C, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(format!("%{}%", needle.to_lowercase()))
}

/// Empty query parameters count as absent.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Loads a row by id or fails with `NotFound` naming `entity`.
async fn find_or_404<E, C>(conn: &C, entity: &'static str, id: i32) -> AppResult<E::Model>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    E::find_by_id(id).one(conn).await?.ok_or(AppError::not_found(entity, id))
}
