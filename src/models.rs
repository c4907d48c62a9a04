use garde::Validate;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::entities::{actor, director, genre, movie, review};

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct MoviePayload {
    #[garde(length(chars, min = 3, max = 50))]
    pub title: String,
    #[garde(length(chars, max = 500))]
    pub description: String,
    #[garde(range(min = 1900, max = 2026))]
    pub release_year: i32,
    #[garde(length(chars, max = 500))]
    #[serde(default)]
    pub image_url: Option<String>,
    #[garde(skip)]
    pub director_id: i32,
    #[garde(skip)]
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct GenrePayload {
    #[garde(length(chars, min = 2, max = 30))]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Shared by actors and directors.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct PersonPayload {
    #[garde(length(chars, min = 2, max = 50))]
    pub first_name: String,
    #[garde(length(chars, min = 2, max = 50))]
    pub last_name: String,
    #[garde(range(min = 1, max = 120))]
    #[serde(default)]
    pub age: Option<i32>,
    #[garde(length(chars, max = 500))]
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct ReviewPayload {
    #[garde(skip)]
    pub movie_id: i32,
    #[garde(length(chars, min = 2, max = 100))]
    pub reviewer_name: String,
    #[garde(range(min = 1.0, max = 10.0))]
    pub rating: f64,
    #[garde(skip)]
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub actor: Option<String>,
    pub director: Option<String>,
    pub release_year: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ActorFilter {
    pub name: Option<String>,
    pub movie: Option<String>,
    pub genre: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DirectorFilter {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReviewFilter {
    pub movie_id: Option<i32>,
    pub min_rating: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieSummary {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub image_url: Option<String>,
    pub director_id: i32,
    pub rating: Option<f64>,
}

impl From<movie::Model> for MovieSummary {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            release_year: m.release_year,
            image_url: m.image_url,
            director_id: m.director_id,
            rating: m.rating,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub director: Option<PersonSummary>,
    pub genres: Vec<GenreResponse>,
    pub actors: Vec<PersonSummary>,
    pub reviews: Vec<ReviewResponse>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenreResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<genre::Model> for GenreResponse {
    fn from(g: genre::Model) -> Self {
        Self { id: g.id, kind: g.kind }
    }
}

/// Summary shape of an actor or a director.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PersonSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub image_url: Option<String>,
}

impl From<actor::Model> for PersonSummary {
    fn from(a: actor::Model) -> Self {
        Self {
            id: a.id,
            first_name: a.first_name,
            last_name: a.last_name,
            age: a.age,
            image_url: a.image_url,
        }
    }
}

impl From<director::Model> for PersonSummary {
    fn from(d: director::Model) -> Self {
        Self {
            id: d.id,
            first_name: d.first_name,
            last_name: d.last_name,
            age: d.age,
            image_url: d.image_url,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PersonDetail {
    #[serde(flatten)]
    pub person: PersonSummary,
    pub movies: Vec<MovieSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub movie_id: i32,
    pub reviewer_name: String,
    pub rating: f64,
    pub comment: Option<String>,
    pub created_at: Option<Timestamp>,
}

impl From<review::Model> for ReviewResponse {
    fn from(r: review::Model) -> Self {
        Self {
            id: r.id,
            movie_id: r.movie_id,
            reviewer_name: r.reviewer_name,
            rating: r.rating,
            comment: r.comment,
            created_at: Timestamp::from_millisecond(r.created_at).ok(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AverageRating {
    pub movie_id: i32,
    pub movie_title: String,
    pub average_rating: Option<f64>,
    pub total_reviews: u64,
}
