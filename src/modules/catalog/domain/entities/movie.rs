use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Canonical movie identifier, used for every id comparison in the app
pub type MovieId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    pub key: String,
    pub site: String,
}

impl Trailer {
    /// Playable URL for the hosting sites the catalog links to
    pub fn url(&self) -> Option<String> {
        match self.site.as_str() {
            "YouTube" => Some(format!("https://www.youtube.com/watch?v={}", self.key)),
            "Vimeo" => Some(format!("https://vimeo.com/{}", self.key)),
            _ => None,
        }
    }
}

/// Immutable snapshot of a catalog movie.
///
/// List endpoints fill only the summary fields; the detail lookup also fills
/// runtime, genres, companies, cast and trailers. Every optional field
/// defaults when absent so older persisted snapshots still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub trailers: Vec<Trailer>,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: None,
            vote_count: 0,
            runtime: None,
            genres: Vec::new(),
            production_companies: Vec::new(),
            cast: Vec::new(),
            trailers: Vec::new(),
        }
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_date().map(|date| date.year())
    }

    /// True when the record carries the detail-only sub-resources
    pub fn is_detailed(&self) -> bool {
        self.runtime.is_some() || !self.cast.is_empty() || !self.genres.is_empty()
    }

    /// Rating formatted for display, "N/A" when the catalog has no votes
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(average) if average > 0.0 => format!("{:.1} / 10", average),
            _ => "N/A".to_string(),
        }
    }

    pub fn runtime_label(&self) -> Option<String> {
        self.runtime.filter(|minutes| *minutes > 0).map(|minutes| {
            if minutes >= 60 {
                format!("{}h {}m", minutes / 60, minutes % 60)
            } else {
                format!("{}m", minutes)
            }
        })
    }

    pub fn first_trailer(&self) -> Option<&Trailer> {
        self.trailers.first()
    }
}
