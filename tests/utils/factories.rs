/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use moviedeck_lib::modules::catalog::{Genre, Movie, MovieId};
use moviedeck_lib::shared::application::{MoviePage, UPSTREAM_PAGE_SIZE};

pub struct MovieFactory {
    id: MovieId,
    title: String,
    release_date: Option<String>,
    vote_average: Option<f32>,
    poster_path: Option<String>,
    genres: Vec<Genre>,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            id: 1,
            title: "Test Movie".to_string(),
            release_date: None,
            vote_average: None,
            poster_path: None,
            genres: Vec::new(),
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: MovieId) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn released(mut self, date: &str) -> Self {
        self.release_date = Some(date.to_string());
        self
    }

    pub fn rating(mut self, rating: f32) -> Self {
        self.vote_average = Some(rating);
        self
    }

    pub fn poster(mut self, path: &str) -> Self {
        self.poster_path = Some(path.to_string());
        self
    }

    pub fn genre(mut self, id: u32, name: &str) -> Self {
        self.genres.push(Genre {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn build(self) -> Movie {
        let mut movie = Movie::new(self.id, self.title);
        movie.release_date = self.release_date;
        movie.vote_average = self.vote_average;
        movie.poster_path = self.poster_path;
        movie.genres = self.genres;
        movie
    }
}

/// Some well-known titles
pub fn fight_club() -> Movie {
    MovieFactory::new()
        .id(550)
        .title("Fight Club")
        .released("1999-10-15")
        .rating(8.4)
        .poster("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg")
        .genre(18, "Drama")
        .build()
}

pub fn alien() -> Movie {
    MovieFactory::new()
        .id(348)
        .title("Alien")
        .released("1979-05-25")
        .rating(8.1)
        .genre(27, "Horror")
        .genre(878, "Science Fiction")
        .build()
}

/// `count` movies with consecutive ids starting at `first_id`
pub fn movies(first_id: MovieId, count: usize) -> Vec<Movie> {
    (0..count as MovieId)
        .map(|offset| {
            let id = first_id + offset;
            MovieFactory::new()
                .id(id)
                .title(format!("Movie {}", id))
                .build()
        })
        .collect()
}

/// A page shaped like the catalog's: `count` items, full when `count` is 20
pub fn page(page: u32, first_id: MovieId, count: usize) -> MoviePage<Movie> {
    let total_pages = if count >= UPSTREAM_PAGE_SIZE { page + 1 } else { page };
    MoviePage::new(movies(first_id, count), page, total_pages)
}

pub fn genres() -> Vec<Genre> {
    vec![
        Genre {
            id: 28,
            name: "Action".to_string(),
        },
        Genre {
            id: 35,
            name: "Comedy".to_string(),
        },
    ]
}
