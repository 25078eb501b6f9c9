use super::models::{
    CastCredit, Genre as TmdbGenre, MovieDetails, MovieSummary, ProductionCompany as TmdbCompany,
    Video,
};
use crate::modules::catalog::domain::{CastMember, Genre, Movie, ProductionCompany, Trailer};

const UNTITLED: &str = "Untitled";
const PLAYABLE_SITES: [&str; 2] = ["YouTube", "Vimeo"];

/// Converts TMDB wire records into domain movies
#[derive(Debug, Clone, Default)]
pub struct TmdbMapper;

impl TmdbMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_summary(&self, source: MovieSummary) -> Movie {
        Movie {
            id: source.id,
            title: pick_title(source.title, source.original_title),
            overview: non_empty(source.overview),
            poster_path: non_empty(source.poster_path),
            backdrop_path: non_empty(source.backdrop_path),
            release_date: non_empty(source.release_date),
            vote_average: source.vote_average,
            vote_count: source.vote_count.unwrap_or(0),
            ..Movie::new(source.id, String::new())
        }
    }

    pub fn map_summaries(&self, sources: Vec<MovieSummary>) -> Vec<Movie> {
        sources
            .into_iter()
            .map(|source| self.map_summary(source))
            .collect()
    }

    pub fn map_details(&self, source: MovieDetails) -> Movie {
        let cast = source
            .credits
            .map(|credits| self.map_cast(credits.cast))
            .unwrap_or_default();
        let trailers = source
            .videos
            .map(|videos| self.map_trailers(videos.results))
            .unwrap_or_default();

        Movie {
            id: source.id,
            title: pick_title(source.title, source.original_title),
            overview: non_empty(source.overview),
            poster_path: non_empty(source.poster_path),
            backdrop_path: non_empty(source.backdrop_path),
            release_date: non_empty(source.release_date),
            vote_average: source.vote_average,
            vote_count: source.vote_count.unwrap_or(0),
            runtime: source.runtime,
            genres: source
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|genre| self.map_genre(genre))
                .collect(),
            production_companies: source
                .production_companies
                .unwrap_or_default()
                .into_iter()
                .map(map_company)
                .collect(),
            cast,
            trailers,
        }
    }

    pub fn map_genre(&self, source: TmdbGenre) -> Genre {
        Genre {
            id: source.id,
            name: source.name,
        }
    }

    /// Cast in billing order
    fn map_cast(&self, mut credits: Vec<CastCredit>) -> Vec<CastMember> {
        credits.sort_by_key(|credit| credit.order.unwrap_or(u32::MAX));
        credits
            .into_iter()
            .map(|credit| CastMember {
                id: credit.id,
                name: credit.name,
                character: non_empty(credit.character),
                profile_path: non_empty(credit.profile_path),
            })
            .collect()
    }

    /// Playable videos with official trailers ahead of teasers and clips
    fn map_trailers(&self, videos: Vec<Video>) -> Vec<Trailer> {
        let mut playable: Vec<Video> = videos
            .into_iter()
            .filter(|video| PLAYABLE_SITES.contains(&video.site.as_str()))
            .collect();

        // Stable sort keeps the service's order within each rank
        playable.sort_by_key(|video| {
            let is_trailer = video.r#type.as_deref() == Some("Trailer");
            let is_official = video.official.unwrap_or(false);
            (!is_trailer, !is_official)
        });

        playable
            .into_iter()
            .map(|video| Trailer {
                key: video.key,
                site: video.site,
            })
            .collect()
    }
}

fn map_company(source: TmdbCompany) -> ProductionCompany {
    ProductionCompany {
        id: source.id,
        name: source.name,
    }
}

fn pick_title(title: Option<String>, original_title: Option<String>) -> String {
    non_empty(title)
        .or_else(|| non_empty(original_title))
        .unwrap_or_else(|| UNTITLED.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::infrastructure::tmdb::models::{Credits, VideosResponse};

    fn summary(id: u32) -> MovieSummary {
        MovieSummary {
            id,
            title: Some("Heat".to_string()),
            original_title: None,
            overview: Some(String::new()),
            poster_path: Some("/heat.jpg".to_string()),
            backdrop_path: None,
            release_date: Some("1995-12-15".to_string()),
            vote_average: Some(7.9),
            vote_count: Some(6000),
            popularity: Some(40.0),
            genre_ids: Some(vec![28, 80]),
        }
    }

    fn video(key: &str, site: &str, kind: &str, official: bool) -> Video {
        Video {
            key: key.to_string(),
            site: site.to_string(),
            r#type: Some(kind.to_string()),
            official: Some(official),
        }
    }

    #[test]
    fn maps_summary_fields() {
        let movie = TmdbMapper::new().map_summary(summary(949));
        assert_eq!(movie.id, 949);
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.overview, None);
        assert_eq!(movie.poster_path.as_deref(), Some("/heat.jpg"));
        assert_eq!(movie.vote_count, 6000);
        assert!(movie.cast.is_empty());
    }

    #[test]
    fn falls_back_to_original_title() {
        let mut source = summary(1);
        source.title = None;
        source.original_title = Some("Le Samouraï".to_string());
        assert_eq!(TmdbMapper::new().map_summary(source).title, "Le Samouraï");

        let mut source = summary(2);
        source.title = Some("  ".to_string());
        assert_eq!(TmdbMapper::new().map_summary(source).title, "Untitled");
    }

    #[test]
    fn maps_details_with_credits_and_videos() {
        let details = MovieDetails {
            id: 949,
            title: Some("Heat".to_string()),
            original_title: None,
            overview: Some("A group of high-end professional thieves".to_string()),
            poster_path: None,
            backdrop_path: None,
            release_date: Some("1995-12-15".to_string()),
            vote_average: Some(7.9),
            vote_count: Some(6000),
            runtime: Some(170),
            genres: Some(vec![TmdbGenre {
                id: 80,
                name: "Crime".to_string(),
            }]),
            production_companies: None,
            tagline: None,
            credits: Some(Credits {
                cast: vec![
                    CastCredit {
                        id: 2,
                        name: "Robert De Niro".to_string(),
                        character: Some("Neil McCauley".to_string()),
                        profile_path: None,
                        order: Some(1),
                    },
                    CastCredit {
                        id: 1,
                        name: "Al Pacino".to_string(),
                        character: Some("Vincent Hanna".to_string()),
                        profile_path: None,
                        order: Some(0),
                    },
                ],
            }),
            videos: Some(VideosResponse {
                results: vec![
                    video("teaser", "YouTube", "Teaser", true),
                    video("elsewhere", "Dailymotion", "Trailer", true),
                    video("fan", "YouTube", "Trailer", false),
                    video("main", "YouTube", "Trailer", true),
                ],
            }),
        };

        let movie = TmdbMapper::new().map_details(details);
        assert_eq!(movie.runtime, Some(170));
        assert_eq!(movie.genres[0].name, "Crime");
        assert!(movie.production_companies.is_empty());

        let cast: Vec<&str> = movie.cast.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(cast, vec!["Al Pacino", "Robert De Niro"]);

        let keys: Vec<&str> = movie.trailers.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["main", "fan", "teaser"]);
        assert!(movie.is_detailed());
    }
}
