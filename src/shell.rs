//! Line-oriented console front-end
//!
//! Stands in for the view layer: every line is parsed into a command and
//! dispatched to the browse commands.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::modules::browse::commands::{self, GetMovieDetailsRequest, SearchMoviesRequest};
use crate::modules::browse::MovieStore;
use crate::modules::catalog::{ImageSize, Movie, MovieFilter, MovieId, TmdbAdapter};

const HELP: &str = "\
commands:
  trending                         list movies trending this week
  search <query> [--genre ID] [--year YYYY] [--min RATING]
  more                             load the next page of results
  show <id>                        movie details
  fav <id>                         add or remove a favorite
  favs                             list favorites
  genres                           list genre ids for --genre
  dark                             toggle dark mode
  clear                            forget the current search
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Trending,
    Search { query: String, filter: MovieFilter },
    More,
    Show(MovieId),
    Favorite(MovieId),
    Favorites,
    Genres,
    Dark,
    Clear,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err("type 'help' for commands".to_string());
        };
        let rest: Vec<&str> = words.collect();

        match head {
            "trending" => Ok(ShellCommand::Trending),
            "search" => parse_search(&rest),
            "more" => Ok(ShellCommand::More),
            "show" => parse_id(&rest).map(ShellCommand::Show),
            "fav" => parse_id(&rest).map(ShellCommand::Favorite),
            "favs" => Ok(ShellCommand::Favorites),
            "genres" => Ok(ShellCommand::Genres),
            "dark" => Ok(ShellCommand::Dark),
            "clear" => Ok(ShellCommand::Clear),
            "help" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(format!("unknown command '{}'", other)),
        }
    }
}

fn parse_id(args: &[&str]) -> Result<MovieId, String> {
    match args {
        [id] => id
            .parse()
            .map_err(|_| format!("'{}' is not a movie id", id)),
        _ => Err("expected exactly one movie id".to_string()),
    }
}

fn parse_search(args: &[&str]) -> Result<ShellCommand, String> {
    let mut filter = MovieFilter::new();
    let mut terms = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .copied()
                .ok_or_else(|| format!("{} needs a value", flag))
        };
        match *arg {
            "--genre" => {
                let raw = value("--genre")?;
                filter.genre_id = Some(raw.parse().map_err(|_| format!("bad genre id '{}'", raw))?);
            }
            "--year" => {
                let raw = value("--year")?;
                filter.year = Some(raw.parse().map_err(|_| format!("bad year '{}'", raw))?);
            }
            "--min" => {
                let raw = value("--min")?;
                filter.min_rating = Some(raw.parse().map_err(|_| format!("bad rating '{}'", raw))?);
            }
            term => terms.push(term),
        }
    }

    Ok(ShellCommand::Search {
        query: terms.join(" "),
        filter,
    })
}

/// Read commands from stdin until `quit` or end of input
pub async fn run(store: Arc<MovieStore>, adapter: Arc<TmdbAdapter>) -> anyhow::Result<()> {
    let theme = if store.dark_mode() { "dark" } else { "light" };
    println!("moviedeck ({} mode) - type 'help' for commands", theme);
    print_movies("Trending this week", &store.trending());
    let last_query = store.last_query();
    if !last_query.is_empty() {
        print_movies(&format!("Results for '{}'", last_query), &store.results());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match ShellCommand::parse(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => dispatch(command, &store, &adapter).await,
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}

async fn dispatch(command: ShellCommand, store: &MovieStore, adapter: &TmdbAdapter) {
    match command {
        ShellCommand::Trending => match commands::refresh_trending(store).await {
            Ok(movies) => print_movies("Trending this week", &movies),
            Err(e) => println!("error: {}", e),
        },
        ShellCommand::Search { query, filter } => {
            let request = SearchMoviesRequest { query, filter };
            match commands::search_movies(request, store).await {
                Ok(view) => {
                    print_movies(&format!("Results for '{}'", view.query), &view.results);
                    if view.has_more {
                        println!("(more available: type 'more')");
                    }
                }
                Err(e) => println!("error: {}", e),
            }
        }
        ShellCommand::More => match commands::load_more_results(store).await {
            Ok(view) => {
                print_movies(&format!("Results for '{}'", view.query), &view.results);
                if !view.has_more {
                    println!("(end of results)");
                }
            }
            Err(e) => println!("error: {}", e),
        },
        ShellCommand::Show(id) => {
            match commands::get_movie_details(GetMovieDetailsRequest { id }, store).await {
                Ok(detail) => {
                    if let Some(movie) = detail.movie {
                        print_details(&movie, store.is_favorite(movie.id), adapter);
                    }
                }
                Err(e) => println!("error: {}", e),
            }
        }
        ShellCommand::Favorite(id) => match find_movie(store, id).await {
            Some(movie) => match commands::toggle_favorite(movie, store) {
                Ok(response) if response.is_favorite => {
                    println!("added {} ({} favorites)", response.id, response.total)
                }
                Ok(response) => println!("removed {} ({} favorites)", response.id, response.total),
                Err(e) => println!("error: {}", e),
            },
            None => println!("movie {} not found", id),
        },
        ShellCommand::Favorites => print_movies("My favorites", &commands::get_favorites(store)),
        ShellCommand::Genres => match commands::get_genres(store).await {
            Ok(genres) => {
                for genre in genres {
                    println!("  {:>6}  {}", genre.id, genre.name);
                }
            }
            Err(e) => println!("error: {}", e),
        },
        ShellCommand::Dark => match commands::toggle_dark_mode(store) {
            Ok(true) => println!("dark mode on"),
            Ok(false) => println!("dark mode off"),
            Err(e) => println!("error: {}", e),
        },
        ShellCommand::Clear => {
            commands::clear_search(store);
            println!("search cleared");
        }
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => {}
    }
}

/// Snapshot for a favorite toggle: whatever is on screen, else a fresh lookup
async fn find_movie(store: &MovieStore, id: MovieId) -> Option<Movie> {
    let state = store.snapshot();
    let on_screen = state
        .detail
        .movie
        .into_iter()
        .chain(state.favorites.movies().iter().cloned())
        .chain(state.search.results)
        .chain(state.trending)
        .find(|movie| movie.id == id);

    if on_screen.is_some() {
        return on_screen;
    }

    store.load_movie(id).await.ok()?;
    store.detail().movie.filter(|movie| movie.id == id)
}

fn print_movies(title: &str, movies: &[Movie]) {
    println!("{} ({})", title, movies.len());
    if movies.is_empty() {
        println!("  nothing to show");
    }
    for movie in movies {
        let year = movie
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "  {:>8}  {} ({}) - {}",
            movie.id,
            movie.title,
            year,
            movie.rating_label()
        );
    }
}

fn print_details(movie: &Movie, is_favorite: bool, adapter: &TmdbAdapter) {
    println!("{}", movie.title);
    if let Some(overview) = &movie.overview {
        println!("  {}", overview);
    }
    println!(
        "  Release date: {}",
        movie.release_date.as_deref().unwrap_or("N/A")
    );
    println!("  Rating: {} ({} votes)", movie.rating_label(), movie.vote_count);
    if let Some(runtime) = movie.runtime_label() {
        println!("  Runtime: {}", runtime);
    }
    if !movie.genres.is_empty() {
        let names: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
        println!("  Genres: {}", names.join(", "));
    }
    for member in movie.cast.iter().take(5) {
        match &member.character {
            Some(character) => println!("  {} as {}", member.name, character),
            None => println!("  {}", member.name),
        }
    }
    if let Some(url) = movie.first_trailer().and_then(|t| t.url()) {
        println!("  Trailer: {}", url);
    }
    println!("  Poster: {}", adapter.poster_url(movie, ImageSize::W500));
    println!(
        "  {}",
        if is_favorite {
            "In favorites (fav to remove)"
        } else {
            "Not in favorites (fav to add)"
        }
    );
}
