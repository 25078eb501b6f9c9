use serde::{Deserialize, Serialize};

pub const POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// Image widths served by the catalog's image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageSize {
    W185,
    W342,
    #[default]
    W500,
    W780,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W185 => "w185",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::Original => "original",
        }
    }
}

/// Build full image URL from a catalog file path
pub fn build_image_url(image_base_url: &str, file_path: &str, size: ImageSize) -> String {
    format!(
        "{}/{}{}",
        image_base_url.trim_end_matches('/'),
        size.as_str(),
        file_path
    )
}

/// Image URL for an optional path, falling back to the placeholder poster
pub fn image_url_or_placeholder(
    image_base_url: &str,
    file_path: Option<&str>,
    size: ImageSize,
) -> String {
    match file_path {
        Some(path) if !path.is_empty() => build_image_url(image_base_url, path, size),
        _ => POSTER_PLACEHOLDER.to_string(),
    }
}
