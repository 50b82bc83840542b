//! Static category-code to genre-label table
//!
//! Video records carry a numeric `categoryId`; this table maps the known
//! codes onto the genre labels used in metadata records.

/// Genre label for a numeric category code
pub fn genre_for_code(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Unknown"),
        1 => Some("Film & Animation"),
        2 => Some("Autos & Vehicles"),
        10 => Some("Music"),
        15 => Some("Pets & Animals"),
        17 => Some("Sports"),
        18 => Some("Short Movies"),
        19 => Some("Travel & Events"),
        20 => Some("Gaming"),
        21 => Some("Videoblogging"),
        22 => Some("People & Blogs"),
        23 => Some("Comedy"),
        24 => Some("Entertainment"),
        25 => Some("News & Politics"),
        26 => Some("Howto & Style"),
        27 => Some("Education"),
        28 => Some("Science & Technology"),
        29 => Some("Nonprofits & Activism"),
        30 => Some("Movies"),
        31 => Some("Anime/Animation"),
        32 => Some("Action/Adventure"),
        33 => Some("Classics"),
        34 => Some("Comedy"),
        35 => Some("Documentary"),
        36 => Some("Drama"),
        37 => Some("Family"),
        38 => Some("Foreign"),
        39 => Some("Horror"),
        40 => Some("Sci-Fi/Fantasy"),
        41 => Some("Thriller"),
        42 => Some("Shorts"),
        43 => Some("Shows"),
        44 => Some("Trailers"),
        _ => None,
    }
}

/// Genre label for the API's string `categoryId`
///
/// An unparseable id maps to code 0 ("Unknown"); a parseable but unknown
/// code yields `None`.
pub fn genre_for_id(id: &str) -> Option<&'static str> {
    genre_for_code(id.parse().unwrap_or(0))
}
