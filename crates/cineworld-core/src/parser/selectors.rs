//! Structural selectors for Cineworld branch pages

/// Short description of the branch
pub const BRANCH_DESCRIPTION: &str = ".subheading";
/// Wrapper around the day selector buttons
pub const DAYS_WRAPPER: &str = ".qb-days-group";
/// A single day selector button, within `DAYS_WRAPPER`
pub const DAY_BUTTON: &str = ".btn-default";

/// One film and everything shown for it
pub const FILM_WRAPPER: &str = ".qb-movie";
pub const FILM_NAME: &str = ".qb-movie-name";
pub const FILM_LINK: &str = ".qb-movie-link";
pub const FILM_POSTER_IMAGE: &str = ".movie-poster-container img";
pub const RATING_ICON: &str = ".rating-icon";
pub const FILM_GENRE: &str = ".qb-movie-info-wrapper .mr-sm";
pub const FILM_DURATION: &str = ".qb-movie-info-wrapper .mr-xs";

/// Present only for films that can be booked
pub const SCREENING_ATTRIBUTES: &str = ".qb-screening-attributes";
/// One row per screening type (2D, IMAX, ...)
pub const SCREENING_ROW: &str = ".qb-movie-info-column";
pub const SCREENING_TAG: &str = ".qb-screening-attributes span";
pub const MOVIE_ATTRIBUTES: &str = ".qb-movie-attributes";
/// A showtime button, carrying the booking link in `data-url`
pub const TIME_BUTTON: &str = ".btn-primary";

/// Genre text is followed by a separator before the duration
pub const GENRE_SEPARATOR: &str = " |";
/// Marks subtitled screenings within `MOVIE_ATTRIBUTES`
pub const SUBTITLED_MARKER: &str = "Subtitled";
