//! Film listings parser
//!
//! Parses every film container on a branch page into a [`Film`], including
//! its screening types and the showtimes within each.

use scraper::ElementRef;

use crate::dates::{time_from_offset, Clock};
use crate::types::{Film, Poster, Rating, Screening, Showtime};

use super::query;
use super::selectors;
use super::ExtractionContext;

/// Parse all films listed on the page, in page order.
pub fn parse_films(ctx: &ExtractionContext<'_>) -> Vec<Film> {
    query::find_all(ctx.root(), selectors::FILM_WRAPPER)
        .into_iter()
        .map(|film| parse_film(film, ctx.clock()))
        .collect()
}

/// Parse a single film container.
pub fn parse_film(film: ElementRef<'_>, clock: &dyn Clock) -> Film {
    let duration_minutes = film_duration(film);

    Film {
        title: query::text(film, selectors::FILM_NAME),
        url: query::attribute(film, "href", Some(selectors::FILM_LINK)),
        poster: Poster {
            url: film_poster_url(film),
        },
        rating: Rating {
            url: query::attribute(film, "src", Some(selectors::RATING_ICON)),
            alt: query::attribute(film, "alt", Some(selectors::RATING_ICON)),
        },
        genre: film_genre(film),
        duration_minutes,
        screenings: film_screenings(film, duration_minutes, clock),
    }
}

/// Poster URL of a film.
///
/// Posters are lazy-loaded. Until the image loads, `data-src` holds the real
/// URL and `src` may hold a placeholder; once loaded, `data-src` is removed
/// and `src` holds the real URL. Reading `data-src` first is correct in both
/// states, whenever the page is read.
fn film_poster_url(film: ElementRef<'_>) -> String {
    let pending = query::attribute(film, "data-src", Some(selectors::FILM_POSTER_IMAGE));
    if !pending.is_empty() {
        return pending;
    }
    query::attribute(film, "src", Some(selectors::FILM_POSTER_IMAGE))
}

/// Genre text, e.g. "Comedy", without its trailing separator.
fn film_genre(film: ElementRef<'_>) -> String {
    query::text(film, selectors::FILM_GENRE).replacen(selectors::GENRE_SEPARATOR, "", 1)
}

/// Running time in whole minutes, 0 when it can't be read.
fn film_duration(film: ElementRef<'_>) -> u32 {
    parse_duration(&query::text(film, selectors::FILM_DURATION))
}

/// Read the leading whole number from text like "128 mins".
pub fn parse_duration(text: &str) -> u32 {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Screening types for a film, each with its showtimes.
///
/// Films without a screening attributes block are not yet bookable and have
/// no screenings.
fn film_screenings(film: ElementRef<'_>, duration_minutes: u32, clock: &dyn Clock) -> Vec<Screening> {
    if query::find(film, selectors::SCREENING_ATTRIBUTES).is_none() {
        return Vec::new();
    }

    query::find_all(film, selectors::SCREENING_ROW)
        .into_iter()
        .map(|row| Screening {
            label: query::texts(row, selectors::SCREENING_TAG).join(" "),
            subtitled: query::text(row, selectors::MOVIE_ATTRIBUTES)
                .contains(selectors::SUBTITLED_MARKER),
            times: screening_times(row, duration_minutes, clock),
        })
        .collect()
}

/// Showtimes within one screening row.
fn screening_times(row: ElementRef<'_>, duration_minutes: u32, clock: &dyn Clock) -> Vec<Showtime> {
    query::find_all(row, selectors::TIME_BUTTON)
        .into_iter()
        .map(|button| {
            let start_time = query::element_text(button);

            Showtime {
                start: time_from_offset(&start_time, 0, clock),
                end: time_from_offset(&start_time, duration_minutes, clock),
                booking_url: query::attribute(button, "data-url", None),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::FixedClock;
    use chrono::DateTime;
    use scraper::Html;

    fn clock() -> FixedClock {
        FixedClock::new(DateTime::parse_from_rfc3339("2026-01-09T10:00:00+00:00").unwrap())
    }

    fn films_from(html: &str) -> Vec<Film> {
        let document = Html::parse_document(html);
        let clock = clock();
        let ctx = ExtractionContext::new(&document, "", &clock);
        parse_films(&ctx)
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("128"), 128);
        assert_eq!(parse_duration("128 mins"), 128);
        assert_eq!(parse_duration("  95min"), 95);
        assert_eq!(parse_duration("TBC"), 0);
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("-5"), 0);
        assert_eq!(parse_duration("99999999999999"), 0);
    }

    #[test]
    fn test_poster_prefers_pending_attribute() {
        let films = films_from(
            r#"<div class="qb-movie"><div class="movie-poster-container">
                <img data-src="https://img/real.jpg" src="https://img/placeholder.gif">
            </div></div>"#,
        );
        assert_eq!(films[0].poster.url, "https://img/real.jpg");
    }

    #[test]
    fn test_poster_falls_back_to_loaded_attribute() {
        let films = films_from(
            r#"<div class="qb-movie"><div class="movie-poster-container">
                <img src="https://img/real.jpg">
            </div></div>"#,
        );
        assert_eq!(films[0].poster.url, "https://img/real.jpg");
    }

    #[test]
    fn test_poster_empty_pending_attribute_falls_back() {
        let films = films_from(
            r#"<div class="qb-movie"><div class="movie-poster-container">
                <img data-src="  " src="https://img/real.jpg">
            </div></div>"#,
        );
        assert_eq!(films[0].poster.url, "https://img/real.jpg");
    }

    #[test]
    fn test_genre_strips_separator() {
        let films = films_from(
            r#"<div class="qb-movie"><div class="qb-movie-info-wrapper">
                <span class="mr-sm">Comedy |</span><span class="mr-xs">101 mins</span>
            </div></div>"#,
        );
        assert_eq!(films[0].genre, "Comedy");
        assert_eq!(films[0].duration_minutes, 101);
    }

    #[test]
    fn test_film_without_screening_attributes_has_no_screenings() {
        let films = films_from(
            r#"<div class="qb-movie">
                <h3 class="qb-movie-name">Coming Soon</h3>
                <div class="qb-movie-info-column">
                    <a class="btn btn-primary" data-url="https://book/1">12:00</a>
                </div>
            </div>"#,
        );
        assert_eq!(films[0].title, "Coming Soon");
        assert!(films[0].screenings.is_empty());
    }

    #[test]
    fn test_screening_rows() {
        let films = films_from(
            r#"<div class="qb-movie">
                <div class="qb-movie-info-wrapper"><span class="mr-xs">90</span></div>
                <div class="qb-movie-info-column">
                    <div class="qb-screening-attributes"><span>2D</span><span>Audio Described</span></div>
                    <div class="qb-movie-attributes">Audio Described</div>
                    <a class="btn btn-primary" data-url="https://book/1">14:30</a>
                </div>
                <div class="qb-movie-info-column">
                    <div class="qb-screening-attributes"><span>IMAX</span></div>
                    <div class="qb-movie-attributes">Subtitled</div>
                </div>
            </div>"#,
        );

        let screenings = &films[0].screenings;
        assert_eq!(screenings.len(), 2);

        assert_eq!(screenings[0].label, "2D Audio Described");
        assert!(!screenings[0].subtitled);
        assert_eq!(screenings[0].times.len(), 1);
        let time = &screenings[0].times[0];
        assert_eq!(time.start.label, "14:30");
        assert_eq!(time.end.label, "16:00");
        assert_eq!(time.booking_url, "https://book/1");

        assert_eq!(screenings[1].label, "IMAX");
        assert!(screenings[1].subtitled);
        assert!(screenings[1].times.is_empty());
    }

    #[test]
    fn test_unreadable_time_keeps_siblings() {
        let films = films_from(
            r#"<div class="qb-movie">
                <div class="qb-movie-info-column">
                    <div class="qb-screening-attributes"><span>2D</span></div>
                    <a class="btn btn-primary">Sold out</a>
                    <a class="btn btn-primary" data-url="https://book/2">20:00</a>
                </div>
            </div>"#,
        );

        let times = &films[0].screenings[0].times;
        assert_eq!(times.len(), 2);
        assert!(times[0].start.is_empty());
        assert!(times[0].end.is_empty());
        assert_eq!(times[0].booking_url, "");
        assert_eq!(times[1].start.label, "20:00");
        assert_eq!(times[1].end.label, "20:00");
        assert_eq!(times[1].booking_url, "https://book/2");
    }

    #[test]
    fn test_empty_container_yields_empty_fields() {
        let films = films_from(r#"<div class="qb-movie"></div><div class="qb-movie">
            <h3 class="qb-movie-name">Second</h3></div>"#);

        assert_eq!(films.len(), 2);
        let empty = &films[0];
        assert_eq!(empty.title, "");
        assert_eq!(empty.url, "");
        assert_eq!(empty.poster.url, "");
        assert_eq!(empty.rating, Rating::default());
        assert_eq!(empty.genre, "");
        assert_eq!(empty.duration_minutes, 0);
        assert!(empty.screenings.is_empty());

        assert_eq!(films[1].title, "Second");
    }

    #[test]
    fn test_no_films() {
        assert!(films_from("<html><body><p>Nothing on</p></body></html>").is_empty());
    }
}
