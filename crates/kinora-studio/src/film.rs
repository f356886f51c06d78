//! Film catalog and the search filter applied to it.

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Genre {
    Adventure,
    Fantasy,
    SciFi,
    Comedy,
    Action,
    Drama,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Adventure,
        Genre::Fantasy,
        Genre::SciFi,
        Genre::Comedy,
        Genre::Action,
        Genre::Drama,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Genre::Adventure => "Adventure",
            Genre::Fantasy => "Fantasy",
            Genre::SciFi => "SciFi",
            Genre::Comedy => "Comedy",
            Genre::Action => "Action",
            Genre::Drama => "Drama",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub title: &'static str,
    pub year: i32,
    pub director: &'static str,
    pub stars: &'static [&'static str],
    pub genres: &'static [Genre],
    pub summary: &'static str,
}

impl Film {
    /// True when every genre in `wanted` is one of the film's genres.
    pub fn has_genres(&self, wanted: &BTreeSet<Genre>) -> bool {
        wanted.iter().all(|g| self.genres.contains(g))
    }

    /// Inclusive year range check; the bounds may be given in either order.
    pub fn released_between(&self, a: i32, b: i32) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (lo..=hi).contains(&self.year)
    }

    fn mentions(&self, needle: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle);
        hit(self.title) || hit(self.director) || self.stars.iter().any(|s| hit(s))
    }

    pub fn genre_line(&self) -> String {
        self.genres.iter().map(|g| g.name()).collect::<Vec<_>>().join(" / ")
    }
}

pub const MIN_YEAR: i32 = 1970;
pub const MAX_YEAR: i32 = 2024;

/// Search state driven by the filter controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub query: String,
    pub from_year: i32,
    pub to_year: i32,
    pub genres: BTreeSet<Genre>,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            query: String::new(),
            from_year: MIN_YEAR,
            to_year: MAX_YEAR,
            genres: BTreeSet::new(),
        }
    }
}

impl Filter {
    pub fn matches(&self, film: &Film) -> bool {
        let query = self.query.trim().to_lowercase();
        (query.is_empty() || film.mentions(&query))
            && film.released_between(self.from_year, self.to_year)
            && film.has_genres(&self.genres)
    }

    /// Adds `genre` if absent, removes it otherwise. Returns whether it is
    /// now selected.
    pub fn toggle_genre(&mut self, genre: Genre) -> bool {
        if self.genres.remove(&genre) {
            false
        } else {
            self.genres.insert(genre);
            true
        }
    }

    pub fn apply<'a>(&self, films: &'a [Film]) -> Vec<&'a Film> {
        films.iter().filter(|f| self.matches(f)).collect()
    }
}

use Genre::*;

pub static CATALOG: &[Film] = &[
    Film {
        title: "Alien",
        year: 1979,
        director: "Ridley Scott",
        stars: &["Sigourney Weaver", "Tom Skerritt", "John Hurt"],
        genres: &[SciFi, Drama],
        summary: "A commercial crew answers a distress call and brings something back aboard.",
    },
    Film {
        title: "Raiders of the Lost Ark",
        year: 1981,
        director: "Steven Spielberg",
        stars: &["Harrison Ford", "Karen Allen"],
        genres: &[Adventure, Action],
        summary: "An archaeologist races rival agents to recover a legendary relic.",
    },
    Film {
        title: "Blade Runner",
        year: 1982,
        director: "Ridley Scott",
        stars: &["Harrison Ford", "Rutger Hauer", "Sean Young"],
        genres: &[SciFi, Drama],
        summary: "A retired hunter is called back to track down four escaped replicants.",
    },
    Film {
        title: "Back to the Future",
        year: 1985,
        director: "Robert Zemeckis",
        stars: &["Michael J. Fox", "Christopher Lloyd"],
        genres: &[SciFi, Comedy, Adventure],
        summary: "A teenager is sent thirty years into the past in a time-travelling car.",
    },
    Film {
        title: "The Princess Bride",
        year: 1987,
        director: "Rob Reiner",
        stars: &["Cary Elwes", "Robin Wright", "Mandy Patinkin"],
        genres: &[Fantasy, Adventure, Comedy],
        summary: "A farmhand turned pirate sets out to rescue his true love.",
    },
    Film {
        title: "Die Hard",
        year: 1988,
        director: "John McTiernan",
        stars: &["Bruce Willis", "Alan Rickman"],
        genres: &[Action],
        summary: "An off-duty cop is trapped in a skyscraper taken over by thieves.",
    },
    Film {
        title: "Terminator 2: Judgment Day",
        year: 1991,
        director: "James Cameron",
        stars: &["Arnold Schwarzenegger", "Linda Hamilton"],
        genres: &[SciFi, Action],
        summary: "A reprogrammed machine protects a boy from a more advanced killer.",
    },
    Film {
        title: "Jurassic Park",
        year: 1993,
        director: "Steven Spielberg",
        stars: &["Sam Neill", "Laura Dern", "Jeff Goldblum"],
        genres: &[Adventure, SciFi],
        summary: "A theme park of cloned dinosaurs breaks down during a preview tour.",
    },
    Film {
        title: "Groundhog Day",
        year: 1993,
        director: "Harold Ramis",
        stars: &["Bill Murray", "Andie MacDowell"],
        genres: &[Comedy, Fantasy],
        summary: "A weatherman relives the same winter day over and over.",
    },
    Film {
        title: "The Shawshank Redemption",
        year: 1994,
        director: "Frank Darabont",
        stars: &["Tim Robbins", "Morgan Freeman"],
        genres: &[Drama],
        summary: "Two prisoners form a lasting friendship over two decades.",
    },
    Film {
        title: "The Matrix",
        year: 1999,
        director: "Lana Wachowski",
        stars: &["Keanu Reeves", "Carrie-Anne Moss", "Laurence Fishburne"],
        genres: &[SciFi, Action],
        summary: "A hacker learns the world he knows is a simulation.",
    },
    Film {
        title: "The Lord of the Rings: The Fellowship of the Ring",
        year: 2001,
        director: "Peter Jackson",
        stars: &["Elijah Wood", "Ian McKellen", "Viggo Mortensen"],
        genres: &[Fantasy, Adventure],
        summary: "A hobbit sets out to destroy a ring of terrible power.",
    },
    Film {
        title: "Spirited Away",
        year: 2001,
        director: "Hayao Miyazaki",
        stars: &["Rumi Hiiragi", "Miyu Irino"],
        genres: &[Fantasy, Adventure],
        summary: "A girl wanders into a world of spirits and must free her parents.",
    },
    Film {
        title: "Pirates of the Caribbean: The Curse of the Black Pearl",
        year: 2003,
        director: "Gore Verbinski",
        stars: &["Johnny Depp", "Geoffrey Rush", "Keira Knightley"],
        genres: &[Adventure, Fantasy, Action],
        summary: "A blacksmith teams up with a pirate to rescue a governor's daughter.",
    },
    Film {
        title: "The Dark Knight",
        year: 2008,
        director: "Christopher Nolan",
        stars: &["Christian Bale", "Heath Ledger"],
        genres: &[Action, Drama],
        summary: "A masked vigilante faces an anarchist who wants to watch Gotham burn.",
    },
    Film {
        title: "Inception",
        year: 2010,
        director: "Christopher Nolan",
        stars: &["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Elliot Page"],
        genres: &[SciFi, Action],
        summary: "A thief who steals secrets through dreams is asked to plant one.",
    },
    Film {
        title: "The Grand Budapest Hotel",
        year: 2014,
        director: "Wes Anderson",
        stars: &["Ralph Fiennes", "Tony Revolori"],
        genres: &[Comedy, Drama],
        summary: "A concierge and his lobby boy are caught up in a stolen painting affair.",
    },
    Film {
        title: "Mad Max: Fury Road",
        year: 2015,
        director: "George Miller",
        stars: &["Tom Hardy", "Charlize Theron"],
        genres: &[Action, Adventure, SciFi],
        summary: "A drifter and a rebel warrior flee a desert tyrant across the wasteland.",
    },
    Film {
        title: "Arrival",
        year: 2016,
        director: "Denis Villeneuve",
        stars: &["Amy Adams", "Jeremy Renner"],
        genres: &[SciFi, Drama],
        summary: "A linguist is recruited to talk with visitors from another world.",
    },
    Film {
        title: "Everything Everywhere All at Once",
        year: 2022,
        director: "Daniel Kwan",
        stars: &["Michelle Yeoh", "Ke Huy Quan"],
        genres: &[SciFi, Comedy, Action],
        summary: "A laundromat owner is pulled into a fight spanning the multiverse.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(filter: &Filter) -> Vec<&'static str> {
        filter.apply(CATALOG).into_iter().map(|f| f.title).collect()
    }

    #[test]
    fn default_filter_matches_everything() {
        assert_eq!(Filter::default().apply(CATALOG).len(), CATALOG.len());
    }

    #[test]
    fn query_searches_title_director_and_stars() {
        let mut filter = Filter { query: "HARRISON".into(), ..Filter::default() };
        assert_eq!(titles(&filter), ["Raiders of the Lost Ark", "Blade Runner"]);

        filter.query = "nolan".into();
        assert_eq!(titles(&filter), ["The Dark Knight", "Inception"]);

        filter.query = "  matrix ".into();
        assert_eq!(titles(&filter), ["The Matrix"]);
    }

    #[test]
    fn year_range_is_inclusive_and_order_free() {
        let film = &CATALOG[0];
        assert!(film.released_between(1979, 1979));
        assert!(film.released_between(1990, 1970));
        assert!(!film.released_between(1980, 2000));
    }

    #[test]
    fn selected_genres_must_all_be_present() {
        let mut filter = Filter::default();
        assert!(filter.toggle_genre(Genre::Fantasy));
        assert!(filter.toggle_genre(Genre::Comedy));
        assert_eq!(titles(&filter), ["The Princess Bride", "Groundhog Day"]);

        assert!(!filter.toggle_genre(Genre::Comedy));
        assert!(titles(&filter).len() > 2);
    }

    #[test]
    fn criteria_combine() {
        let filter = Filter {
            query: "scott".into(),
            from_year: 1980,
            to_year: 1990,
            genres: BTreeSet::from([Genre::SciFi]),
        };
        assert_eq!(titles(&filter), ["Blade Runner"]);
    }
}
