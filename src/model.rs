//! Catalog data model: game entries, categories and the loaded catalog.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::LoadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Action,
    Arcade,
    Puzzle,
    Sports,
    Strategy,
    Racing,
    Classic,
    Apps,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Action,
        Category::Arcade,
        Category::Puzzle,
        Category::Sports,
        Category::Strategy,
        Category::Racing,
        Category::Classic,
        Category::Apps,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Action => "Action",
            Category::Arcade => "Arcade",
            Category::Puzzle => "Puzzle",
            Category::Sports => "Sports",
            Category::Strategy => "Strategy",
            Category::Racing => "Racing",
            Category::Classic => "Classic",
            Category::Apps => "Apps",
        }
    }

    /// Font Awesome icon class for the sidebar.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Action => "fa-bolt",
            Category::Arcade => "fa-ghost",
            Category::Puzzle => "fa-puzzle-piece",
            Category::Sports => "fa-basketball",
            Category::Strategy => "fa-chess",
            Category::Racing => "fa-flag-checkered",
            Category::Classic => "fa-star",
            Category::Apps => "fa-rocket",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL.into_iter().find(|c| c.name() == s).ok_or(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    /// Embedded as-is; scheme and reachability are never checked.
    pub target_url: String,
    pub category: Category,
    pub rating: f64,
    pub featured: bool,
}

/// Entry as it appears in the catalog document, before the category is checked.
#[derive(Debug, Deserialize)]
struct RawGameEntry {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "thumbnail", default)]
    thumbnail_url: String,
    #[serde(rename = "url")]
    target_url: String,
    category: String,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    featured: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    games: Vec<RawGameEntry>,
}

impl TryFrom<RawGameEntry> for GameEntry {
    type Error = LoadError;

    fn try_from(raw: RawGameEntry) -> Result<Self, Self::Error> {
        let category = raw
            .category
            .parse::<Category>()
            .map_err(|_| LoadError::UnknownCategory {
                id: raw.id.clone(),
                category: raw.category.clone(),
            })?;
        Ok(GameEntry {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            thumbnail_url: raw.thumbnail_url,
            target_url: raw.target_url,
            category,
            rating: raw.rating,
            featured: raw.featured.unwrap_or(false),
        })
    }
}

/// The session's game list. Cloning shares the same entries; there is no way
/// to mutate them after parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    games: Rc<[GameEntry]>,
}

impl Catalog {
    /// Parses a `{ "games": [...] }` document, rejecting the whole document on
    /// the first bad entry.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let doc: CatalogDocument = serde_json::from_str(text)?;
        let mut seen = HashSet::with_capacity(doc.games.len());
        let mut games = Vec::with_capacity(doc.games.len());
        for raw in doc.games {
            let entry = GameEntry::try_from(raw)?;
            if !seen.insert(entry.id.clone()) {
                return Err(LoadError::DuplicateId(entry.id));
            }
            games.push(entry);
        }
        Ok(Self {
            games: games.into(),
        })
    }

    pub fn games(&self) -> &[GameEntry] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn entry(id: &str, title: &str, category: Category, featured: bool) -> GameEntry {
        GameEntry {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            thumbnail_url: String::new(),
            target_url: format!("https://games.example/{id}"),
            category,
            rating: 4.5,
            featured,
        }
    }

    pub(crate) fn catalog_of(games: Vec<GameEntry>) -> Catalog {
        Catalog {
            games: games.into(),
        }
    }

    #[test]
    fn parses_document_in_order() {
        let json = r#"{"games":[
            {"id":"a","title":"Retro Runner","description":"Run!","thumbnail":"a.png","url":"https://a.example","category":"Arcade","rating":4.8,"featured":true},
            {"id":"b","title":"Block Blitz","description":"Blocks","thumbnail":"b.png","url":"https://b.example","category":"Puzzle","rating":4.1}
        ]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let a = &catalog.games()[0];
        assert_eq!(a.id, "a");
        assert_eq!(a.category, Category::Arcade);
        assert_eq!(a.target_url, "https://a.example");
        assert_eq!(a.thumbnail_url, "a.png");
        assert!(a.featured);
        assert!(!catalog.games()[1].featured);
        assert_eq!(catalog.games()[1].title, "Block Blitz");
    }

    #[test]
    fn unknown_category_fails_whole_load() {
        let json = r#"{"games":[
            {"id":"a","title":"A","url":"u","category":"Arcade"},
            {"id":"b","title":"B","url":"u","category":"Shooter"}
        ]}"#;
        match Catalog::from_json(json) {
            Err(LoadError::UnknownCategory { id, category }) => {
                assert_eq!(id, "b");
                assert_eq!(category, "Shooter");
            }
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn category_names_are_case_sensitive() {
        assert_eq!("Racing".parse::<Category>(), Ok(Category::Racing));
        assert!("racing".parse::<Category>().is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{"games":[
            {"id":"a","title":"A","url":"u","category":"Arcade"},
            {"id":"a","title":"A2","url":"u","category":"Action"}
        ]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(LoadError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        assert!(matches!(Catalog::from_json("{\"games\":"), Err(LoadError::Parse(_))));
        assert!(matches!(Catalog::from_json("{}"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn bundled_catalog_parses() {
        let catalog = Catalog::from_json(include_str!("../games.json")).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.games().iter().any(|g| g.category == Category::Apps));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::from_json(r#"{"games":[]}"#).unwrap();
        assert!(catalog.is_empty());
    }
}
