use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Category a filter page can be opened with.
///
/// `All` is the sentinel meaning "no filter applied"; every other variant has a
/// matching [`Tag`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

/// Every known category, in display order.
pub const CATEGORIES: [Category; 6] = [
    Category::All,
    Category::Todo,
    Category::Work,
    Category::Personal,
    Category::Meeting,
    Category::Shopping,
];

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Todo => "Todo",
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Meeting => "Meeting",
            Self::Shopping => "Shopping",
        }
    }

    /// Resolve the first slug segment to a known category.
    ///
    /// Matching is a case-insensitive scan over [`CATEGORIES`], comparing
    /// Unicode lowercase forms (`WOR\u{212A}` with a Kelvin sign is `Work`).
    /// Missing or empty segments never match.
    #[must_use]
    pub fn resolve(segment: Option<&str>) -> Option<Self> {
        let segment = segment?.to_lowercase();
        CATEGORIES.iter().copied().find(|c| c.as_str().to_lowercase() == segment)
    }

    /// Filter value applied to the notes query; `None` for [`Category::All`].
    #[must_use]
    pub const fn filter(self) -> Option<Tag> {
        match self {
            Self::All => None,
            Self::Todo => Some(Tag::Todo),
            Self::Work => Some(Tag::Work),
            Self::Personal => Some(Tag::Personal),
            Self::Meeting => Some(Tag::Meeting),
            Self::Shopping => Some(Tag::Shopping),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(Some(s)).ok_or_else(|| CoreError::UnknownCategory(s.to_owned()))
    }
}

/// Tag carried by a note. Same set as [`Category`] minus the `All` sentinel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl Tag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Meeting => "Meeting",
            Self::Shopping => "Shopping",
        }
    }
}

impl From<Tag> for Category {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Todo => Self::Todo,
            Tag::Work => Self::Work,
            Tag::Personal => Self::Personal,
            Tag::Meeting => Self::Meeting,
            Tag::Shopping => Self::Shopping,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Category>()?.filter().ok_or_else(|| CoreError::UnknownCategory(s.to_owned()))
    }
}
