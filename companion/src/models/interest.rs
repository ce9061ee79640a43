use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

/// A category tag used to group events and filter the user's view.
///
/// The set is closed, the variant order is the catalog order, which is also
/// the order selected interests are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Interest {
    Technology,
    Arts,
    Management,
    Sports,
    CulturalActivities,
    Entrepreneurship,
}

impl Interest {
    /// Every interest, in catalog order.
    pub const ALL: [Interest; 6] = [
        Interest::Technology,
        Interest::Arts,
        Interest::Management,
        Interest::Sports,
        Interest::CulturalActivities,
        Interest::Entrepreneurship,
    ];

    /// The name shown to users and written to storage.
    pub fn name(self) -> &'static str {
        match self {
            Interest::Technology => "Technology",
            Interest::Arts => "Arts",
            Interest::Management => "Management",
            Interest::Sports => "Sports",
            Interest::CulturalActivities => "Cultural Activities",
            Interest::Entrepreneurship => "Entrepreneurship",
        }
    }
}

impl Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interest {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| ParseNameError {
                kind: "interest",
                name: s.to_owned(),
            })
    }
}

impl From<Interest> for String {
    fn from(interest: Interest) -> Self {
        interest.name().to_owned()
    }
}

impl TryFrom<String> for Interest {
    type Error = ParseNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
