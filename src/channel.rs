use regex::Regex;
use std::fmt;

/// Release channel derived from a version string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Dev,
    Beta,
    Release,
}

impl Channel {
    /// Channel name as written to the CI output (`dev`, `beta`, `release`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Dev => "dev",
            Channel::Beta => "beta",
            Channel::Release => "release",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying a version string
///
/// `major_minor` is populated only for a clean release version. A beta
/// marker wins over the numeric prefix: "2.5b1" classifies as beta and the
/// "2.5" component is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub channel: Channel,
    pub major_minor: Option<String>,
}

impl Classification {
    /// The classification of a version that matches nothing: dev channel
    pub fn dev() -> Self {
        Classification {
            channel: Channel::Dev,
            major_minor: None,
        }
    }
}

/// Classify a version string into a release channel
///
/// Recognizes `MAJOR.MINOR`, `MAJOR.MINOR.PATCH`, and either form with a
/// trailing `bN` beta marker. Patch digits are never retained. Anything
/// else is a dev version, not an error.
pub fn classify(version: &str) -> Classification {
    let captures = Regex::new(r"^(\d+\.\d+)(?:\.\d+)?(b\d+)?$")
        .ok()
        .and_then(|re| re.captures(version));

    match captures {
        None => Classification::dev(),
        Some(caps) => {
            if caps.get(2).is_some() {
                Classification {
                    channel: Channel::Beta,
                    major_minor: None,
                }
            } else {
                Classification {
                    channel: Channel::Release,
                    major_minor: caps.get(1).map(|m| m.as_str().to_string()),
                }
            }
        }
    }
}
