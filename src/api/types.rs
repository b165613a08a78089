use serde::{Deserialize, Serialize};

/// Fallback shown wherever a tweet has no usable location.
pub const LOCATION_FALLBACK: &str = "Not Available";

// ---------------------------------------------------------------------------
// Classification output
// ---------------------------------------------------------------------------

/// A single analyzed post as returned by the classify endpoint.
///
/// The backend pre-filters to disaster-relevant tweets; nothing here is
/// validated beyond deserialization. `location` is frequently absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedTweet {
    pub text: String,
    pub category: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl ClassifiedTweet {
    /// Location for display, substituting the literal fallback for an
    /// absent or empty value.
    pub fn location_display(&self) -> &str {
        match self.location.as_deref() {
            Some(loc) if !loc.is_empty() => loc,
            _ => LOCATION_FALLBACK,
        }
    }
}

// ---------------------------------------------------------------------------
// Map generation request
// ---------------------------------------------------------------------------

/// Wire payload for the generate-map endpoint: `{"tweets":[{text,location}]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRequest {
    pub tweets: Vec<MapTweet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapTweet {
    pub text: String,
    pub location: String,
}

impl MapRequest {
    /// Build a payload from the currently held classification list, keeping
    /// only tweets with a known location. Falls back to a single sample item
    /// when nothing locatable is held, so the map can still be requested
    /// before (or without) a successful classify.
    pub fn from_classified(tweets: &[ClassifiedTweet]) -> Self {
        let tweets: Vec<MapTweet> = tweets
            .iter()
            .filter_map(|t| {
                t.location
                    .as_deref()
                    .filter(|loc| !loc.is_empty())
                    .map(|loc| MapTweet {
                        text: t.text.clone(),
                        location: loc.to_string(),
                    })
            })
            .collect();

        if tweets.is_empty() {
            return Self::sample();
        }
        Self { tweets }
    }

    /// The placeholder payload the original client always sent.
    pub fn sample() -> Self {
        Self {
            tweets: vec![MapTweet {
                text: "Some tweet text".to_string(),
                location: "Location".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_classify_response_with_and_without_location() {
        let body = r#"[
            {"text": "Flooding on Main St", "category": "flood", "location": "Springfield"},
            {"text": "Power out downtown", "category": "infrastructure"}
        ]"#;
        let tweets: Vec<ClassifiedTweet> = serde_json::from_str(body).unwrap();
        assert_eq!(tweets.len(), 2);
        assert_eq!(tweets[0].location.as_deref(), Some("Springfield"));
        assert_eq!(tweets[1].location, None);
    }

    #[test]
    fn location_display_substitutes_fallback() {
        let with = ClassifiedTweet {
            text: "t".into(),
            category: "c".into(),
            location: Some("Osaka".into()),
        };
        let absent = ClassifiedTweet {
            text: "t".into(),
            category: "c".into(),
            location: None,
        };
        let empty = ClassifiedTweet {
            text: "t".into(),
            category: "c".into(),
            location: Some(String::new()),
        };
        assert_eq!(with.location_display(), "Osaka");
        assert_eq!(absent.location_display(), "Not Available");
        assert_eq!(empty.location_display(), "Not Available");
    }

    #[test]
    fn map_request_serializes_to_wire_shape() {
        let req = MapRequest::sample();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tweets": [{"text": "Some tweet text", "location": "Location"}]
            })
        );
    }

    #[test]
    fn map_request_prefers_held_tweets_with_locations() {
        let held = vec![
            ClassifiedTweet {
                text: "a".into(),
                category: "fire".into(),
                location: Some("Lisbon".into()),
            },
            ClassifiedTweet {
                text: "b".into(),
                category: "flood".into(),
                location: None,
            },
            ClassifiedTweet {
                text: "c".into(),
                category: "quake".into(),
                location: Some(String::new()),
            },
        ];
        let req = MapRequest::from_classified(&held);
        assert_eq!(req.tweets.len(), 1);
        assert_eq!(req.tweets[0].text, "a");
        assert_eq!(req.tweets[0].location, "Lisbon");
    }

    #[test]
    fn map_request_falls_back_to_sample_when_nothing_locatable() {
        let req = MapRequest::from_classified(&[]);
        assert_eq!(req.tweets.len(), 1);
        assert_eq!(req.tweets[0].text, "Some tweet text");
    }
}
