// src/intake/types.rs
use crate::record::PostRecord;

/// Engagement block as providers report it. Video platforms fill `views`,
/// photo platforms fill `likes`; either may be missing or zero.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct Engagement {
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub comments: Option<u64>,
}

impl Engagement {
    /// Likes with views as fallback, the metric the sheet keeps.
    pub fn effective(&self) -> Option<u64> {
        match self.likes {
            Some(likes) if likes > 0 => Some(likes),
            _ => self.views,
        }
    }
}

/// One post as returned by a search provider, before intake validation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct RawPost {
    pub platform: String,     // e.g., "Instagram", "TikTok"
    pub account_name: String, // e.g., "@fanpage_daily"
    pub content: String,
    #[serde(default)]
    pub engagement: Engagement,
    pub post_timestamp: String, // ISO-8601, offset optional
    pub post_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>, // "official" | "fan" | "media"
}

impl RawPost {
    /// Flatten into the tabular row the aggregation stage consumes.
    /// The sentiment column is filled later by the scoring stage.
    pub fn into_record(self, celebrity: impl Into<String>) -> PostRecord {
        let engagement = self.engagement.effective().unwrap_or(0) as f64;
        PostRecord {
            celebrity: celebrity.into(),
            platform: self.platform,
            content: self.content,
            engagement,
            timestamp: self.post_timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_engagement_prefers_likes() {
        let e = Engagement {
            likes: Some(1000),
            views: Some(50_000),
            comments: None,
        };
        assert_eq!(e.effective(), Some(1000));
    }

    #[test]
    fn effective_engagement_falls_back_to_views() {
        let e = Engagement {
            likes: Some(0),
            views: Some(50_000),
            comments: None,
        };
        assert_eq!(e.effective(), Some(50_000));

        let none = Engagement::default();
        assert_eq!(none.effective(), None);
    }

    #[test]
    fn into_record_carries_the_effective_metric() {
        let post = RawPost {
            platform: "TikTok".into(),
            account_name: "@clips".into(),
            content: "dance video".into(),
            engagement: Engagement {
                likes: Some(0),
                views: Some(50_000),
                comments: Some(12),
            },
            post_timestamp: "2026-01-30T10:00:00".into(),
            post_url: "https://tiktok.com/v/1".into(),
            account_type: Some("fan".into()),
        };
        let record = post.into_record("Test Celeb");
        assert_eq!(record.celebrity, "Test Celeb");
        assert_eq!(record.platform, "TikTok");
        assert!((record.engagement - 50_000.0).abs() < 1e-6);
    }
}
