//! Project and requirements records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storyreel_error::ValidationError;

/// Kind of video a project produces.
///
/// Serialized as the numeric codes the frontend sends (1, 2, 3).
///
/// # Examples
///
/// ```
/// use storyreel_core::VideoType;
///
/// let ty: VideoType = serde_json::from_str("2").unwrap();
/// assert_eq!(ty, VideoType::HowToDemo);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum VideoType {
    /// Announce a product or feature release
    #[display("product-release")]
    ProductRelease,
    /// Walk through how to accomplish a task
    #[display("how-to-demo")]
    HowToDemo,
    /// Share a success story or lessons learned
    #[display("knowledge-sharing")]
    KnowledgeSharing,
}

impl TryFrom<u8> for VideoType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(VideoType::ProductRelease),
            2 => Ok(VideoType::HowToDemo),
            3 => Ok(VideoType::KnowledgeSharing),
            other => Err(format!("Unknown video type code: {}", other)),
        }
    }
}

impl From<VideoType> for u8 {
    fn from(value: VideoType) -> Self {
        match value {
            VideoType::ProductRelease => 1,
            VideoType::HowToDemo => 2,
            VideoType::KnowledgeSharing => 3,
        }
    }
}

/// Requirements specific to product release videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReleaseRequirements {
    /// Key features of this release
    pub key_features: String,
    /// Typical use cases of the product
    pub typical_use_cases: String,
    /// Core interaction steps
    pub core_interaction_steps: String,
}

/// Requirements specific to how-to demo videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HowToDemoRequirements {
    /// Core interaction steps
    pub core_interaction_steps: String,
    /// Where people make mistakes
    #[serde(default)]
    pub where_people_make_mistakes: Option<String>,
}

/// Requirements specific to knowledge sharing videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeSharingRequirements {
    /// Success story or knowledge to share
    pub success_story: String,
    /// Key learnings or insights
    pub key_learnings: String,
    /// Target outcomes for viewers
    pub target_outcomes: String,
}

/// What the user wants out of the video, captured at project setup.
///
/// Exactly the type-specific record matching `video_type` must be
/// populated; [`ProjectRequirements::validate`] enforces that and the
/// duration bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRequirements {
    /// Target audience for the video
    pub audience: String,
    /// Call to action
    #[serde(default)]
    pub cta: Option<String>,
    /// Video duration in seconds, must be greater than zero
    pub duration: u32,
    /// Kind of video being produced
    pub video_type: VideoType,
    /// Whether to show the narrator's face
    pub has_face: bool,
    /// Main problem the user wanted to solve
    pub main_problem: String,
    /// Product release details (video_type = 1)
    #[serde(default)]
    pub product_release: Option<ProductReleaseRequirements>,
    /// How-to demo details (video_type = 2)
    #[serde(default)]
    pub how_to_demo: Option<HowToDemoRequirements>,
    /// Knowledge sharing details (video_type = 3)
    #[serde(default)]
    pub knowledge_sharing: Option<KnowledgeSharingRequirements>,
}

impl ProjectRequirements {
    /// Check the cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first failed constraint: a non-positive duration, or a
    /// missing type-specific record for the declared `video_type`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.duration == 0 {
            return Err(ValidationError::new(
                "duration must be greater than zero",
            ));
        }
        match self.video_type {
            VideoType::ProductRelease if self.product_release.is_none() => {
                Err(ValidationError::new(
                    "product release requirements must be provided for product release videos",
                ))
            }
            VideoType::HowToDemo if self.how_to_demo.is_none() => Err(ValidationError::new(
                "how-to demo requirements must be provided for how-to demo videos",
            )),
            VideoType::KnowledgeSharing if self.knowledge_sharing.is_none() => {
                Err(ValidationError::new(
                    "knowledge sharing requirements must be provided for knowledge sharing videos",
                ))
            }
            _ => Ok(()),
        }
    }
}

/// A storyboard project: the manifest record persisted as `project.json`.
///
/// `stories` lists the IDs of the story records generated for this project,
/// in generation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    pub id: String,
    /// Project name
    pub name: String,
    /// Project description
    #[serde(default)]
    pub description: Option<String>,
    /// Project requirements, captured at setup
    #[serde(default)]
    pub requirements: Option<ProjectRequirements>,
    /// IDs of the story records generated for this project
    #[serde(default)]
    pub stories: Vec<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_requirements() -> ProjectRequirements {
        ProjectRequirements {
            audience: "new users".to_string(),
            cta: Some("start a trial".to_string()),
            duration: 60,
            video_type: VideoType::HowToDemo,
            has_face: false,
            main_problem: "onboarding friction".to_string(),
            product_release: None,
            how_to_demo: Some(HowToDemoRequirements {
                core_interaction_steps: "sign up, create a project".to_string(),
                where_people_make_mistakes: None,
            }),
            knowledge_sharing: None,
        }
    }

    #[test]
    fn matching_type_specific_record_validates() {
        assert!(demo_requirements().validate().is_ok());
    }

    #[test]
    fn missing_type_specific_record_is_rejected() {
        let mut reqs = demo_requirements();
        reqs.how_to_demo = None;
        let err = reqs.validate().unwrap_err();
        assert!(err.message.contains("how-to demo"));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut reqs = demo_requirements();
        reqs.duration = 0;
        let err = reqs.validate().unwrap_err();
        assert!(err.message.contains("duration"));
    }

    #[test]
    fn video_type_serializes_as_numeric_code() {
        assert_eq!(
            serde_json::to_string(&VideoType::KnowledgeSharing).unwrap(),
            "3"
        );
        assert!(serde_json::from_str::<VideoType>("7").is_err());
    }

    #[test]
    fn requirements_round_trip_through_serde() {
        let reqs = demo_requirements();
        let json = serde_json::to_string(&reqs).unwrap();
        let back: ProjectRequirements = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reqs);
    }
}
