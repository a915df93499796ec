//! Tests for the filesystem project store.

use storyreel_core::{
    ChatMessage, HowToDemoRequirements, ProjectRequirements, Role, ScreenType, StoryRecord,
    VideoType,
};
use storyreel_storage::ProjectStore;
use tempfile::TempDir;

fn demo_requirements() -> ProjectRequirements {
    ProjectRequirements {
        audience: "prospects".to_string(),
        cta: None,
        duration: 45,
        video_type: VideoType::HowToDemo,
        has_face: true,
        main_problem: "nobody reads the manual".to_string(),
        product_release: None,
        how_to_demo: Some(HowToDemoRequirements {
            core_interaction_steps: "open the app, press record".to_string(),
            where_people_make_mistakes: Some("skipping setup".to_string()),
        }),
        knowledge_sharing: None,
    }
}

fn story_record(n: u32, voiceover: &str) -> StoryRecord {
    StoryRecord {
        screen_name: format!("screen_{n}"),
        screen_title: voiceover.to_string(),
        screen_type: ScreenType::TalkingHead,
        description: voiceover.to_string(),
        duration: 8.0,
        notes: String::new(),
        image_url: None,
        screen_number: n,
        voiceover_text: voiceover.to_string(),
        target_duration_sec: 8.0,
        on_screen_visual_keywords: None,
        action_notes: None,
    }
}

#[tokio::test]
async fn create_and_load_project_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path()).unwrap();

    let project = store
        .create_project(
            "Launch video",
            Some("Q3 launch".to_string()),
            Some(demo_requirements()),
        )
        .await
        .unwrap();

    assert!(!project.id.is_empty());
    assert!(project.created_at.is_some());
    assert!(project.stories.is_empty());

    let loaded = store.load_project(&project.id).await.unwrap();
    assert_eq!(loaded, project);
}

#[tokio::test]
async fn invalid_requirements_are_rejected_at_creation() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path()).unwrap();

    let mut reqs = demo_requirements();
    reqs.how_to_demo = None;

    let result = store.create_project("Bad", None, Some(reqs)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn list_projects_returns_everything_created() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path()).unwrap();

    store.create_project("One", None, None).await.unwrap();
    store.create_project("Two", None, None).await.unwrap();

    let projects = store.list_projects().await.unwrap();
    assert_eq!(projects.len(), 2);
}

#[tokio::test]
async fn update_project_bumps_the_timestamp() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path()).unwrap();

    let mut project = store.create_project("Draft", None, None).await.unwrap();
    let created_update = project.updated_at;

    project.name = "Final".to_string();
    let updated = store.update_project(project).await.unwrap();

    assert_eq!(updated.name, "Final");
    assert!(updated.updated_at >= created_update);

    let loaded = store.load_project(&updated.id).await.unwrap();
    assert_eq!(loaded.name, "Final");
}

#[tokio::test]
async fn updating_a_missing_project_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path()).unwrap();

    let mut ghost = store.create_project("Ghost", None, None).await.unwrap();
    store.delete_project(&ghost.id).await.unwrap();

    ghost.name = "Still ghost".to_string();
    assert!(store.update_project(ghost).await.is_err());
}

#[tokio::test]
async fn delete_project_removes_the_directory() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path()).unwrap();

    let project = store.create_project("Doomed", None, None).await.unwrap();
    store.delete_project(&project.id).await.unwrap();

    assert!(store.load_project(&project.id).await.is_err());
    assert!(store.list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn chat_history_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path()).unwrap();

    let project = store.create_project("Chatty", None, None).await.unwrap();

    // No chat saved yet: loads as empty, not as an error.
    assert!(store.load_chat(&project.id).await.unwrap().is_empty());

    let history = vec![
        ChatMessage {
            role: Role::User,
            content: "Draft me a storyboard".to_string(),
        },
        ChatMessage {
            role: Role::Assistant,
            content: "Here are three screens...".to_string(),
        },
    ];
    store.save_chat(&project.id, &history).await.unwrap();

    let loaded = store.load_chat(&project.id).await.unwrap();
    assert_eq!(loaded, history);
}

#[tokio::test]
async fn save_stories_assigns_ordered_unique_ids_and_updates_the_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path()).unwrap();

    let project = store.create_project("Storied", None, None).await.unwrap();

    let records = vec![story_record(1, "First screen"), story_record(2, "Second screen")];
    let ids = store.save_stories(&project.id, &records).await.unwrap();

    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    assert!(ids[0].starts_with("story_"));

    let manifest = store.load_project(&project.id).await.unwrap();
    assert_eq!(manifest.stories, ids);

    let loaded = store.load_story(&project.id, &ids[1]).await.unwrap();
    assert_eq!(loaded.voiceover_text, "Second screen");
}

#[tokio::test]
async fn list_stories_follows_manifest_order_across_batches() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path()).unwrap();

    let project = store.create_project("Batches", None, None).await.unwrap();

    store
        .save_stories(&project.id, &[story_record(1, "Opening")])
        .await
        .unwrap();
    store
        .save_stories(&project.id, &[story_record(2, "Closing")])
        .await
        .unwrap();

    let stories = store.list_stories(&project.id).await.unwrap();
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0].voiceover_text, "Opening");
    assert_eq!(stories[1].voiceover_text, "Closing");
}

#[tokio::test]
async fn path_escaping_ids_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path()).unwrap();

    assert!(store.load_project("../outside").await.is_err());
    assert!(store.load_project("a/b").await.is_err());
}
