// tests/publications.rs
use chrono::Duration;
use feedline::application::{
    commands::{
        publications::{
            CreatePublicationCommand, DeletePublicationCommand, LikePublicationCommand,
            UnlikePublicationCommand, UpdatePublicationCommand,
        },
        users::{FollowUserCommand, UnfollowUserCommand},
    },
    dto::PublicationDto,
    error::ApplicationError,
    queries::publications::{GetPublicationQuery, ListAuthorPublicationsQuery},
};
use feedline::application::ports::{security::TokenManager, time::Clock};
use feedline::infrastructure::{database, security::token::HmacTokenManager};
use std::sync::Arc;
use tokio::task::JoinSet;

mod support;

use support::{
    MutableClock, TEST_SECRET, TestApp, actor, build_services, register_user, spawn_app,
};

async fn publish(app: &TestApp, author: i64, title: &str) -> PublicationDto {
    app.services
        .publication_commands
        .create_publication(
            &actor(author),
            CreatePublicationCommand {
                title: title.to_string(),
                content: format!("{title} body"),
            },
        )
        .await
        .expect("create publication")
}

async fn likes_of(app: &TestApp, id: i64) -> u64 {
    app.services
        .publication_queries
        .get_publication(GetPublicationQuery { id })
        .await
        .expect("get publication")
        .likes
}

async fn feed_titles(app: &TestApp, user: i64) -> Vec<String> {
    app.services
        .publication_queries
        .build_feed(&actor(user))
        .await
        .expect("build feed")
        .into_iter()
        .map(|p| p.title)
        .collect()
}

#[tokio::test]
async fn created_publication_starts_with_zero_likes_and_author_nick() {
    let app = spawn_app().await;
    let ana = app.register("ana").await;

    let created = publish(&app, ana.id, "hello").await;

    assert_eq!(created.author_id, ana.id);
    assert_eq!(created.author_nick, "ana");
    assert_eq!(created.likes, 0);
    assert_eq!(created.created_at, support::fixed_now());
}

#[tokio::test]
async fn concurrent_likes_are_all_counted() {
    let app = spawn_app().await;
    let ana = app.register("ana").await;
    let id = publish(&app, ana.id, "popular").await.id;

    let mut tasks = JoinSet::new();
    for _ in 0..25 {
        let services = app.services.clone();
        tasks.spawn(async move {
            services
                .publication_commands
                .like(LikePublicationCommand { id })
                .await
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.expect("task panicked").expect("like succeeds");
    }

    assert_eq!(likes_of(&app, id).await, 25);
}

/// 0 からの同時 unlike は 0 のまま
#[tokio::test]
async fn concurrent_unlikes_never_go_below_zero() {
    let app = spawn_app().await;
    let ana = app.register("ana").await;
    let id = publish(&app, ana.id, "quiet").await.id;

    let mut tasks = JoinSet::new();
    for _ in 0..10 {
        let services = app.services.clone();
        tasks.spawn(async move {
            services
                .publication_commands
                .unlike(UnlikePublicationCommand { id })
                .await
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.expect("task panicked").expect("unlike succeeds");
    }

    assert_eq!(likes_of(&app, id).await, 0);
}

#[tokio::test]
async fn likes_minus_unlikes() {
    let app = spawn_app().await;
    let ana = app.register("ana").await;
    let id = publish(&app, ana.id, "counted").await.id;

    for _ in 0..7 {
        app.services
            .publication_commands
            .like(LikePublicationCommand { id })
            .await
            .unwrap();
    }
    for _ in 0..3 {
        app.services
            .publication_commands
            .unlike(UnlikePublicationCommand { id })
            .await
            .unwrap();
    }

    assert_eq!(likes_of(&app, id).await, 4);
}

#[tokio::test]
async fn liking_a_missing_publication_is_not_found() {
    let app = spawn_app().await;

    let err = app
        .services
        .publication_commands
        .like(LikePublicationCommand { id: 404 })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"), "{err}");

    let err = app
        .services
        .publication_commands
        .unlike(UnlikePublicationCommand { id: 404 })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"), "{err}");
}

#[tokio::test]
async fn updating_someone_elses_publication_is_forbidden_and_changes_nothing() {
    let app = spawn_app().await;
    let ana = app.register("ana").await;
    let bia = app.register("bia").await;
    let original = publish(&app, ana.id, "mine").await;

    let err = app
        .services
        .publication_commands
        .update_publication(
            &actor(bia.id),
            UpdatePublicationCommand {
                id: original.id,
                title: "hijacked".into(),
                content: "hijacked".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = app
        .services
        .publication_commands
        .delete_publication(&actor(bia.id), DeletePublicationCommand { id: original.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let stored = app
        .services
        .publication_queries
        .get_publication(GetPublicationQuery { id: original.id })
        .await
        .unwrap();
    assert_eq!(stored, original);
}

#[tokio::test]
async fn ownership_is_checked_before_payload_validation() {
    let app = spawn_app().await;
    let ana = app.register("ana").await;
    let bia = app.register("bia").await;
    let original = publish(&app, ana.id, "mine").await;

    let err = app
        .services
        .publication_commands
        .update_publication(
            &actor(bia.id),
            UpdatePublicationCommand {
                id: original.id,
                title: String::new(),
                content: String::new(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn owner_can_update_and_delete() {
    let app = spawn_app().await;
    let ana = app.register("ana").await;
    let original = publish(&app, ana.id, "draft").await;

    app.services
        .publication_commands
        .update_publication(
            &actor(ana.id),
            UpdatePublicationCommand {
                id: original.id,
                title: "final".into(),
                content: "final body".into(),
            },
        )
        .await
        .unwrap();
    let stored = app
        .services
        .publication_queries
        .get_publication(GetPublicationQuery { id: original.id })
        .await
        .unwrap();
    assert_eq!(stored.title, "final");
    assert_eq!(stored.created_at, original.created_at);

    app.services
        .publication_commands
        .delete_publication(&actor(ana.id), DeletePublicationCommand { id: original.id })
        .await
        .unwrap();
    let err = app
        .services
        .publication_queries
        .get_publication(GetPublicationQuery { id: original.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn mutating_a_missing_publication_is_not_found() {
    let app = spawn_app().await;
    let ana = app.register("ana").await;

    let err = app
        .services
        .publication_commands
        .delete_publication(&actor(ana.id), DeletePublicationCommand { id: 77 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

/// フィード: 自分 + フォロー中のユーザーの投稿のみ、新しい順
#[tokio::test]
async fn feed_is_own_plus_followed_newest_first() {
    let app = spawn_app().await;
    let a = app.register("alpha").await;
    let b = app.register("bravo").await;
    let c = app.register("charlie").await;
    let d = app.register("delta").await;

    publish(&app, a.id, "P1").await;
    app.clock.advance(Duration::minutes(1));
    publish(&app, b.id, "P2").await;
    app.clock.advance(Duration::minutes(1));
    publish(&app, d.id, "not followed").await;

    for followed in [a.id, b.id] {
        app.services
            .user_commands
            .follow(&actor(c.id), FollowUserCommand { user_id: followed })
            .await
            .unwrap();
    }

    assert_eq!(feed_titles(&app, c.id).await, ["P2", "P1"]);

    app.services
        .user_commands
        .unfollow(&actor(c.id), UnfollowUserCommand { user_id: b.id })
        .await
        .unwrap();
    assert_eq!(feed_titles(&app, c.id).await, ["P1"]);
}

#[tokio::test]
async fn feed_includes_own_publications_without_any_follows() {
    let app = spawn_app().await;
    let ana = app.register("ana").await;
    publish(&app, ana.id, "solo").await;

    assert_eq!(feed_titles(&app, ana.id).await, ["solo"]);
}

#[tokio::test]
async fn feed_breaks_timestamp_ties_by_higher_id() {
    let app = spawn_app().await;
    let ana = app.register("ana").await;
    let bia = app.register("bia").await;
    app.services
        .user_commands
        .follow(&actor(ana.id), FollowUserCommand { user_id: bia.id })
        .await
        .unwrap();

    // The clock does not move, so all three share one timestamp.
    publish(&app, ana.id, "first").await;
    publish(&app, bia.id, "second").await;
    publish(&app, ana.id, "third").await;

    assert_eq!(feed_titles(&app, ana.id).await, ["third", "second", "first"]);
}

#[tokio::test]
async fn author_listing_only_has_that_author() {
    let app = spawn_app().await;
    let ana = app.register("ana").await;
    let bia = app.register("bia").await;
    publish(&app, ana.id, "a1").await;
    publish(&app, bia.id, "b1").await;
    app.clock.advance(Duration::seconds(5));
    publish(&app, ana.id, "a2").await;

    let titles: Vec<_> = app
        .services
        .publication_queries
        .list_by_author(ListAuthorPublicationsQuery { author_id: ana.id })
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, ["a2", "a1"]);
}

/// ファイル DB + 複数接続でも増減が失われない
#[tokio::test]
async fn like_counter_holds_across_pooled_connections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("feedline.db").display());
    let pool = database::init_pool(&url, 8).await.expect("file pool");
    database::run_migrations(&pool).await.expect("run migrations");

    let clock: Arc<dyn Clock> = Arc::new(MutableClock::new());
    let token_manager: Arc<dyn TokenManager> = Arc::new(
        HmacTokenManager::new(
            TEST_SECRET,
            std::time::Duration::from_secs(60),
            Arc::clone(&clock),
        )
        .expect("token manager"),
    );
    let services = build_services(&pool, token_manager, clock);
    let ana = register_user(&services, "ana").await;
    let id = services
        .publication_commands
        .create_publication(
            &actor(ana.id),
            CreatePublicationCommand {
                title: "shared".into(),
                content: "shared body".into(),
            },
        )
        .await
        .expect("create publication")
        .id;

    let mut tasks = JoinSet::new();
    for _ in 0..30 {
        let services = Arc::clone(&services);
        tasks.spawn(async move {
            services
                .publication_commands
                .like(LikePublicationCommand { id })
                .await
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.expect("task panicked").expect("like succeeds");
    }

    // Starts at 30 and can never dip below 10, so the floor stays out of play.
    for i in 0..30 {
        let services = Arc::clone(&services);
        tasks.spawn(async move {
            if i % 3 == 0 {
                services
                    .publication_commands
                    .like(LikePublicationCommand { id })
                    .await
            } else {
                services
                    .publication_commands
                    .unlike(UnlikePublicationCommand { id })
                    .await
            }
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.expect("task panicked").expect("like/unlike succeeds");
    }

    let stored = services
        .publication_queries
        .get_publication(GetPublicationQuery { id })
        .await
        .expect("get publication");
    assert_eq!(stored.likes, 20);
}
