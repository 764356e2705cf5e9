use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use onbrand::{
    application::{
        loader::{LoadState, PostLoader},
        repos::{PostSource, SourceError},
        router::Router,
    },
    domain::posts::{Post, PostStatus},
    infra::location::MemoryLocation,
};
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    layer::{Context, Layer, SubscriberExt},
    registry,
};

#[derive(Clone, Default)]
struct TargetCapture {
    targets: Arc<Mutex<Vec<String>>>,
}

impl TargetCapture {
    fn targets(&self) -> Vec<String> {
        self.targets.lock().expect("capture lock").clone()
    }
}

impl<S: Subscriber> Layer<S> for TargetCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.targets
            .lock()
            .expect("capture lock")
            .push(event.metadata().target().to_string());
    }
}

struct OnePost;

#[async_trait]
impl PostSource for OnePost {
    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        Ok(vec![Post {
            id: 1,
            title: "One".to_string(),
            status: PostStatus::NeedsReview,
            category: "Marketing".to_string(),
            platform: "Instagram".to_string(),
            content: None,
            image: None,
            image_url: None,
            date: None,
            author: None,
        }])
    }
}

#[test]
fn router_events_use_router_target() {
    let capture = TargetCapture::default();
    let subscriber = registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        let router = Router::mount(Arc::new(MemoryLocation::new("#/home")));
        router.navigate("dashboard");
    });

    let targets = capture.targets();
    assert!(targets.iter().any(|target| target == "onbrand::router"));
    assert!(targets.iter().any(|target| target == "onbrand::location"));
    assert!(
        targets.iter().all(|target| !target.starts_with("onbrand::application")),
        "module-path targets leaked: {targets:?}"
    );
}

#[tokio::test]
async fn loader_events_use_loader_target() {
    let capture = TargetCapture::default();
    let subscriber = registry().with(capture.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let loader = PostLoader::new(Arc::new(OnePost));
    assert!(matches!(loader.load(Some("1")).await, LoadState::Loaded(_)));
    assert_eq!(loader.load(Some("2")).await, LoadState::NotFound("2".to_string()));

    let targets = capture.targets();
    assert_eq!(
        targets
            .iter()
            .filter(|target| *target == "onbrand::loader")
            .count(),
        2
    );
}
