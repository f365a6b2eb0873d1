//! Startup orchestration: fetch, then render into the injected containers

use tracing::{debug, info};

use crate::fetch::{fetch_art_data, fetch_social_data, Transport};
use crate::page::Container;
use crate::render::{ArtCardRenderer, BatchOutcome, CardRenderer, PostCardRenderer};

#[derive(Debug, Clone)]
pub struct Endpoints {
    pub art_url: String,
    pub social_url: String,
    pub image_url_template: String,
}

/// Containers the orchestrator renders into.
///
/// Social posts are only fetched when `social` is set.
pub struct Targets {
    pub art: Container,
    pub social: Option<Container>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Rendering,
    Done,
    /// Nothing came back from any fetch, so nothing was rendered
    DoneEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub phase: Phase,
    pub art: BatchOutcome,
    pub social: Option<BatchOutcome>,
}

pub struct Orchestrator<T> {
    transport: T,
    endpoints: Endpoints,
    phase: Phase,
}

impl<T: Transport> Orchestrator<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Fetch art (and social posts, when targeted) concurrently, then render.
    ///
    /// Art cards always render before social cards, each batch in response
    /// order, whichever fetch finishes first. Consumes the orchestrator so a
    /// page cannot be filled twice.
    pub async fn run(mut self, targets: &Targets) -> RunReport {
        self.transition(Phase::Fetching);

        let want_social = targets.social.is_some();
        let (art_data, social_data) = tokio::join!(
            fetch_art_data(&self.transport, &self.endpoints.art_url),
            async {
                if want_social {
                    Some(fetch_social_data(&self.transport, &self.endpoints.social_url).await)
                } else {
                    None
                }
            }
        );

        let nothing_fetched =
            art_data.is_empty() && social_data.as_ref().map_or(true, |d| d.is_empty());
        if nothing_fetched {
            self.transition(Phase::DoneEmpty);
            return RunReport {
                phase: self.phase,
                art: BatchOutcome::default(),
                social: social_data.map(|_| BatchOutcome::default()),
            };
        }

        self.transition(Phase::Rendering);

        let art = ArtCardRenderer::new(&self.endpoints.image_url_template)
            .render_all(&targets.art, &art_data);
        let social = match (&targets.social, social_data) {
            (Some(container), Some(data)) => Some(PostCardRenderer.render_all(container, &data)),
            _ => None,
        };

        self.transition(Phase::Done);
        info!(
            art_rendered = art.rendered,
            art_skipped = art.skipped,
            social_rendered = social.map(|s| s.rendered),
            "page rendered"
        );

        RunReport {
            phase: self.phase,
            art,
            social,
        }
    }

    fn transition(&mut self, next: Phase) {
        debug!(from = ?self.phase, to = ?next, "orchestrator phase");
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_IMAGE_URL_TEMPLATE;
    use crate::dom::{find_elements_by_class, get_text_content};
    use crate::fetch::HttpTransport;
    use crate::page::Page;
    use crate::testing::FakeTransport;
    use std::time::Duration;

    const ART_URL: &str = "https://museum.test/artworks";
    const POSTS_URL: &str = "https://social.test/posts";

    fn endpoints() -> Endpoints {
        Endpoints {
            art_url: ART_URL.to_string(),
            social_url: POSTS_URL.to_string(),
            image_url_template: DEFAULT_IMAGE_URL_TEMPLATE.to_string(),
        }
    }

    fn art_only(page: &Page) -> Targets {
        Targets {
            art: page.container("art-container").unwrap(),
            social: None,
        }
    }

    fn with_social(page: &Page) -> Targets {
        Targets {
            art: page.container("art-container").unwrap(),
            social: page.container("social-container"),
        }
    }

    fn headers(container: &Container) -> Vec<String> {
        container
            .cards()
            .iter()
            .map(|card| get_text_content(&find_elements_by_class(card, "card-header")[0]))
            .collect()
    }

    const ART_BODY: &str = r#"{"data": [
        {"title": "A", "artist_title": "X", "category_titles": ["Painting"], "medium_display": "Oil", "image_id": "i1"},
        {"title": "B", "artist_title": "Y", "category_titles": ["Prints"], "medium_display": "Etching", "image_id": "i2"},
        {"title": "C", "artist_title": null, "category_titles": [], "medium_display": null, "image_id": null}
    ]}"#;

    const POSTS_BODY: &str = r#"[
        {"userId": 1, "id": 1, "title": "p1", "body": "first"},
        {"userId": 1, "id": 2, "title": "p2", "body": "second"}
    ]"#;

    #[test]
    fn test_new_orchestrator_is_idle() {
        let orchestrator = Orchestrator::new(FakeTransport::new(), endpoints());
        assert_eq!(orchestrator.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_run_renders_art_in_order() {
        let page = Page::default_shell();
        let targets = art_only(&page);
        let transport = FakeTransport::new().body(ART_URL, ART_BODY);

        let report = Orchestrator::new(transport, endpoints()).run(&targets).await;

        assert_eq!(report.phase, Phase::Done);
        assert_eq!(report.art, BatchOutcome { rendered: 3, skipped: 0 });
        assert_eq!(report.social, None);
        assert_eq!(headers(&targets.art), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_run_skips_social_without_target() {
        let page = Page::default_shell();
        let targets = art_only(&page);
        let transport = FakeTransport::new()
            .body(ART_URL, ART_BODY)
            .body(POSTS_URL, POSTS_BODY);
        let completed = transport.completed();

        Orchestrator::new(transport, endpoints()).run(&targets).await;

        assert_eq!(*completed.lock().unwrap(), vec![ART_URL.to_string()]);
        assert_eq!(page.container("social-container").unwrap().card_count(), 0);
    }

    #[tokio::test]
    async fn test_run_error_status_renders_nothing() {
        let page = Page::default_shell();
        let targets = art_only(&page);

        let report = Orchestrator::new(FakeTransport::new(), endpoints())
            .run(&targets)
            .await;

        assert_eq!(report.phase, Phase::DoneEmpty);
        assert_eq!(report.art, BatchOutcome::default());
        assert_eq!(targets.art.card_count(), 0);
    }

    #[tokio::test]
    async fn test_run_connection_refused_renders_nothing() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let page = Page::default_shell();
        let targets = with_social(&page);
        let transport = HttpTransport::new(Some(Duration::from_secs(5))).unwrap();
        let endpoints = Endpoints {
            art_url: format!("http://127.0.0.1:{port}/artworks"),
            social_url: format!("http://127.0.0.1:{port}/posts"),
            image_url_template: DEFAULT_IMAGE_URL_TEMPLATE.to_string(),
        };

        let report = Orchestrator::new(transport, endpoints).run(&targets).await;

        assert_eq!(report.phase, Phase::DoneEmpty);
        assert_eq!(targets.art.card_count(), 0);
        assert_eq!(targets.social.as_ref().unwrap().card_count(), 0);
    }

    #[tokio::test]
    async fn test_run_malformed_record_does_not_abort_batch() {
        let page = Page::default_shell();
        let targets = art_only(&page);
        let transport = FakeTransport::new().body(
            ART_URL,
            r#"{"data": [
                {"title": "first", "category_titles": ["a"]},
                {"title": "no categories", "artist_title": "Z"},
                {"title": "third", "category_titles": ["c"]}
            ]}"#,
        );

        let report = Orchestrator::new(transport, endpoints()).run(&targets).await;

        assert_eq!(report.phase, Phase::Done);
        assert_eq!(report.art, BatchOutcome { rendered: 2, skipped: 1 });
        assert_eq!(headers(&targets.art), vec!["first", "third"]);
    }

    #[tokio::test]
    async fn test_run_renders_social_when_targeted() {
        let page = Page::default_shell();
        let targets = with_social(&page);
        let transport = FakeTransport::new()
            .body(ART_URL, ART_BODY)
            .body(POSTS_URL, POSTS_BODY);

        let report = Orchestrator::new(transport, endpoints()).run(&targets).await;

        assert_eq!(report.phase, Phase::Done);
        assert_eq!(report.art.rendered, 3);
        assert_eq!(report.social, Some(BatchOutcome { rendered: 2, skipped: 0 }));
        assert_eq!(headers(targets.social.as_ref().unwrap()), vec!["p1", "p2"]);
    }

    #[tokio::test]
    async fn test_run_order_independent_of_fetch_completion() {
        let page = Page::default_shell();
        let targets = with_social(&page);
        let transport = FakeTransport::new()
            .body(ART_URL, ART_BODY)
            .body(POSTS_URL, POSTS_BODY)
            .delay(ART_URL, Duration::from_millis(50));
        let completed = transport.completed();

        let report = Orchestrator::new(transport, endpoints()).run(&targets).await;

        // Social resolved first, yet art still renders in response order
        assert_eq!(
            *completed.lock().unwrap(),
            vec![POSTS_URL.to_string(), ART_URL.to_string()]
        );
        assert_eq!(report.phase, Phase::Done);
        assert_eq!(headers(&targets.art), vec!["A", "B", "C"]);
        assert_eq!(headers(targets.social.as_ref().unwrap()), vec!["p1", "p2"]);
    }

    #[tokio::test]
    async fn test_run_art_failure_still_renders_social() {
        let page = Page::default_shell();
        let targets = with_social(&page);
        let transport = FakeTransport::new()
            .status(ART_URL, 500)
            .body(POSTS_URL, POSTS_BODY);

        let report = Orchestrator::new(transport, endpoints()).run(&targets).await;

        assert_eq!(report.phase, Phase::Done);
        assert_eq!(report.art, BatchOutcome::default());
        assert_eq!(report.social.map(|s| s.rendered), Some(2));
        assert_eq!(targets.art.card_count(), 0);
    }

    #[tokio::test]
    async fn test_run_everything_failing_is_done_empty() {
        let page = Page::default_shell();
        let targets = with_social(&page);

        let report = Orchestrator::new(FakeTransport::new(), endpoints())
            .run(&targets)
            .await;

        assert_eq!(report.phase, Phase::DoneEmpty);
        assert_eq!(report.social, Some(BatchOutcome::default()));
    }
}
