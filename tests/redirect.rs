use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use univai_landing::app::App;
use univai_landing::config::{SiteConfig, CHATBOT_URL};
use univai_landing::error::Result;
use univai_landing::navigate::Navigate;

/// Records every navigation instead of launching a browser.
#[derive(Debug, Default)]
struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl Navigate for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<()> {
        self.visited.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

fn recording_app() -> (App, Arc<Mutex<Vec<String>>>) {
    let navigator = RecordingNavigator::default();
    let visited = navigator.visited.clone();
    let app = App::with_parts(SiteConfig::default(), Box::new(navigator)).unwrap();
    (app, visited)
}

#[tokio::test]
async fn activation_navigates_once_with_the_literal_url() {
    let (mut app, visited) = recording_app();
    assert!(app.running);

    app.activate_companion();

    let visited = visited.lock().unwrap();
    assert_eq!(visited.len(), 1);
    assert_eq!(visited[0], CHATBOT_URL);
    // navigating away tears the page down
    assert!(!app.running);
}

#[tokio::test]
async fn activation_ignores_cycle_state() {
    let (mut app, visited) = recording_app();

    // mid-window: bubble up, face possibly non-neutral
    let epoch = Instant::now();
    app.companion.start(epoch);
    app.companion.advance(epoch + Duration::from_millis(8_200));
    assert!(app.companion.attention_visible());

    app.activate_companion();

    let visited = visited.lock().unwrap();
    assert_eq!(visited.len(), 1);
    assert_eq!(visited[0], CHATBOT_URL);
}

#[tokio::test]
async fn failed_browser_launch_still_quits() {
    #[derive(Debug)]
    struct BrokenNavigator;
    impl Navigate for BrokenNavigator {
        fn navigate(&self, _url: &str) -> Result<()> {
            Err(univai_landing::error::LandingError::BrowserError(
                "no browser".into(),
            ))
        }
    }

    let mut app = App::with_parts(SiteConfig::default(), Box::new(BrokenNavigator)).unwrap();
    app.activate_companion();
    assert!(!app.running);
}
