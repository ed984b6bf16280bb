use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::grammar::{GrammarChecker, LanguageTool};
use crate::types::grammar::GrammarReport;

/// Grammar checker answering with a fixed number of issues.
#[derive(Clone, Default)]
pub struct FakeGrammar {
    issues: usize,
    yield_first: bool,
    calls: Arc<AtomicUsize>,
}

impl FakeGrammar {
    pub fn clean() -> Self {
        FakeGrammar::default()
    }

    pub fn with_issues(issues: usize) -> Self {
        FakeGrammar {
            issues,
            ..FakeGrammar::default()
        }
    }

    pub fn yielding(mut self) -> Self {
        self.yield_first = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GrammarChecker for FakeGrammar {
    async fn check(&self, _text: &str) -> Result<GrammarReport, handle_errors::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.yield_first {
            tokio::task::yield_now().await;
        }
        let matches = (0..self.issues)
            .map(|i| serde_json::json!({ "message": format!("issue {}", i), "offset": i, "length": 1 }))
            .collect();
        Ok(GrammarReport {
            matches,
            ..GrammarReport::default()
        })
    }
}

/// A real client pointed at a port nobody listens on.
pub fn unreachable_grammar() -> LanguageTool {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .unwrap()
        .port();
    LanguageTool::new(
        &format!("http://127.0.0.1:{}/v2/check", port),
        "en-US",
        Duration::from_secs(2),
    )
    .unwrap()
}
