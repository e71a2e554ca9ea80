#![allow(dead_code)]

use async_trait::async_trait;
use standings_scraper::app::ports::{PageTransport, TransportError};
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

pub const FIXTURE: &str = include_str!("../fixtures/boxscores.html");

pub enum Step {
    Reply(Result<String, TransportError>),
    /// Never completes; used to cancel mid-request.
    Hang,
}

pub fn ok(body: &str) -> Step {
    Step::Reply(Ok(body.to_string()))
}

pub fn network(reason: &str) -> Step {
    Step::Reply(Err(TransportError::Network(reason.to_string())))
}

pub fn timeout(reason: &str) -> Step {
    Step::Reply(Err(TransportError::Timeout(reason.to_string())))
}

pub fn unexpected(reason: &str) -> Step {
    Step::Reply(Err(TransportError::Unexpected(reason.to_string())))
}

/// Replays a fixed script of outcomes, one per request.
#[derive(Clone)]
pub struct ScriptedTransport {
    steps: Arc<Mutex<VecDeque<Step>>>,
    calls: Arc<AtomicUsize>,
    urls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedTransport {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into())),
            calls: Arc::new(AtomicUsize::new(0)),
            urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageTransport for ScriptedTransport {
    async fn get_text(&self, url: &str) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Reply(outcome)) => outcome,
            Some(Step::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(TransportError::Network("script exhausted".to_string())),
        }
    }
}

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }

    pub fn count_level(&self, level: &str) -> usize {
        self.contents().lines().filter(|line| line.contains(level)).count()
    }

    /// Installs a thread-local subscriber writing into this capture.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
