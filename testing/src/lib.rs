//! # Tidy Testing
//!
//! Testing utilities and helpers for Tidy reducers.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then builder for reducer tests
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use tidy_testing::{ReducerTest, ScriptedIdGenerator};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(ScriptedIdGenerator::new(["b"]))))
//!     .given_state(TodoState::default())
//!     .when_action(TodoAction::Add { text: "B".to_string() })
//!     .then_state(|state| assert_eq!(state.items[0].id.as_str(), "b"))
//!     .run();
//! ```

pub mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tidy_core::environment::IdGenerator;

    /// Id generator that hands out a fixed script of ids
    ///
    /// Once the script is exhausted it falls back to `"generated-1"`,
    /// `"generated-2"`, ... so tests that add more items than scripted still
    /// get unique ids.
    ///
    /// # Example
    ///
    /// ```
    /// use tidy_testing::mocks::ScriptedIdGenerator;
    /// use tidy_core::environment::IdGenerator;
    ///
    /// let ids = ScriptedIdGenerator::new(["a", "b"]);
    /// assert_eq!(ids.next_id(), "a");
    /// assert_eq!(ids.next_id(), "b");
    /// assert_eq!(ids.next_id(), "generated-1");
    /// ```
    #[derive(Debug, Default)]
    pub struct ScriptedIdGenerator {
        script: Mutex<VecDeque<String>>,
        fallback: AtomicU64,
    }

    impl ScriptedIdGenerator {
        /// Create a generator that yields `ids` in order
        #[must_use]
        pub fn new<I, S>(ids: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                script: Mutex::new(ids.into_iter().map(Into::into).collect()),
                fallback: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for ScriptedIdGenerator {
        fn next_id(&self) -> String {
            let scripted = self
                .script
                .lock()
                .ok()
                .and_then(|mut script| script.pop_front());
            scripted.unwrap_or_else(|| {
                let n = self.fallback.fetch_add(1, Ordering::Relaxed) + 1;
                format!("generated-{n}")
            })
        }
    }
}

/// Install a `tracing` subscriber that writes through the test harness
///
/// Safe to call from every test; only the first call installs anything.
/// Honours `RUST_LOG`, defaulting to `debug`.
pub fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::ScriptedIdGenerator;
pub use reducer_test::{ReducerTest, assertions};
