//! Storage Adapters
//!
//! Non-database implementations of the repository ports.
//!
//! ## Available Adapters
//!
//! - **InMemoryStore** - Courses and students in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! let courses: Arc<dyn CourseRepository> = Arc::new(store.clone());
//! let students: Arc<dyn StudentRepository> = Arc::new(store);
//! ```

mod in_memory_store;

pub use in_memory_store::InMemoryStore;
