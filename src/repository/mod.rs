//! Storage models and repository traits.
//!
//! The actions and the HTTP layer only ever see these traits; the `sqlite`
//! module provides the production implementations and the `Mock*` types back
//! tests without a database.

mod mood;
mod mood_mock;
mod user;
mod user_mock;

pub use mood::{DateRange, MoodEntry, MoodEntryRepository};
pub use mood_mock::MockMoodEntryRepository;
pub use user::{User, UserRepository};
pub use user_mock::MockUserRepository;
