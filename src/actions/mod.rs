//! Use-case actions.
//!
//! Each action is a small struct generic over the repository traits it
//! touches, so the same code runs against SQLite in production and against
//! mocks in tests.

mod login;
mod logout;
mod mood_history;
mod record_mood;
mod signup;

pub use login::LoginAction;
pub use logout::LogoutAction;
pub use mood_history::MoodHistoryAction;
pub use record_mood::RecordMoodAction;
pub use signup::SignupAction;
