//! HiPat platform core.
//!
//! Mentor-side coaching services behind storage- and UI-agnostic SPIs:
//! the tool catalog, the embedded tool channel, submission intake and
//! roster promotion. Everything ships with in-memory implementations
//! that can simulate backend latency; durable stores plug in behind the
//! same traits.

pub use hipat_channel as channel;
pub use hipat_errors as errors;
pub use hipat_observe as observe;
pub use hipat_roster as roster;
pub use hipat_storage as storage;
pub use hipat_submissions as submissions;
pub use hipat_tools as tools;
pub use hipat_types as types;
