//! Language model access.
//!
//! [`completion`] talks to an OpenAI-compatible chat-completion endpoint (Groq by
//! default); [`keyword`] turns a user's mood into a Spotify search keyword and
//! owns the fallback policy.

pub mod completion;
pub mod keyword;

pub use keyword::{FALLBACK_KEYWORD, build_prompt, derive_keyword};
