mod keyword;
mod recommend;
mod serve;

pub use keyword::keyword;
pub use recommend::recommend;
pub use serve::serve;
