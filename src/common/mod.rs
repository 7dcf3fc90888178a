pub mod comment;
pub mod env;
pub mod limit;
pub mod view;

pub use comment::*;
pub use env::{EnvProvider, SystemEnvProvider};
pub use limit::Limit;
pub use view::ViewMode;

#[cfg(test)]
pub use env::MockEnvProvider;
