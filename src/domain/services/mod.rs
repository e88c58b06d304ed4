mod suite_session;

pub use suite_session::*;
