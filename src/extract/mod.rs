pub mod matches;
pub mod odds;
pub mod teams;

pub use matches::extract_matches;
pub use teams::TeamWhitelist;
