pub mod person;
pub mod standup;
