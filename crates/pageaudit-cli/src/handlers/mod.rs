pub mod list;
pub mod reasons;
pub mod run;
