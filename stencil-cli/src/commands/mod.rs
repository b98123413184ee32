pub mod copy;
pub mod create;
pub mod edit;
pub mod list;
pub mod remove;
pub mod rename;
pub mod show;
