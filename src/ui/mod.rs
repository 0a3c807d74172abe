pub mod auth;
pub mod common;
pub mod crud;
pub mod icon;
pub mod layout;
pub mod notifications;
pub mod pages;

pub use icon::{Icon, icons};
