#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

pub mod app;
pub mod basic;
pub mod collision;
pub mod error;
pub mod food;
pub mod game;
pub mod hardware;
pub mod matrix;
pub mod prefs;
pub mod snake;
