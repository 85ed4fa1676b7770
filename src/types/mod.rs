pub mod map;
pub mod view;
pub mod workout;
