pub mod game;
pub mod home;
