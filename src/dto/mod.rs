pub mod game;
pub mod health;
pub mod home;
pub mod ping;
pub mod validation;
