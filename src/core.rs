pub mod announce;
pub mod commands;
pub mod components;
pub mod display;
pub mod interaction;
pub mod leaderboard;
pub mod render;
pub mod signature;
pub mod standings;
pub mod templates;
