pub mod aoc;
pub mod discord;
