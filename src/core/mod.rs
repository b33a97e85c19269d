pub mod definitions;
pub mod engine;
pub mod game;
pub mod promotion;
pub mod rules;
pub mod turn;
pub mod utils;
