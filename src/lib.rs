pub mod area;
pub mod config;
pub mod content;
pub mod dialogue;
pub mod engine;
pub mod entity;
pub mod error;
pub mod fade;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod npc;
pub mod player;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod session;
pub mod spawn;
pub mod trigger;
pub mod ui;
pub mod window;
