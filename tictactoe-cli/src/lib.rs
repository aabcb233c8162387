//! 井字棋命令行客户端
//!
//! 人类玩家（X）在终端中与电脑（O）对弈

pub mod game;
pub mod input;
pub mod render;
pub mod settings;

pub use game::{Game, COMPUTER_MARK, HUMAN_MARK};
pub use settings::{FirstPlayer, GameSettings, LogLevel};
