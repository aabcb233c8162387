//! 井字棋规则库
//!
//! 包含:
//! - 标记、坐标、棋盘等核心数据结构
//! - 落子合法性、胜负与和棋判定
//! - 棋盘记谱格式
//! - 电脑难度定义

mod board;
mod constants;
mod difficulty;
mod error;
mod mark;
mod notation;

pub use board::{Board, Outcome};
pub use constants::*;
pub use difficulty::Difficulty;
pub use error::{GameError, Result};
pub use mark::{Mark, Position};
pub use notation::{BoardNotation, EMPTY_BOARD};
