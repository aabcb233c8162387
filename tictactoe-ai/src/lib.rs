//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局评估函数
//! - 穷举 Minimax 搜索
//! - 难度策略（完美 / 随机弱化）

mod evaluate;
mod search;

pub use evaluate::{Evaluator, WIN_SCORE};
pub use search::{AiConfig, AiEngine, Difficulty, DEFAULT_RANDOM_MOVE_PROBABILITY};
