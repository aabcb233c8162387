//! 错误类型定义

use thiserror::Error;

use crate::mark::Mark;

/// 棋盘规则错误
///
/// 这些都是调用方违反约定造成的错误。向已占用的格子落子不属于错误，
/// 由 [`Board::try_place`](crate::Board::try_place) 返回 `false` 表示。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 坐标越界
    #[error("Cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// 不能放置空标记
    #[error("Cannot place an empty mark")]
    EmptyMark,

    /// 双方标记必须不同且非空
    #[error("Marks must be distinct and non-empty: got {own:?} and {other:?}")]
    InvalidMarks { own: Mark, other: Mark },

    /// 棋盘已满，无处落子
    #[error("Board has no empty cells")]
    NoEmptyCells,

    /// 无效的记谱字符串
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
