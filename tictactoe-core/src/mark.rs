//! 标记与坐标定义

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::EMPTY_NOTATION_CHAR;

/// 格子上的标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// 空格
    #[default]
    Empty,
    /// X 方
    X,
    /// O 方
    O,
}

impl Mark {
    /// 是否为空格
    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    /// 获取显示字符（空格显示为空白）
    pub fn display_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => ' ',
        }
    }

    /// 获取记谱字符
    pub fn to_notation_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => EMPTY_NOTATION_CHAR,
        }
    }

    /// 从记谱字符解析（大小写均可）
    pub fn from_notation_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            EMPTY_NOTATION_CHAR => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_char())
    }
}

/// 棋盘坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-2)
    pub row: usize,
    /// 列 (0-2)
    pub col: usize,
}

impl Position {
    /// 创建新坐标，越界时返回 `None`
    pub fn new(row: usize, col: usize) -> Option<Self> {
        Board::is_in_bounds(row, col).then_some(Self { row, col })
    }

    /// 创建新坐标（不检查边界，内部使用）
    pub const fn new_unchecked(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
