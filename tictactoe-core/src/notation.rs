//! 棋盘记谱格式
//!
//! 每行三个字符，行之间用 `/` 分隔，`X`/`O` 表示双方标记，`.` 表示空格。
//!
//! 示例：
//! `XX./O../...`

use crate::board::Board;
use crate::constants::{BOARD_SIZE, ROW_SEPARATOR};
use crate::error::{GameError, Result};
use crate::mark::Mark;

/// 空棋盘记谱
pub const EMPTY_BOARD: &str = ".../.../...";

/// 记谱格式处理
pub struct BoardNotation;

impl BoardNotation {
    /// 解析记谱字符串为棋盘
    pub fn parse(notation: &str) -> Result<Board> {
        let rows: Vec<&str> = notation.trim().split(ROW_SEPARATOR).collect();
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let marks = line
                .chars()
                .map(|c| {
                    Mark::from_notation_char(c).ok_or_else(|| GameError::InvalidNotation {
                        reason: format!("Unknown cell character '{}'", c),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            if marks.len() != BOARD_SIZE {
                return Err(GameError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} cells, expected {}",
                        row,
                        marks.len(),
                        BOARD_SIZE
                    ),
                });
            }

            for (col, mark) in marks.into_iter().enumerate() {
                if !mark.is_empty() {
                    board.try_place(row, col, mark)?;
                }
            }
        }

        Ok(board)
    }

    /// 生成棋盘的记谱字符串
    pub fn format(board: &Board) -> String {
        let separator = ROW_SEPARATOR.to_string();
        board
            .rows()
            .iter()
            .map(|row| row.iter().map(Mark::to_notation_char).collect::<String>())
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", BoardNotation::format(self))
    }
}

impl std::str::FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        BoardNotation::parse(s)
    }
}
