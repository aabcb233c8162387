//! 棋盘状态与规则

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::error::{GameError, Result};
use crate::mark::{Mark, Position};

/// 所有可能的连线：三行、三列、主对角线、副对角线（按此顺序检查）
const LINES: [[Position; 3]; 8] = [
    // 行
    [Position::new_unchecked(0, 0), Position::new_unchecked(0, 1), Position::new_unchecked(0, 2)],
    [Position::new_unchecked(1, 0), Position::new_unchecked(1, 1), Position::new_unchecked(1, 2)],
    [Position::new_unchecked(2, 0), Position::new_unchecked(2, 1), Position::new_unchecked(2, 2)],
    // 列
    [Position::new_unchecked(0, 0), Position::new_unchecked(1, 0), Position::new_unchecked(2, 0)],
    [Position::new_unchecked(0, 1), Position::new_unchecked(1, 1), Position::new_unchecked(2, 1)],
    [Position::new_unchecked(0, 2), Position::new_unchecked(1, 2), Position::new_unchecked(2, 2)],
    // 对角线
    [Position::new_unchecked(0, 0), Position::new_unchecked(1, 1), Position::new_unchecked(2, 2)],
    [Position::new_unchecked(0, 2), Position::new_unchecked(1, 1), Position::new_unchecked(2, 0)],
];

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// 尚未结束
    InProgress,
    /// 某一方连成一线
    Win(Mark),
    /// 棋盘已满且无人获胜
    Draw,
}

/// 3x3 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// 按 [行][列] 索引
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// 创建空棋盘
    pub fn new() -> Self {
        Self::default()
    }

    /// 坐标是否在棋盘内
    pub fn is_in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    fn ensure_in_bounds(row: usize, col: usize) -> Result<()> {
        if Self::is_in_bounds(row, col) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// 清空棋盘
    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// 获取指定格子的标记
    pub fn cell(&self, row: usize, col: usize) -> Result<Mark> {
        Self::ensure_in_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// 指定格子是否为空
    pub fn is_cell_empty(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.cell(row, col)?.is_empty())
    }

    /// 尝试落子
    ///
    /// 格子已被占用时返回 `Ok(false)`，棋盘不变；落子成功返回 `Ok(true)`。
    /// 空标记和越界坐标在修改棋盘之前就被拒绝。
    pub fn try_place(&mut self, row: usize, col: usize, mark: Mark) -> Result<bool> {
        if mark.is_empty() {
            return Err(GameError::EmptyMark);
        }

        if !self.is_cell_empty(row, col)? {
            return Ok(false);
        }

        self.cells[row][col] = mark;
        Ok(true)
    }

    /// 在指定坐标落子
    pub fn try_place_at(&mut self, pos: Position, mark: Mark) -> Result<bool> {
        self.try_place(pos.row, pos.col, mark)
    }

    /// 获取胜者，没有胜者时返回 [`Mark::Empty`]
    ///
    /// 依次检查各行、各列、两条对角线，返回第一条连线的标记。
    pub fn winner(&self) -> Mark {
        for [a, b, c] in LINES {
            let mark = self.cells[a.row][a.col];
            if !mark.is_empty()
                && mark == self.cells[b.row][b.col]
                && mark == self.cells[c.row][c.col]
            {
                return mark;
            }
        }

        Mark::Empty
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|mark| !mark.is_empty())
    }

    /// 当前对局结果
    pub fn outcome(&self) -> Outcome {
        let winner = self.winner();
        if !winner.is_empty() {
            Outcome::Win(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// 按行优先顺序枚举所有空格
    ///
    /// 迭代器借用棋盘，重新调用即可从头枚举。
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new_unchecked(row, col)))
            .filter(move |pos| self.cells[pos.row][pos.col].is_empty())
    }

    /// 逐行访问所有格子
    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}
