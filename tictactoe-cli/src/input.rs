//! 输入解析
//!
//! 只负责把一行文本解析为指令，不读写终端

use thiserror::Error;
use tictactoe_core::{Difficulty, Position};

/// 玩家回合的指令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    /// 退出游戏
    Quit,
    /// 在指定格子落子（尚未检查是否已占用）
    Place(Position),
}

/// 落子输入错误，消息直接展示给玩家
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("请输入两个数字作为行和列，例如 '2 3'。")]
    Malformed,

    #[error("行和列必须在 1 到 3 之间。")]
    OutOfRange,
}

/// 解析落子输入（行列从 1 开始）
pub fn parse_move(line: &str) -> Result<MoveCommand, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(MoveCommand::Quit);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(InputError::Malformed);
    };

    let row: i64 = row.parse().map_err(|_| InputError::Malformed)?;
    let col: i64 = col.parse().map_err(|_| InputError::Malformed)?;

    let row = to_index(row).ok_or(InputError::OutOfRange)?;
    let col = to_index(col).ok_or(InputError::OutOfRange)?;

    Position::new(row, col)
        .map(MoveCommand::Place)
        .ok_or(InputError::OutOfRange)
}

/// 1 起始的输入转为 0 起始的下标
fn to_index(value: i64) -> Option<usize> {
    usize::try_from(value.checked_sub(1)?).ok()
}

/// 解析是/否回答
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// 解析难度菜单选项
pub fn parse_difficulty(line: &str) -> Option<Difficulty> {
    match line.trim() {
        "1" => Some(Difficulty::Optimal),
        "2" => Some(Difficulty::Weakened),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(
            parse_move("1 3"),
            Ok(MoveCommand::Place(Position::new_unchecked(0, 2)))
        );
        assert_eq!(
            parse_move("  3   1 \n"),
            Ok(MoveCommand::Place(Position::new_unchecked(2, 0)))
        );
        assert_eq!(
            parse_move("3 3"),
            Ok(MoveCommand::Place(Position::new_unchecked(2, 2)))
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_move("q"), Ok(MoveCommand::Quit));
        assert_eq!(parse_move(" Q\n"), Ok(MoveCommand::Quit));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(parse_move(""), Err(InputError::Malformed));
        assert_eq!(parse_move("2"), Err(InputError::Malformed));
        assert_eq!(parse_move("1 2 3"), Err(InputError::Malformed));
        assert_eq!(parse_move("a b"), Err(InputError::Malformed));
        assert_eq!(parse_move("quit"), Err(InputError::Malformed));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(parse_move("0 1"), Err(InputError::OutOfRange));
        assert_eq!(parse_move("4 1"), Err(InputError::OutOfRange));
        assert_eq!(parse_move("1 4"), Err(InputError::OutOfRange));
        assert_eq!(parse_move("1 -2"), Err(InputError::OutOfRange));
        assert_eq!(
            parse_move("-9223372036854775808 1"),
            Err(InputError::OutOfRange)
        );
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no(" YES\n"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty("1"), Some(Difficulty::Optimal));
        assert_eq!(parse_difficulty("2\n"), Some(Difficulty::Weakened));
        assert_eq!(parse_difficulty("3"), None);
    }
}
