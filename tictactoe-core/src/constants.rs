//! 棋盘常量定义

/// 棋盘边长（行数与列数）
pub const BOARD_SIZE: usize = 3;

/// 记谱中空格使用的字符
pub const EMPTY_NOTATION_CHAR: char = '.';

/// 记谱中的行分隔符
pub const ROW_SEPARATOR: char = '/';
