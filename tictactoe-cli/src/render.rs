//! 棋盘文本渲染

use tictactoe_core::Board;

const SEPARATOR: &str = "  -----------";

/// 渲染带行列编号的棋盘
pub fn render_board(board: &Board) -> String {
    let mut lines = vec![String::new(), "   1   2   3".to_string(), SEPARATOR.to_string()];

    for (index, row) in board.rows().iter().enumerate() {
        let cells: String = row
            .iter()
            .map(|mark| format!(" {} |", mark.display_char()))
            .collect();
        lines.push(format!("{} |{}", index + 1, cells));
        lines.push(SEPARATOR.to_string());
    }

    lines.push(String::new());
    lines.join("\n") + "\n"
}
