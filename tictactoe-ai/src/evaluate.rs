//! 终局评估函数

use tictactoe_core::{Board, Mark};

/// 胜负基准分，实际得分按深度修正
pub const WIN_SCORE: i32 = 10;

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估终局（`own` 视角），未结束的局面返回 `None`
    ///
    /// 越早获胜分越高（`10 - depth`），越晚输掉分越高（`depth - 10`），和棋为 0。
    pub fn evaluate(board: &Board, own: Mark, other: Mark, depth: i32) -> Option<i32> {
        let winner = board.winner();

        if winner == own {
            return Some(WIN_SCORE - depth);
        }

        if winner == other {
            return Some(depth - WIN_SCORE);
        }

        if board.is_full() {
            return Some(0);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_terminal() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(Evaluator::evaluate(&board, Mark::O, Mark::X, 2), None);
    }

    #[test]
    fn test_win_prefers_shallow_depth() {
        let board: Board = "OOO/XX./...".parse().unwrap();

        assert_eq!(Evaluator::evaluate(&board, Mark::O, Mark::X, 1), Some(9));
        assert_eq!(Evaluator::evaluate(&board, Mark::O, Mark::X, 5), Some(5));
    }

    #[test]
    fn test_loss_prefers_deep_depth() {
        let board: Board = "OOO/XX./...".parse().unwrap();

        assert_eq!(Evaluator::evaluate(&board, Mark::X, Mark::O, 2), Some(-8));
        assert_eq!(Evaluator::evaluate(&board, Mark::X, Mark::O, 6), Some(-4));
    }

    #[test]
    fn test_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(Evaluator::evaluate(&board, Mark::O, Mark::X, 8), Some(0));
    }
}
