//! 搜索引擎
//!
//! 实现穷举 Minimax（无剪枝），以及在其之上的难度策略

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, GameError, Mark, Position, Result};

use crate::evaluate::Evaluator;

// 重导出 Difficulty 以便外部使用
pub use tictactoe_core::Difficulty;

/// 弱化难度下随机落子的默认概率
pub const DEFAULT_RANDOM_MOVE_PROBABILITY: f64 = 0.3;

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 弱化难度下每步随机落子的概率
    pub random_move_probability: f64,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            random_move_probability: DEFAULT_RANDOM_MOVE_PROBABILITY,
        }
    }

    pub fn with_random_move_probability(mut self, probability: f64) -> Self {
        self.random_move_probability = probability;
        self
    }

    /// 本次落子实际使用的随机概率
    ///
    /// 完美难度恒为 0；配置值不在 [0, 1] 内（包括 NaN）时使用默认值。
    pub fn effective_random_probability(&self) -> f64 {
        match self.difficulty {
            Difficulty::Optimal => 0.0,
            Difficulty::Weakened => {
                if (0.0..=1.0).contains(&self.random_move_probability) {
                    self.random_move_probability
                } else {
                    DEFAULT_RANDOM_MOVE_PROBABILITY
                }
            }
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Optimal)
    }
}

/// AI 引擎
///
/// 随机数源可注入，测试中使用固定种子即可复现弱化难度的随机落子。
pub struct AiEngine<R = ChaCha8Rng> {
    config: AiConfig,
    rng: R,
    nodes_searched: u64,
}

impl AiEngine<ChaCha8Rng> {
    /// 创建新的 AI 引擎（随机种子取自系统熵源）
    pub fn new(config: AiConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 使用固定种子创建
    pub fn with_seed(config: AiConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> AiEngine<R> {
    /// 使用指定随机数源创建
    pub fn with_rng(config: AiConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            nodes_searched: 0,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 切换难度
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// 为 `own` 选择下一步落子
    ///
    /// 返回的坐标一定是 `board` 上的空格。调用方的棋盘不会被修改。
    pub fn choose_move(&mut self, board: &Board, own: Mark, other: Mark) -> Result<Position> {
        Self::validate(board, own, other)?;
        self.nodes_searched = 0;

        let probability = self.config.effective_random_probability();
        if probability > 0.0 && self.rng.gen_bool(probability) {
            let empty: Vec<Position> = board.empty_positions().collect();
            if let Some(pos) = empty.choose(&mut self.rng) {
                tracing::debug!("随机落子: {} (概率 {})", pos, probability);
                return Ok(*pos);
            }
        }

        self.best_move(board, own, other)
    }

    /// Minimax 最优落子
    ///
    /// 分数相同时取枚举顺序（行优先）中的第一个。
    pub fn best_move(&mut self, board: &Board, own: Mark, other: Mark) -> Result<Position> {
        tracing::debug!("AI 开始思考: 棋盘 {}, 执 {:?}", board, own);

        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in self.score_moves(board, own, other)? {
            // 只有严格更高的分数才替换，同分保留先枚举到的格子
            let better = match best {
                Some((_, best_score)) => score > best_score,
                None => true,
            };
            if better {
                best = Some((pos, score));
            }
        }

        let (pos, score) = best.ok_or(GameError::NoEmptyCells)?;
        tracing::debug!(
            "最佳落子: {}, 分数: {}, 搜索节点: {}",
            pos,
            score,
            self.nodes_searched
        );
        Ok(pos)
    }

    /// 按枚举顺序给出每个空格的 Minimax 分数（`own` 视角）
    pub fn score_moves(
        &mut self,
        board: &Board,
        own: Mark,
        other: Mark,
    ) -> Result<Vec<(Position, i32)>> {
        Self::validate(board, own, other)?;
        self.nodes_searched = 0;

        let mut scores = Vec::with_capacity(board.empty_positions().count());
        for pos in board.empty_positions() {
            let mut child = board.clone();
            child.try_place_at(pos, own)?;

            // 落子后轮到对方，为极小层
            let score = self.minimax(&child, own, other, false, 1)?;
            scores.push((pos, score));
        }

        Ok(scores)
    }

    /// Minimax 递归
    fn minimax(
        &mut self,
        board: &Board,
        own: Mark,
        other: Mark,
        maximizing: bool,
        depth: i32,
    ) -> Result<i32> {
        self.nodes_searched += 1;

        if let Some(score) = Evaluator::evaluate(board, own, other, depth) {
            return Ok(score);
        }

        let mover = if maximizing { own } else { other };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in board.empty_positions() {
            let mut child = board.clone();
            child.try_place_at(pos, mover)?;

            let score = self.minimax(&child, own, other, !maximizing, depth + 1)?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        Ok(best)
    }

    fn validate(board: &Board, own: Mark, other: Mark) -> Result<()> {
        if own.is_empty() || other.is_empty() || own == other {
            return Err(GameError::InvalidMarks { own, other });
        }

        if board.is_full() {
            return Err(GameError::NoEmptyCells);
        }

        Ok(())
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
