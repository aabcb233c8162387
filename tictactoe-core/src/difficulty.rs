//! 电脑难度

use serde::{Deserialize, Serialize};

/// 电脑难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// 完美：始终走 Minimax 最优解，不会输
    #[default]
    Optimal,
    /// 弱化：按一定概率随机落子，其余时候走最优解
    Weakened,
}

impl Difficulty {
    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Optimal => "完美（不可战胜）",
            Difficulty::Weakened => "随机（偶尔随机落子）",
        }
    }

    /// 所有选项（菜单顺序）
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Optimal, Difficulty::Weakened]
    }
}
