//! 游戏设置模块
//!
//! 提供设置数据结构与 JSON 持久化

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tictactoe_ai::{AiConfig, Difficulty, DEFAULT_RANDOM_MOVE_PROBABILITY};

/// 每局先手方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FirstPlayer {
    /// 每局随机
    #[default]
    Random,
    /// 玩家先手
    Human,
    /// 电脑先手
    Computer,
}

impl FirstPlayer {
    pub fn display_name(&self) -> &'static str {
        match self {
            FirstPlayer::Random => "随机",
            FirstPlayer::Human => "玩家",
            FirstPlayer::Computer => "电脑",
        }
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// 日志过滤指令使用的级别名
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// 固定难度；为空时每次启动显示难度菜单
    pub difficulty: Option<Difficulty>,
    /// 随机难度下电脑随机落子的概率
    pub random_move_probability: f64,
    /// 先手方
    pub first_player: FirstPlayer,
    /// 日志级别
    pub log_level: LogLevel,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: None,
            random_move_probability: DEFAULT_RANDOM_MOVE_PROBABILITY,
            first_player: FirstPlayer::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl GameSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 从文件加载设置，文件不存在时返回 `None`
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("无法读取设置文件: {:?}", path))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("设置文件格式无效: {:?}", path))?;

        Ok(Some(settings))
    }

    /// 保存设置到文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        fs::write(path, content).with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }

    /// 按指定难度生成 AI 配置
    pub fn ai_config(&self, difficulty: Difficulty) -> AiConfig {
        AiConfig::from_difficulty(difficulty)
            .with_random_move_probability(self.random_move_probability)
    }
}
