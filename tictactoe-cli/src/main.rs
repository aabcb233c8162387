use std::io;

use anyhow::Result;
use tictactoe_cli::{Game, GameSettings, LogLevel};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let settings_path = GameSettings::settings_path();
    let loaded = match &settings_path {
        Some(path) => GameSettings::load_from(path),
        None => Ok(None),
    };
    let settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => GameSettings::default(),
    };

    init_logging(settings.log_level)?;

    match (loaded, &settings_path) {
        (Ok(Some(_)), Some(path)) => info!("已加载设置: {:?}", path),
        (Ok(None), Some(path)) => {
            info!("设置文件不存在，写入默认设置: {:?}", path);
            if let Err(e) = settings.save_to(path) {
                warn!("无法写入默认设置: {:#}", e);
            }
        }
        (Err(e), _) => warn!("设置文件无效: {:#}，使用默认设置", e),
        (Ok(_), None) => warn!("无法获取配置目录，使用默认设置"),
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = Game::new(stdin.lock(), stdout.lock(), &settings);
    game.run()
}

/// 初始化日志（输出到 stderr，避免与棋盘混在一起）
fn init_logging(level: LogLevel) -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("tictactoe={}", level.as_str()).parse()?),
        )
        .init();
    Ok(())
}
