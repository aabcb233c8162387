//! 对局流程
//!
//! 负责一局内的轮流落子、胜负判定以及难度菜单和再来一局的交互。
//! 所有终端读写都在这里完成，规则库与 AI 引擎不接触输入输出。

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tictactoe_ai::{AiEngine, Difficulty};
use tictactoe_core::{Board, Mark, Outcome, Position};
use tracing::info;

use crate::input::{parse_difficulty, parse_move, parse_yes_no, MoveCommand};
use crate::render::render_board;
use crate::settings::{FirstPlayer, GameSettings};

/// 玩家标记
pub const HUMAN_MARK: Mark = Mark::X;

/// 电脑标记
pub const COMPUTER_MARK: Mark = Mark::O;

/// 终端对局
pub struct Game<R, W> {
    input: R,
    output: W,
    board: Board,
    engine: AiEngine,
    /// 用于决定先手
    rng: ChaCha8Rng,
    first_player: FirstPlayer,
    preset_difficulty: Option<Difficulty>,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(input: R, output: W, settings: &GameSettings) -> Self {
        Self::with_rng(input, output, settings, ChaCha8Rng::from_entropy())
    }

    /// 使用固定种子创建（先手与随机落子均可复现）
    pub fn with_seed(input: R, output: W, settings: &GameSettings, seed: u64) -> Self {
        Self::with_rng(input, output, settings, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(input: R, output: W, settings: &GameSettings, mut rng: ChaCha8Rng) -> Self {
        let config = settings.ai_config(settings.difficulty.unwrap_or_default());
        let engine = AiEngine::with_seed(config, rng.gen());

        Self {
            input,
            output,
            board: Board::new(),
            engine,
            rng,
            first_player: settings.first_player,
            preset_difficulty: settings.difficulty,
        }
    }

    /// 运行游戏直到玩家退出
    pub fn run(&mut self) -> Result<()> {
        self.print_welcome()?;

        let difficulty = match self.preset_difficulty {
            Some(difficulty) => difficulty,
            None => match select_difficulty(&mut self.input, &mut self.output)? {
                Some(difficulty) => difficulty,
                None => return self.print_goodbye(),
            },
        };
        self.engine.set_difficulty(difficulty);
        info!("难度: {:?}", difficulty);

        loop {
            self.board.clear();

            match self.play_round()? {
                Some(outcome) => info!("本局结束: {:?}", outcome),
                None => {
                    writeln!(self.output, "已退出游戏。")?;
                    return Ok(());
                }
            }

            if !ask_yes_no(&mut self.input, &mut self.output, "再来一局？(y/n): ")? {
                return self.print_goodbye();
            }
        }
    }

    /// 进行一局，玩家中途退出时返回 `None`
    pub fn play_round(&mut self) -> Result<Option<Outcome>> {
        let mut current = if self.human_starts() {
            HUMAN_MARK
        } else {
            COMPUTER_MARK
        };
        info!(
            "新一局开始 (先手设置: {})",
            self.first_player.display_name()
        );

        writeln!(self.output)?;
        writeln!(
            self.output,
            "你执 '{}'，电脑执 '{}'。",
            HUMAN_MARK, COMPUTER_MARK
        )?;
        writeln!(
            self.output,
            "{}先手。",
            if current == HUMAN_MARK { "你" } else { "电脑" }
        )?;

        loop {
            write!(self.output, "{}", render_board(&self.board))?;

            if current == HUMAN_MARK {
                let Some(pos) = read_human_move(&mut self.input, &mut self.output, &self.board)?
                else {
                    return Ok(None);
                };
                self.board.try_place_at(pos, HUMAN_MARK)?;
            } else {
                let pos = self
                    .engine
                    .choose_move(&self.board, COMPUTER_MARK, HUMAN_MARK)?;
                self.board.try_place_at(pos, COMPUTER_MARK)?;
                writeln!(
                    self.output,
                    "电脑落子：第 {} 行，第 {} 列。",
                    pos.row + 1,
                    pos.col + 1
                )?;
            }

            let outcome = self.board.outcome();
            if outcome != Outcome::InProgress {
                write!(self.output, "{}", render_board(&self.board))?;
                let message = match outcome {
                    Outcome::Win(winner) if winner == HUMAN_MARK => "你赢了！漂亮。",
                    Outcome::Win(_) => "电脑获胜，下次好运。",
                    _ => "平局。",
                };
                writeln!(self.output, "{}", message)?;
                writeln!(self.output)?;
                return Ok(Some(outcome));
            }

            current = if current == HUMAN_MARK {
                COMPUTER_MARK
            } else {
                HUMAN_MARK
            };
        }
    }

    /// 当前棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    fn human_starts(&mut self) -> bool {
        match self.first_player {
            FirstPlayer::Human => true,
            FirstPlayer::Computer => false,
            FirstPlayer::Random => self.rng.gen_bool(0.5),
        }
    }

    fn print_welcome(&mut self) -> Result<()> {
        writeln!(self.output, "=== 井字棋 ===")?;
        writeln!(self.output)?;
        writeln!(self.output, "单人与电脑对弈，棋盘为 3x3，你执 'X'。")?;
        writeln!(self.output, "落子格式为 '行 列'，例如 '1 3'。")?;
        writeln!(self.output, "随时输入 'q' 退出。")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn print_goodbye(&mut self) -> Result<()> {
        writeln!(self.output, "感谢游玩，再见！")?;
        Ok(())
    }
}

/// 读取一行输入，EOF 时返回 `None`
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("读取输入失败")?;
    Ok((read > 0).then_some(line))
}

/// 显示提示并刷新输出
fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    write!(output, "{}", text)?;
    output.flush()?;
    Ok(())
}

/// 读取玩家落子，直到得到一个空格；玩家退出或输入结束时返回 `None`
pub fn read_human_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    board: &Board,
) -> Result<Option<Position>> {
    loop {
        prompt(output, "你的落子（行 列）: ")?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match parse_move(&line) {
            Ok(MoveCommand::Quit) => return Ok(None),
            Ok(MoveCommand::Place(pos)) => {
                if board.is_cell_empty(pos.row, pos.col)? {
                    return Ok(Some(pos));
                }
                writeln!(output, "该位置已被占用，请换一个。")?;
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

/// 难度菜单，输入结束时返回 `None`
pub fn select_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<Difficulty>> {
    loop {
        writeln!(output, "选择难度：")?;
        for (index, difficulty) in Difficulty::all().iter().enumerate() {
            writeln!(output, "{}. {}", index + 1, difficulty.display_name())?;
        }
        prompt(output, "请输入选项（1 或 2）: ")?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        if let Some(difficulty) = parse_difficulty(&line) {
            writeln!(output)?;
            return Ok(Some(difficulty));
        }
        writeln!(output, "请输入 1 或 2。")?;
    }
}

/// 是/否提问，输入结束视为否
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool> {
    loop {
        prompt(output, question)?;

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };

        if let Some(answer) = parse_yes_no(&line) {
            return Ok(answer);
        }
        writeln!(output, "请回答 'y' 或 'n'。")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn settings(first_player: FirstPlayer, difficulty: Option<Difficulty>) -> GameSettings {
        GameSettings {
            difficulty,
            first_player,
            ..GameSettings::default()
        }
    }

    /// 用脚本输入运行整个游戏，返回全部输出
    fn run_script(settings: &GameSettings, script: &str) -> String {
        let mut output: Vec<u8> = Vec::new();
        let input = Cursor::new(script.to_string());
        let mut game = Game::with_seed(input, &mut output, settings, 1);
        game.run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_eof_at_difficulty_menu() {
        let output = run_script(&settings(FirstPlayer::Human, None), "");

        assert!(output.contains("选择难度"));
        assert!(output.contains("感谢游玩"));
    }

    #[test]
    fn test_invalid_difficulty_reprompts() {
        let output = run_script(&settings(FirstPlayer::Human, None), "3\n1\nq\n");

        assert!(output.contains("请输入 1 或 2。"));
        assert!(output.contains("你先手。"));
        assert!(output.contains("已退出游戏。"));
    }

    #[test]
    fn test_invalid_move_messages() {
        let script = "abc\n0 1\n4 4\n1\nQ\n";
        let config = settings(FirstPlayer::Human, Some(Difficulty::Optimal));
        let output = run_script(&config, script);

        assert!(!output.contains("选择难度"));
        assert_eq!(output.matches("请输入两个数字作为行和列").count(), 2);
        assert_eq!(output.matches("行和列必须在 1 到 3 之间").count(), 2);
        assert!(output.contains("已退出游戏。"));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let script = "2 2\n2 2\nq\n";
        let config = settings(FirstPlayer::Human, Some(Difficulty::Optimal));
        let output = run_script(&config, script);

        assert!(output.contains("电脑落子"));
        assert!(output.contains("该位置已被占用"));
    }

    #[test]
    fn test_computer_first_opens_in_corner() {
        let config = settings(FirstPlayer::Computer, Some(Difficulty::Optimal));
        let output = run_script(&config, "q\n");

        assert!(output.contains("电脑先手。"));
        assert!(output.contains("电脑落子：第 1 行，第 1 列。"));
    }

    #[test]
    fn test_full_round_against_optimal() {
        // 玩家按行优先顺序尝试所有格子，被占用的会被拒绝
        let script = "1 1\n1 2\n1 3\n2 1\n2 2\n2 3\n3 1\n3 2\n3 3\nn\n";
        let config = settings(FirstPlayer::Human, Some(Difficulty::Optimal));
        let output = run_script(&config, script);

        assert!(!output.contains("你赢了"));
        assert!(output.contains("电脑获胜") || output.contains("平局"));
        assert!(output.contains("感谢游玩"));
    }

    #[test]
    fn test_replay_starts_new_round() {
        let script = "1 1\n1 2\n1 3\n2 1\n2 2\n2 3\n3 1\n3 2\n3 3\ny\nq\n";
        let config = settings(FirstPlayer::Human, Some(Difficulty::Optimal));
        let output = run_script(&config, script);

        assert_eq!(output.matches("你先手。").count(), 2);
        assert!(output.contains("已退出游戏。"));
    }

    #[test]
    fn test_play_round_quit_keeps_board() {
        let mut output: Vec<u8> = Vec::new();
        let config = settings(FirstPlayer::Computer, Some(Difficulty::Optimal));
        let input = Cursor::new("q\n".to_string());
        let mut game = Game::with_seed(input, &mut output, &config, 3);

        assert_eq!(game.play_round().unwrap(), None);
        assert_eq!(game.board().cell(0, 0), Ok(COMPUTER_MARK));
    }

    #[test]
    fn test_read_human_move_uses_given_board() {
        let board: Board = "X../.../...".parse().unwrap();
        let mut input = Cursor::new("1 1\n1 2\n");
        let mut output: Vec<u8> = Vec::new();

        let pos = read_human_move(&mut input, &mut output, &board).unwrap();
        assert_eq!(pos, Some(Position::new_unchecked(0, 1)));
        assert!(String::from_utf8(output).unwrap().contains("该位置已被占用"));
    }

    #[test]
    fn test_read_human_move_eof() {
        let board = Board::new();
        let mut input = Cursor::new("");
        let mut output: Vec<u8> = Vec::new();

        assert_eq!(read_human_move(&mut input, &mut output, &board).unwrap(), None);
    }

    #[test]
    fn test_ask_yes_no() {
        let mut output: Vec<u8> = Vec::new();

        let mut input = Cursor::new("maybe\nyes\n");
        assert!(ask_yes_no(&mut input, &mut output, "?").unwrap());

        let mut input = Cursor::new("");
        assert!(!ask_yes_no(&mut input, &mut output, "?").unwrap());

        assert!(String::from_utf8(output).unwrap().contains("请回答 'y' 或 'n'。"));
    }
}
