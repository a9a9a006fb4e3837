//! Menu loop and in-game prompt loop

use std::io::{BufRead, Write};

use rand::Rng;

use crate::{
    Result,
    error::Error,
    leaderboard::LeaderboardStore,
    ports::LeaderboardRepository,
    tictactoe::{GameResult, GameSession, Selector},
};

use super::output::{MENU, render_board, render_square_numbers};

/// Run the top-level menu until the user quits or input ends
///
/// Commands: `1` plays a game, `2` saves a score under a prompted name,
/// `3` displays the leaderboard, `q`/`Q` quits. Anything else re-displays
/// the menu with a complaint.
pub fn run<I, O, R, S>(
    input: &mut I,
    output: &mut O,
    rng: &mut R,
    store: &LeaderboardStore<S>,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng,
    S: LeaderboardRepository,
{
    loop {
        write!(output, "{MENU}Enter your choice: ")?;
        output.flush()?;

        let Some(choice) = read_line(input)? else {
            break;
        };

        match choice.as_str() {
            "1" => play_game(input, output, rng)?,
            "2" => save_score(input, output, store)?,
            "3" => display_leaderboard(output, store)?,
            "q" | "Q" => break,
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }

    Ok(())
}

/// Play one game: human first, then the computer, until a win or draw
///
/// Invalid square choices (not a number, out of range, already taken)
/// re-prompt the human without advancing the turn. The board is rendered
/// after every placement.
pub fn play_game<I, O, R>(input: &mut I, output: &mut O, rng: &mut R) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    let mut session = GameSession::new();

    writeln!(output, "Welcome to 'Unbeatable Noughts and Crosses'!")?;
    writeln!(output, "The board layout is shown below:")?;
    write!(output, "{}", render_square_numbers())?;
    writeln!(
        output,
        "When prompted, enter the number corresponding to the square you want."
    )?;

    loop {
        let result = match prompt_human_move(input, output, &mut session)? {
            Some(result) => result,
            None => return Ok(()), // input ended mid-game
        };

        write!(output, "{}", render_board(session.board()))?;

        match result {
            GameResult::PlayerWin => {
                writeln!(output, "Congratulations! You win!")?;
                return Ok(());
            }
            GameResult::Draw => {
                writeln!(output, "It's a draw!")?;
                return Ok(());
            }
            _ => {}
        }

        writeln!(output, "Computer's move:")?;
        let (_, result) = session.play_computer(rng)?;
        write!(output, "{}", render_board(session.board()))?;

        if result == GameResult::ComputerWin {
            writeln!(output, "Computer wins!")?;
            return Ok(());
        }
    }
}

/// Prompt until the human enters a legal square, then apply the move
///
/// Returns `None` if input ends before a legal square arrives.
fn prompt_human_move<I, O>(
    input: &mut I,
    output: &mut O,
    session: &mut GameSession,
) -> Result<Option<GameResult>>
where
    I: BufRead,
    O: Write,
{
    loop {
        write!(output, "Choose your square (1-9): ")?;
        output.flush()?;

        let Some(raw) = read_line(input)? else {
            return Ok(None);
        };

        let selector = match Selector::parse(&raw) {
            Ok(selector) => selector,
            Err(Error::NotANumber { .. }) => {
                writeln!(output, "Invalid input. Please enter a number.")?;
                continue;
            }
            Err(Error::OutOfRange { .. }) => {
                writeln!(output, "Invalid input. Please enter a number between 1 and 9.")?;
                continue;
            }
            Err(other) => return Err(other),
        };

        match session.play_human(selector.row(), selector.col()) {
            Ok(result) => return Ok(Some(result)),
            Err(Error::CellOccupied { .. }) => {
                writeln!(output, "Square already taken. Choose another.")?;
            }
            Err(other) => return Err(other),
        }
    }
}

/// Save a score under a prompted name
///
/// The recorded score is always 1. The original program never wired game
/// outcomes into the leaderboard, and that behavior is kept as-is.
fn save_score<I, O, S>(input: &mut I, output: &mut O, store: &LeaderboardStore<S>) -> Result<()>
where
    I: BufRead,
    O: Write,
    S: LeaderboardRepository,
{
    write!(output, "Enter your name: ")?;
    output.flush()?;

    let Some(name) = read_line(input)? else {
        return Ok(());
    };
    if name.is_empty() {
        writeln!(output, "No name entered; score not saved.")?;
        return Ok(());
    }

    store.record(&name, 1)?;
    writeln!(output, "Score saved successfully.")?;
    Ok(())
}

/// Display the leaderboard, warning (but continuing) on corrupt storage
fn display_leaderboard<O, S>(output: &mut O, store: &LeaderboardStore<S>) -> Result<()>
where
    O: Write,
    S: LeaderboardRepository,
{
    let (leaderboard, warning) = store.load_or_empty();
    if let Some(error) = warning {
        writeln!(output, "Warning: {error}")?;
    }

    writeln!(output, "\nLEADERBOARD:")?;
    writeln!(output, "Name\tScore")?;
    write!(output, "{leaderboard}")?;
    Ok(())
}

/// Read one trimmed line, or `None` at end of input
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).map_err(|source| Error::Io {
        operation: "read console input".to_string(),
        source,
    })?;

    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}
