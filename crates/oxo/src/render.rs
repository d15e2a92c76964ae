//! Plain-text rendering of boards, scores and session events.

use oxo_engine::{Board, Cell, Event, MoveReport, Player, Scoreboard, Verdict};

/// Draws the board with marks as `X`/`O` and free cells as their
/// 1-based number.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let width = board.len().to_string().len();

    let rows: Vec<String> = (0..size)
        .map(|row| {
            let cells: Vec<String> = (0..size)
                .map(|column| {
                    let index = row * size + column;
                    match board.get(index) {
                        Some(Cell::Occupied(player)) => format!("{:>width$}", player.symbol()),
                        _ => format!("{:>width$}", index + 1),
                    }
                })
                .collect();
            format!(" {} ", cells.join(" | "))
        })
        .collect();

    let rule = vec!["-".repeat(width + 2); size].join("+");
    rows.join(&format!("\n{rule}\n"))
}

/// Win/draw/lose table for both players.
pub fn render_scores(scores: &Scoreboard) -> String {
    let mut lines = vec![format!("{:<8}{:>6}{:>6}{:>6}", "", "win", "draw", "lose")];
    for player in Player::ALL {
        let record = scores.record(player);
        lines.push(format!(
            "{:<8}{:>6}{:>6}{:>6}",
            player.to_string(),
            record.win,
            record.draw,
            record.lose
        ));
    }
    lines.join("\n")
}

fn render_mark(report: &MoveReport) -> String {
    let who = if *report.by_cpu() { "CPU" } else { "You" };
    let mark = report.mark();
    let mut out = format!(
        "{} ({}) marked cell {}.\n{}",
        who,
        mark.player.symbol(),
        mark.index + 1,
        render_board(report.board())
    );

    match report.verdict() {
        Verdict::Winner(winner) => {
            let cells = report
                .winning_line()
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|index| (index + 1).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(
                "\n{} wins along cells {}.\n{}",
                winner,
                cells,
                render_scores(report.scores())
            ));
        }
        Verdict::Draw => {
            out.push_str(&format!("\nDraw.\n{}", render_scores(report.scores())));
        }
        Verdict::Undecided => {}
    }
    out
}

/// Text shown for one session event.
pub fn render_event(event: &Event) -> String {
    match event {
        Event::SymbolsAssigned { seats, .. } => format!(
            "You play {} ({}), the CPU plays {} ({}).",
            seats.human,
            seats.human.symbol(),
            seats.cpu,
            seats.cpu.symbol()
        ),
        Event::RoundStarted { size, first } => format!(
            "New {size}x{size} round, {first} moves first.\n{}",
            render_board(&Board::new(*size))
        ),
        Event::MarkPlaced(report) => render_mark(report),
        Event::Withdrawal { winner, scores } => format!(
            "Round withdrawn, {} is credited with the win.\n{}",
            winner,
            render_scores(scores)
        ),
        Event::Exited => "Goodbye.".to_string(),
    }
}
