use common::games::connect::{CellHighlight, ConnectEngine, Position, highlight_for};

/// Draws the board; only the first win condition is highlighted.
pub fn render_board(engine: &ConnectEngine) -> String {
    let size = engine.board_size();
    let win_condition = engine.get_win_conditions().first();
    let label_width = (size - 1).to_string().len();

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width + 1));
    for column in 0..size {
        out.push_str(&format!("{:^3}", column));
    }
    out.push('\n');

    for row in 0..size {
        out.push_str(&format!("{:>width$} ", row, width = label_width));
        for column in 0..size {
            let position = Position::new(row, column);
            let mark = engine
                .get_symbol(position)
                .map(|symbol| symbol.to_string())
                .unwrap_or_else(|| ".".to_string());
            let cell = match highlight_for(position, win_condition) {
                Some(CellHighlight::LastConnecting) => format!("[{}]", mark),
                Some(CellHighlight::MatchedLine) => format!("({})", mark),
                None => format!(" {} ", mark),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}
