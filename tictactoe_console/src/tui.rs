use console::Style;
use tictactoe::board::{Board, CellIndex};


// Renders the 3x3 board as checkered squares. Empty cells stay blank; the
// input prompt numbers them 1-9, row by row.
pub fn render_board(board: &Board) -> String {
    let colors = [
        Style::new().color256(233).on_color256(230),
        Style::new().color256(233).on_color256(222),
    ];
    let mut color_idx = 0;
    let mut ret = String::new();
    for (idx, cell) in CellIndex::all().enumerate() {
        let ch = match board.get(cell) {
            Some(mark) => mark.to_char(),
            None => ' ',
        };
        ret.push_str(&colors[color_idx].apply_to(format!(" {} ", ch)).to_string());
        color_idx = 1 - color_idx;
        if (idx + 1) % 3 == 0 {
            ret.push('\n');
        }
    }
    ret
}
