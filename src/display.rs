// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    alphabet::ENGLISH_ALPHABET,
    board::Board,
    board_layout::{BoardLayout, STANDARD_BOARD_LAYOUT, SpotType},
    matrix::Loc,
};

#[inline(always)]
pub fn empty_label(board_layout: &BoardLayout, loc: Loc) -> &'static str {
    if loc == board_layout.star() {
        return "*";
    }
    match board_layout.spot_at(loc) {
        SpotType::TripleWord => "=",
        SpotType::DoubleWord => "-",
        SpotType::TripleLetter => "\"",
        SpotType::DoubleLetter => "\'",
        SpotType::Normal => " ",
    }
}

#[inline(always)]
pub fn board_label(board: &Board, loc: Loc) -> &'static str {
    board
        .tile_at(loc)
        .and_then(|tile| ENGLISH_ALPHABET.from_board(tile.to_board()))
        .unwrap_or_else(|| empty_label(&STANDARD_BOARD_LAYOUT, loc))
}

// row 14 on top. tiles uppercase, blanks lowercase, empty squares show
// their premium.
pub struct BoardDisplay<'a>(pub &'a Board);

impl std::fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn header(f: &mut std::fmt::Formatter<'_>, cols: i8) -> std::fmt::Result {
            write!(f, "   ")?;
            for col in 0..cols {
                write!(f, "{:2}", col)?;
            }
            writeln!(f)
        }
        fn border(f: &mut std::fmt::Formatter<'_>, cols: i8) -> std::fmt::Result {
            write!(f, "   +")?;
            for _ in 1..cols {
                write!(f, "--")?;
            }
            writeln!(f, "-+")
        }
        let dim = Board::dim();
        header(f, dim.cols)?;
        border(f, dim.cols)?;
        for row in (0..dim.rows).rev() {
            write!(f, "{:2} |", row)?;
            for col in 0..dim.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", board_label(self.0, Loc::new(col, row)))?;
            }
            writeln!(f, "|{}", row)?;
        }
        border(f, dim.cols)?;
        header(f, dim.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premium_labels() {
        let layout = &STANDARD_BOARD_LAYOUT;
        assert_eq!(empty_label(layout, Loc::new(7, 7)), "*");
        assert_eq!(empty_label(layout, Loc::new(0, 0)), "=");
        assert_eq!(empty_label(layout, Loc::new(1, 1)), "-");
        assert_eq!(empty_label(layout, Loc::new(5, 1)), "\"");
        assert_eq!(empty_label(layout, Loc::new(3, 0)), "'");
        assert_eq!(empty_label(layout, Loc::new(2, 0)), " ");
    }

    #[test]
    fn tiles_replace_labels() {
        let board = Board::empty()
            .place_word("dad", Loc::new(6, 7), false, &[1])
            .unwrap();
        assert_eq!(board_label(&board, Loc::new(6, 7)), "D");
        assert_eq!(board_label(&board, Loc::new(7, 7)), "a");
        assert_eq!(board_label(&board, Loc::new(8, 7)), "D");
    }

    #[test]
    fn renders_top_row_first() {
        let board = Board::empty()
            .place_word("to", Loc::new(13, 14), false, &[])
            .unwrap();
        let rendered = BoardDisplay(&board).to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 15 + 4);
        assert_eq!(lines[2], "14 |=     '       =       '   T O|14");
        assert_eq!(lines[9], " 7 |=     '       *       '     =|7");
        assert_eq!(lines[16], " 0 |=     '       =       '     =|0");
        assert_eq!(lines[0], lines[18]);
    }
}
