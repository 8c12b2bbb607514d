//! Core board types: squares, pieces, bitboards, step attack tables,
//! board codecs, and pseudo-legal move generation for knights and kings.

pub mod attacks;
mod bitboard;
mod bitboards;
mod board;
mod chess_move;
mod color;
mod error;
pub mod movegen;
mod notation;
mod piece;
mod piece_kind;
mod placement;
mod square;
mod validator;

pub use bitboard::Bitboard;
pub use bitboards::{BitboardSet, BoardId};
pub use board::{BoardState, PrettyBoard, SquareSource};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BitboardError, NotationError, SquareParseError};
pub use movegen::{MoveGenerator, MoveList, generate_moves};
pub use notation::{EMPTY_CHAR, NotationImport};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::{STARTING_FEN, STARTING_PLACEMENT};
pub use square::Square;
pub use validator::MoveValidator;
