use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

/// Longest possible capture chain: one hop per opposing piece.
pub const MAX_CHAIN_LEN: usize = 12;

#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White = 1,
    Black = -1,
}

impl Player {
    /// Sign of this player's piece codes: `+1` for White, `-1` for Black.
    pub const fn sign(self) -> i8 {
        self as i8
    }

    pub const fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(Self::White),
            -1 => Some(Self::Black),
            _ => None,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row direction a man advances in. White starts on rows 5-7 and moves
    /// toward row 0; Black starts on rows 0-2 and moves toward row 7.
    pub const fn forward(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Farthest row; a man reaching it is crowned.
    pub const fn crown_row(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    pub const fn to_code(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'w' => Some(Self::White),
            'b' => Some(Self::Black),
            _ => None,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Man = 0,
    King = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    pub const fn new(kind: PieceKind, owner: Player) -> Self {
        Self { kind, owner }
    }

    pub const fn man(owner: Player) -> Self {
        Self::new(PieceKind::Man, owner)
    }

    pub const fn king(owner: Player) -> Self {
        Self::new(PieceKind::King, owner)
    }

    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Integer cell code: `±1` for men, `±2` for kings.
    pub const fn code(self) -> i8 {
        match self.kind {
            PieceKind::Man => self.owner.sign(),
            PieceKind::King => 2 * self.owner.sign(),
        }
    }

    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            1 => Some(Self::man(Player::White)),
            2 => Some(Self::king(Player::White)),
            -1 => Some(Self::man(Player::Black)),
            -2 => Some(Self::king(Player::Black)),
            _ => None,
        }
    }
}

/// One board cell. Dark squares are permanently `Blocked` (code 3) and never
/// hold a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Blocked,
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub const fn code(self) -> i8 {
        match self {
            Self::Blocked => 3,
            Self::Empty => 0,
            Self::Occupied(piece) => piece.code(),
        }
    }

    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            3 => Some(Self::Blocked),
            0 => Some(Self::Empty),
            _ => match Piece::from_code(code) {
                Some(piece) => Some(Self::Occupied(piece)),
                None => None,
            },
        }
    }

    pub const fn piece(self) -> Option<Piece> {
        match self {
            Self::Occupied(piece) => Some(piece),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Light squares carry the game; dark squares stay blocked.
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

/// One atomic jump: a diagonal step or a single capture hop. The 4-integer
/// wire form is `(from.row, from.col, to.row, to.col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub from: Square,
    pub to: Square,
}

impl Segment {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8, u8) {
        (self.from.row, self.from.col, self.to.row, self.to.col)
    }

    pub const fn from_tuple(coords: (u8, u8, u8, u8)) -> Option<Self> {
        let (from_row, from_col, to_row, to_col) = coords;
        match (Square::new(from_row, from_col), Square::new(to_row, to_col)) {
            (Some(from), Some(to)) => Some(Self::new(from, to)),
            _ => None,
        }
    }

    pub const fn row_delta(self) -> i8 {
        self.to.row as i8 - self.from.row as i8
    }

    pub const fn col_delta(self) -> i8 {
        self.to.col as i8 - self.from.col as i8
    }

    /// Midpoint of a single 2-step capture hop.
    pub fn midpoint(self) -> Option<Square> {
        if self.row_delta().abs() == 2 && self.col_delta().abs() == 2 {
            Some(Square::new_unchecked(
                (self.from.row + self.to.row) / 2,
                (self.from.col + self.to.col) / 2,
            ))
        } else {
            None
        }
    }
}

/// An ordered, non-empty chain of segments; each segment starts where the
/// previous one landed. Length above one only occurs for chained captures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    segments: ArrayVec<Segment, MAX_CHAIN_LEN>,
}

impl Move {
    pub fn single(segment: Segment) -> Self {
        let mut segments = ArrayVec::new();
        segments.push(segment);
        Self { segments }
    }

    /// Builds a move from chained segments. Returns `None` when the sequence
    /// is empty, breaks the chain, or exceeds the longest possible chain.
    pub fn from_segments<I>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut chained = ArrayVec::new();
        for segment in segments {
            if chained.last().is_some_and(|last: &Segment| last.to != segment.from) {
                return None;
            }
            chained.try_push(segment).ok()?;
        }
        if chained.is_empty() {
            None
        } else {
            Some(Self { segments: chained })
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn origin(&self) -> Square {
        self.segments[0].from
    }

    pub fn destination(&self) -> Square {
        self.segments[self.segments.len() - 1].to
    }
}

pub type MoveList = ArrayVec<Move, 128>;

/// Generation result: all one-step moves, or all maximal capture chains
/// whenever any capture exists anywhere on the board. Never mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveSet {
    Steps(MoveList),
    Captures(MoveList),
}

impl MoveSet {
    pub fn moves(&self) -> &MoveList {
        match self {
            Self::Steps(moves) | Self::Captures(moves) => moves,
        }
    }

    pub fn into_moves(self) -> MoveList {
        match self {
            Self::Steps(moves) | Self::Captures(moves) => moves,
        }
    }

    pub fn len(&self) -> usize {
        self.moves().len()
    }

    /// An empty set is the normal end-of-game signal for that player.
    pub fn is_empty(&self) -> bool {
        self.moves().is_empty()
    }

    pub fn is_captures(&self) -> bool {
        matches!(self, Self::Captures(_))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves().iter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub white: i32,
    pub black: i32,
}

impl Scores {
    pub const fn for_player(self, player: Player) -> i32 {
        match player {
            Player::White => self.white,
            Player::Black => self.black,
        }
    }
}
