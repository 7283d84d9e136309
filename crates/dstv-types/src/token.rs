use serde::{Deserialize, Serialize};

/// A face of a profile. Feature coordinates are 2-D in the plane of their face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Web,
    TopFlange,
    BottomFlange,
    Front,
    Back,
}

/// Which of the two conflicting face-letter conventions (spec §9) this
/// pipeline run uses. Must be chosen once, explicitly, and never guessed
/// per file — the single configuration point the spec calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceConvention {
    /// `v` -> web, `o` -> top flange, `u` -> bottom flange, `h` -> front.
    Dominant,
    /// `v` -> top flange, `o` -> web, `u` -> bottom flange, `h` -> front.
    Alternate,
}

impl Default for FaceConvention {
    fn default() -> Self {
        FaceConvention::Dominant
    }
}

impl FaceConvention {
    /// Map a bare face letter to a `Face` under this convention. Returns
    /// `None` for anything that isn't one of `v`/`u`/`o`/`h`.
    pub fn map_letter(self, letter: char) -> Option<Face> {
        let lower = letter.to_ascii_lowercase();
        match (self, lower) {
            (_, 'h') => Some(Face::Front),
            (_, 'u') => Some(Face::BottomFlange),
            (FaceConvention::Dominant, 'v') => Some(Face::Web),
            (FaceConvention::Dominant, 'o') => Some(Face::TopFlange),
            (FaceConvention::Alternate, 'v') => Some(Face::TopFlange),
            (FaceConvention::Alternate, 'o') => Some(Face::Web),
            _ => None,
        }
    }
}

/// Kind-specific modifier carried by a BO hole token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleTypeTag {
    Round,
    Slotted,
    Square,
    Rectangular,
    Countersunk,
    Counterbore,
    Tapped,
}

/// Position within the source text, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Block keywords recognized at column 1 of a DSTV line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKeyword {
    St,
    En,
    Bo,
    Ak,
    Ik,
    Si,
    Sc,
    Br,
    Ko,
    Pu,
}

impl BlockKeyword {
    /// Parse a two-letter keyword, case-insensitively. Returns `None` for
    /// anything that isn't one of the ten recognized keywords.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ST" => Some(Self::St),
            "EN" => Some(Self::En),
            "BO" => Some(Self::Bo),
            "AK" => Some(Self::Ak),
            "IK" => Some(Self::Ik),
            "SI" => Some(Self::Si),
            "SC" => Some(Self::Sc),
            "BR" => Some(Self::Br),
            "KO" => Some(Self::Ko),
            "PU" => Some(Self::Pu),
            _ => None,
        }
    }
}

/// A single lexical token, carrying its original lexeme and source position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub pos: SourcePos,
    /// Face annotation attached directly to this token (e.g. a trailing
    /// face letter glued to a numeric, or a bare face-indicator token).
    pub face: Option<Face>,
    /// Hole-type modifier attached to this token, when the lexer recognized
    /// one immediately following a numeric inside a `BO` block.
    pub hole_type: Option<HoleTypeTag>,
    /// The enclosing block keyword active when this token was produced,
    /// so later stages never have to re-derive block context from position.
    pub block_context: Option<BlockKeyword>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            pos,
            face: None,
            hole_type: None,
            block_context: None,
        }
    }

    pub fn with_face(mut self, face: Face) -> Self {
        self.face = Some(face);
        self
    }

    pub fn with_hole_type(mut self, tag: HoleTypeTag) -> Self {
        self.hole_type = Some(tag);
        self
    }

    pub fn with_block_context(mut self, kw: BlockKeyword) -> Self {
        self.block_context = Some(kw);
        self
    }

    pub fn as_f64(&self) -> Option<f64> {
        match &self.kind {
            TokenKind::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// The tagged variant of lexical tokens DSTV text is decomposed into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    BlockStart(BlockKeyword),
    BlockEnd,
    Number(f64),
    Identifier,
    QuotedText(String),
    Comment,
    FaceIndicator,
    HoleTypeModifier,
    Unknown,
}
