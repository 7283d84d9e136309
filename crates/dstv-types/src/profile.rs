use serde::{Deserialize, Serialize};

use crate::token::{Face, HoleTypeTag};

/// Raw positional fields parsed from an `ST` block. Lengths in millimetres.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileHeader {
    pub order_number: Option<String>,
    pub part_id: Option<String>,
    pub item_number: Option<String>,
    pub steel_grade: Option<String>,
    pub quantity: Option<u32>,
    pub designation: String,
    pub drawing_number: Option<String>,
    pub length: f64,
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub radius: Option<f64>,
    pub web_thickness: Option<f64>,
    pub flange_thickness: Option<f64>,
    pub weight: Option<f64>,
    pub painting_surface: Option<f64>,
    pub reserved: Option<String>,
}

impl ProfileHeader {
    /// An `ST` record is usable once it carries a non-empty designation and
    /// a strictly positive length (spec §3, ProfileHeader invariants).
    pub fn is_usable(&self) -> bool {
        !self.designation.trim().is_empty() && self.length > 0.0
    }
}

/// Classified structural shape family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileKind {
    I,
    U,
    L,
    T,
    Z,
    RectTube,
    RoundTube,
    RoundBar,
    FlatBar,
    Plate,
    Custom,
    Unknown,
}

impl ProfileKind {
    /// The set of faces a feature on this profile kind may legitimately
    /// declare (spec §3 Profile invariants).
    pub fn admissible_faces(self) -> &'static [Face] {
        use Face::*;
        match self {
            ProfileKind::I | ProfileKind::U | ProfileKind::Z | ProfileKind::T => {
                &[Web, TopFlange, BottomFlange, Front, Back]
            }
            ProfileKind::L => &[Web, TopFlange, Front, Back],
            ProfileKind::RectTube | ProfileKind::RoundTube | ProfileKind::RoundBar => {
                &[Front, Back, Web]
            }
            ProfileKind::FlatBar | ProfileKind::Plate => &[Front, Back],
            ProfileKind::Custom | ProfileKind::Unknown => {
                &[Web, TopFlange, BottomFlange, Front, Back]
            }
        }
    }

    /// Resolve from an explicit single-letter code (`ST` field 6), per
    /// spec §3: `M`→RectTube, `R`→RoundTube, and `I`/`U`/`L`/`T` directly.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "M" => Some(ProfileKind::RectTube),
            "R" => Some(ProfileKind::RoundTube),
            "I" => Some(ProfileKind::I),
            "U" => Some(ProfileKind::U),
            "L" => Some(ProfileKind::L),
            "T" => Some(ProfileKind::T),
            _ => None,
        }
    }

    /// Resolve from a designation prefix (spec §4.B ST parser rule), used
    /// when no explicit code is present.
    pub fn from_designation(designation: &str) -> Self {
        let d = designation.trim().to_ascii_uppercase();
        let starts = |prefixes: &[&str]| prefixes.iter().any(|p| d.starts_with(p));

        if starts(&["IPE", "HE", "UB", "UC", "IPN"]) {
            ProfileKind::I
        } else if starts(&["UPN", "UPE", "UAP", "MC"]) || d.starts_with('C') {
            ProfileKind::U
        } else if d.starts_with('L') {
            ProfileKind::L
        } else if starts(&["RHS", "SHS"]) {
            ProfileKind::RectTube
        } else if starts(&["CHS", "PIPE"]) {
            ProfileKind::RoundTube
        } else if starts(&["PL", "PLT", "PLATE"]) {
            ProfileKind::Plate
        } else if starts(&["FL", "FB", "FLAT"]) {
            ProfileKind::FlatBar
        } else if starts(&["RND", "RD"]) {
            ProfileKind::RoundBar
        } else if d.starts_with('Z') {
            ProfileKind::Z
        } else if d.starts_with('T') {
            ProfileKind::T
        } else if d.is_empty() {
            ProfileKind::Unknown
        } else {
            ProfileKind::Custom
        }
    }

    /// Two-step classification rule from spec §4.B: explicit code wins,
    /// designation prefix is the fallback.
    pub fn classify(code: Option<&str>, designation: &str) -> Self {
        code.and_then(Self::from_code)
            .unwrap_or_else(|| Self::from_designation(designation))
    }
}

/// High-level material family derived from `ProfileKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialClass {
    Beam,
    Channel,
    Angle,
    Tube,
    Plate,
}

impl From<ProfileKind> for MaterialClass {
    fn from(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::I | ProfileKind::T | ProfileKind::Z => MaterialClass::Beam,
            ProfileKind::U => MaterialClass::Channel,
            ProfileKind::L => MaterialClass::Angle,
            ProfileKind::RectTube | ProfileKind::RoundTube | ProfileKind::RoundBar => {
                MaterialClass::Tube
            }
            ProfileKind::FlatBar | ProfileKind::Plate => MaterialClass::Plate,
            ProfileKind::Custom | ProfileKind::Unknown => MaterialClass::Plate,
        }
    }
}

/// A 2-D point in face-local coordinates (along-length, across-face), mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dist(self, other: Point2) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Kind-specific extra payload carried by a hole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HoleExtra {
    None,
    Slotted { length: f64, angle_deg: f64 },
    Rect { width: f64, height: f64 },
}

/// A single hole feature (spec §3 Hole).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hole {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    pub face: Face,
    pub kind: HoleTypeTag,
    /// Negative sentinel (below zero) denotes a through-cut, per spec.
    pub depth: f64,
    pub extra: HoleExtra,
}

impl Hole {
    pub const THROUGH: f64 = -1.0;

    pub fn is_through(&self) -> bool {
        self.depth < 0.0
    }
}

/// An ordered sequence of 2-D points on one face (spec §3 Contour).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<Point2>,
    pub face: Face,
}

const CLOSURE_TOLERANCE_MM: f64 = 0.01;

impl Contour {
    /// A contour is implicitly closed when its first and last points
    /// coincide within 0.01 mm (spec §3).
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) if self.points.len() >= 2 => {
                a.dist(*b) <= CLOSURE_TOLERANCE_MM
            }
            _ => false,
        }
    }

    pub fn bounds(&self) -> Option<Bounds2> {
        Bounds2::of(&self.points)
    }
}

/// Axis-aligned bounding box over 2-D points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds2 {
    pub fn of(points: &[Point2]) -> Option<Self> {
        let mut it = points.iter();
        let first = it.next()?;
        let mut b = Bounds2 {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in it {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        Some(b)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// An optional cut subtype recorded by the `SC` block parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutSubtype {
    Straight,
    Oblique,
}

/// A material-removing cut feature (spec §3 Cut record).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutRecord {
    pub face: Face,
    pub contour: Contour,
    pub depth: f64,
    pub through: bool,
    pub internal: bool,
    pub angle: Option<f64>,
    pub subtype: Option<CutSubtype>,
    pub is_transverse: bool,
}

/// Text alignment codes recognized by the `SI` parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A marking/engraving feature (spec §3 Marking).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marking {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub angle: f64,
    pub depth: Option<f64>,
    pub font_style: Option<u32>,
    pub align: Option<TextAlign>,
    pub face: Face,
}

/// A chamfer record parsed from a `BR` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chamfer {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub depth: f64,
    pub length: f64,
    pub edge: Option<String>,
    pub face: Face,
}

/// A fully assembled DSTV profile record: header plus all parsed features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub header: ProfileHeader,
    pub kind: ProfileKind,
    pub holes: Vec<Hole>,
    pub external_cuts: Vec<CutRecord>,
    pub internal_cuts: Vec<CutRecord>,
    pub markings: Vec<Marking>,
    pub chamfers: Vec<Chamfer>,
}

impl Profile {
    pub fn new(header: ProfileHeader) -> Self {
        let kind = ProfileKind::from_designation(&header.designation);
        Self {
            header,
            kind,
            holes: Vec::new(),
            external_cuts: Vec::new(),
            internal_cuts: Vec::new(),
            markings: Vec::new(),
            chamfers: Vec::new(),
        }
    }

    pub fn all_cuts(&self) -> impl Iterator<Item = &CutRecord> {
        self.external_cuts.iter().chain(self.internal_cuts.iter())
    }
}
