use dstv_types::CutMetadata;
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh: the "opaque reference to an indexed triangle
/// mesh" from spec §3. Position is mandatory; normals/uv are optional.
///
/// Ownership is exclusively the caller's except while a CSG operation is
/// borrowing it; `dispose` is explicit so callers that treat this as a
/// handle (rather than a plain value) have a place to hang cleanup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Option<Vec<[f32; 3]>>,
    pub uvs: Option<Vec<[f32; 2]>>,
    pub indices: Vec<u32>,
    pub user_data: UserData,
}

/// Metadata a cut handler stamps onto its result mesh (spec §4.G: "stamp
/// metadata into result's user-data").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserData {
    pub cut_metadata: Option<CutMetadata>,
    pub warnings: Vec<String>,
}

impl Mesh {
    pub fn new(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            normals: None,
            uvs: None,
            indices,
            user_data: UserData::default(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn has_position_attribute(&self) -> bool {
        !self.positions.is_empty()
    }

    /// True when every coordinate of every vertex is finite — a
    /// precondition of every CSG operation (spec §4.I pre-op validation).
    pub fn all_finite(&self) -> bool {
        self.positions
            .iter()
            .all(|p| p.iter().all(|c| c.is_finite()))
    }

    pub fn bounding_box(&self) -> Option<([f32; 3], [f32; 3])> {
        let mut it = self.positions.iter();
        let first = *it.next()?;
        let mut min = first;
        let mut max = first;
        for p in it {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        Some((min, max))
    }

    /// Translate every vertex by `offset`. Used for face-dependent
    /// placement of cut geometry (spec §4.G).
    pub fn translate(&mut self, offset: [f32; 3]) {
        for p in &mut self.positions {
            for i in 0..3 {
                p[i] += offset[i];
            }
        }
    }

    /// Rotate every vertex by `angle_rad` around the X axis. Used to
    /// orient web/bottom-flange cut geometry (spec §4.G).
    pub fn rotate_x(&mut self, angle_rad: f64) {
        let (s, c) = (angle_rad.sin() as f32, angle_rad.cos() as f32);
        for p in &mut self.positions {
            let (y, z) = (p[1], p[2]);
            p[1] = y * c - z * s;
            p[2] = y * s + z * c;
        }
    }

    /// Shear vertices by `z * tan(angle)` along the given in-plane axis,
    /// used for angled/bevel cut extrusions (spec §4.G).
    pub fn shear_along_x(&mut self, angle_rad: f64) {
        let t = angle_rad.tan() as f32;
        for p in &mut self.positions {
            p[0] += p[2] * t;
        }
    }

    /// Recompute per-vertex normals by averaging adjacent face normals.
    /// Used by the `balanced`/`quality` CSG performance modes (spec §4.I).
    pub fn recompute_normals(&mut self) {
        let mut normals = vec![[0.0f32; 3]; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            if ia >= self.positions.len() || ib >= self.positions.len() || ic >= self.positions.len() {
                continue;
            }
            let (a, b, c) = (self.positions[ia], self.positions[ib], self.positions[ic]);
            let u = sub(b, a);
            let v = sub(c, a);
            let n = cross(u, v);
            for &i in &[ia, ib, ic] {
                for k in 0..3 {
                    normals[i][k] += n[k];
                }
            }
        }
        for n in &mut normals {
            *n = normalize(*n);
        }
        self.normals = Some(normals);
    }

    /// Explicit release, for callers that model this as a handle rather
    /// than a value (spec §3 Mesh handle: "dispose is explicit").
    pub fn dispose(self) {
        drop(self);
    }
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 1e-12 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}
